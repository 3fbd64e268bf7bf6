use crate::shared::config::InputConfig;
use crate::system::pages::InputShowcasePage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Settings shared by every Input on the page
    provide_context(InputConfig::default());

    view! {
        <ConfigProvider>
            <InputShowcasePage />
        </ConfigProvider>
    }
}
