use leptos::prelude::*;

use super::input_kind::InputKind;
use super::input_state::InputState;
use crate::shared::components::date_input::DateInput;
use crate::shared::config::InputConfig;
use crate::shared::dom_id::resolve_dom_id;
use crate::shared::icons::{self, icon_sized};

/// Input component with label, leading icon and inline error.
///
/// `date` and `datetime-local` types render a calendar picker, any other type
/// a native `<input>`. Either way `on_change` receives the plain value.
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value, `None` shows an empty field
    #[prop(optional, into)]
    value: MaybeProp<String>,
    /// Change handler, receives the new value
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "email", "password", "date", "datetime-local", etc.
    #[prop(optional, into)]
    input_type: InputKind,
    /// Error message, switches the field to the error style
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Leading icon name
    #[prop(optional, into)]
    icon: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the input element, generated when absent
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Autocomplete attribute
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
    /// Additional CSS classes for the wrapper
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let config = InputConfig::current();
    let input_id = resolve_dom_id(id.get_untracked(), &config.id_prefix);
    let state = InputState::new(value, error, on_change);

    let icon_name = Signal::derive(move || icon.get().filter(|name| !name.is_empty()));
    let has_icon = move || icon_name.with(Option::is_some);
    let is_disabled = Signal::derive(move || disabled.get().unwrap_or(false));
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    let label_id = input_id.clone();
    // Only the native input is a valid `for` target; the picker uses aria-labelledby
    let label_for = input_type.is_labelable().then(|| input_id.clone());
    let control = match input_type.date_mode() {
        Some(mode) => view! {
            <DateInput
                id=input_id.clone()
                labelled_by=format!("{}-label", input_id)
                state=state
                mode=mode
                class=Signal::derive(move || state.control_class(has_icon()))
                disabled=is_disabled
                required=required
                placeholder=placeholder
                time_step=config.time_step_seconds()
            />
        }
        .into_any(),
        None => {
            let html_type = input_type.html_type().to_string();
            view! {
                <input
                    id=input_id
                    class=move || state.control_class(has_icon())
                    type=html_type
                    prop:value=move || state.display_value()
                    placeholder=input_placeholder
                    disabled=move || is_disabled.get()
                    required=required
                    autocomplete=input_autocomplete
                    on:input=move |ev| state.handle_text_input(event_target_value(&ev))
                    on:focus=move |_| state.focus()
                    on:blur=move |_| state.blur()
                />
            }
            .into_any()
        }
    };

    view! {
        <div class=move || format!("form__group {}", additional_class())>
            {move || label.get().filter(|l| !l.is_empty()).map(|l| view! {
                <label
                    id=format!("{}-label", label_id)
                    class=move || state.label_class()
                    for=label_for.clone()
                >
                    {l}
                    {required.then(|| view! { <span class="form__required">"*"</span> })}
                </label>
            })}
            <div class="form__control">
                {move || icon_name.get().map(|name| view! {
                    <span class="form__icon">{icons::icon(&name)}</span>
                })}
                {control}
            </div>
            {move || state.error_message().map(|message| view! {
                <p class="form__error" role="alert">
                    <span class="form__error-icon">{icon_sized("alert-circle", 16)}</span>
                    {message}
                </p>
            })}
        </div>
    }
}
