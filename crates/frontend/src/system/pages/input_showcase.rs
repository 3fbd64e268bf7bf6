use leptos::prelude::*;
use serde::Serialize;
use thaw::{Button, ButtonAppearance};

use crate::shared::components::ui::{to_display_string, DateMode, Input};

/// Snapshot of the showcase form, rendered as JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShowcaseForm {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub quantity: Option<u32>,
    pub birthday: Option<String>,
    pub meeting_at: Option<String>,
}

impl ShowcaseForm {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// E-mail check used for the live error of the showcase field
pub fn email_error(email: Option<&str>) -> Option<String> {
    match email {
        Some(v) if !v.is_empty() && !v.contains('@') => {
            Some("Введите корректный email".to_string())
        }
        _ => None,
    }
}

/// Stores the emitted value, an empty string clears the field
fn store(field: RwSignal<Option<String>>) -> Callback<String> {
    Callback::new(move |v: String| field.set((!v.is_empty()).then_some(v)))
}

/// Страница с примерами поля ввода
#[component]
pub fn InputShowcasePage() -> impl IntoView {
    let full_name = RwSignal::new(None::<String>);
    let email = RwSignal::new(None::<String>);
    let password = RwSignal::new(None::<String>);
    let quantity = RwSignal::new(Some(1u32));
    let birthday = RwSignal::new(None::<String>);
    let meeting_at = RwSignal::new(Some("2024-03-15T09:30".to_string()));
    let submitted = RwSignal::new(false);

    let form = Memo::new(move |_| ShowcaseForm {
        full_name: full_name.get(),
        email: email.get(),
        password: password.get(),
        quantity: quantity.get(),
        birthday: birthday.get(),
        meeting_at: meeting_at.get(),
    });

    let email_err = Signal::derive(move || email.with(|e| email_error(e.as_deref())));
    let name_err = Signal::derive(move || {
        (submitted.get() && full_name.with(Option::is_none))
            .then(|| "Обязательное поле".to_string())
    });

    let on_submit = move |_| {
        submitted.set(true);
        if full_name.with_untracked(Option::is_none) {
            log::warn!("Showcase form submitted without a name");
            return;
        }
        log::info!("Showcase form submitted: {}", form.get_untracked().to_json());
    };

    view! {
        <div class="showcase">
            <h1 class="showcase__title">"Поле ввода"</h1>

            <div class="showcase__grid">
                <Input
                    label="Имя"
                    value=full_name
                    on_change=store(full_name)
                    placeholder="Иван Иванов"
                    icon="User"
                    error=name_err
                    required=true
                    autocomplete="name"
                />

                <Input
                    label="Email"
                    input_type="email"
                    value=email
                    on_change=store(email)
                    placeholder="name@example.com"
                    icon="mail"
                    error=email_err
                />

                <Input
                    label="Пароль"
                    input_type="password"
                    value=password
                    on_change=store(password)
                    icon="lock"
                    autocomplete="new-password"
                />

                <Input
                    label="Количество"
                    input_type="number"
                    value=Signal::derive(move || Some(to_display_string(quantity.get())))
                    on_change=Callback::new(move |v: String| quantity.set(v.trim().parse().ok()))
                    icon="hash"
                />

                <Input
                    label="Дата рождения"
                    input_type="date"
                    value=birthday
                    on_change=store(birthday)
                    placeholder="гггг-мм-дд"
                    icon="calendar"
                />

                <Input
                    label="Встреча"
                    input_type=DateMode::DateTime
                    value=meeting_at
                    on_change=store(meeting_at)
                    icon="clock"
                    required=true
                />

                <Input
                    label="Только чтение"
                    value="Недоступно для изменения"
                    disabled=true
                />
            </div>

            <div class="showcase__actions">
                <Button appearance=ButtonAppearance::Primary on_click=on_submit>
                    "Отправить"
                </Button>
            </div>

            <pre class="showcase__json">{move || form.get().to_json()}</pre>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_error() {
        assert_eq!(email_error(None), None);
        assert_eq!(email_error(Some("")), None);
        assert_eq!(email_error(Some("user@example.com")), None);
        assert!(email_error(Some("user")).is_some());
    }

    #[test]
    fn test_form_json() {
        let form = ShowcaseForm {
            full_name: Some("Ivan".to_string()),
            quantity: Some(3),
            meeting_at: Some("2024-03-15T09:30".to_string()),
            ..ShowcaseForm::default()
        };
        let json: serde_json::Value = serde_json::from_str(&form.to_json()).unwrap();
        assert_eq!(json["full_name"], "Ivan");
        assert_eq!(json["quantity"], 3);
        assert_eq!(json["meeting_at"], "2024-03-15T09:30");
        assert!(json["birthday"].is_null());
    }

    #[test]
    fn test_store_clears_on_empty() {
        let owner = Owner::new();
        owner.set();

        let field = RwSignal::new(None::<String>);
        let callback = store(field);
        callback.run("abc".to_string());
        assert_eq!(field.get_untracked().as_deref(), Some("abc"));
        callback.run(String::new());
        assert_eq!(field.get_untracked(), None);
    }
}
