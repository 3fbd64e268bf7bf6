//! View-model of the [`super::Input`] field

use std::fmt::Display;

use chrono::NaiveDateTime;
use leptos::prelude::*;

use super::input_kind::DateMode;
use crate::shared::date_utils::{format_selection, parse_date_value};

/// Converts an optional value into what the control shows.
/// `None` becomes an empty string, so the control never loses its value.
pub fn to_display_string<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Per-instance state of an input field
#[derive(Clone, Copy)]
pub struct InputState {
    /// Focus flag, styling only
    pub focused: RwSignal<bool>,
    value: Signal<String>,
    error: Signal<Option<String>>,
    on_change: Option<Callback<String>>,
}

impl InputState {
    pub fn new(
        value: MaybeProp<String>,
        error: MaybeProp<String>,
        on_change: Option<Callback<String>>,
    ) -> Self {
        Self {
            focused: RwSignal::new(false),
            value: Signal::derive(move || to_display_string(value.get())),
            error: Signal::derive(move || error.get().filter(|e| !e.is_empty())),
            on_change,
        }
    }

    /// Value shown by the control (tracked)
    pub fn display_value(&self) -> String {
        self.value.get()
    }

    /// Error message, empty strings count as no error (tracked)
    pub fn error_message(&self) -> Option<String> {
        self.error.get()
    }

    pub fn has_error(&self) -> bool {
        self.error.with(Option::is_some)
    }

    pub fn is_focused(&self) -> bool {
        self.focused.get()
    }

    pub fn focus(&self) {
        self.focused.set(true);
    }

    pub fn blur(&self) {
        self.focused.set(false);
    }

    /// Hands a plain value to the parent. Without a handler the value is dropped.
    pub fn emit(&self, value: String) {
        if let Some(handler) = self.on_change {
            handler.run(value);
        }
    }

    /// Text branch edit
    pub fn handle_text_input(&self, text: String) {
        self.emit(text);
    }

    /// Current value as the picker sees it (tracked)
    pub fn parsed_value(&self, mode: DateMode) -> Option<NaiveDateTime> {
        let raw = self.value.get();
        let parsed = parse_date_value(&raw, mode);
        if parsed.is_none() && !raw.trim().is_empty() {
            log::debug!("Input: cannot parse {:?} as {}", raw, mode.as_str());
        }
        parsed
    }

    /// Date branch selection. Emits only when the selection differs from the
    /// current value, so pushing the value into the picker is not echoed back.
    ///
    /// Returns the value the picker has to show afterwards: the selection when
    /// the parent took it, the untouched value when the parent ignored it.
    pub fn commit_selection(
        &self,
        selection: Option<NaiveDateTime>,
        mode: DateMode,
    ) -> Option<NaiveDateTime> {
        let current = self
            .value
            .with_untracked(|raw| parse_date_value(raw, mode));
        if current == selection {
            return current;
        }
        self.emit(format_selection(selection, mode));
        self.value.with_untracked(|raw| parse_date_value(raw, mode))
    }

    /// Label classes (tracked)
    pub fn label_class(&self) -> String {
        if self.has_error() {
            "form__label form__label--error".to_string()
        } else {
            "form__label".to_string()
        }
    }

    /// Control classes: error wins over focus (tracked)
    pub fn control_class(&self, with_icon: bool) -> String {
        let mut class = String::from("form__input");
        if with_icon {
            class.push_str(" form__input--with-icon");
        }
        if self.has_error() {
            class.push_str(" form__input--error");
        } else if self.is_focused() {
            class.push_str(" form__input--focused");
        }
        class
    }
}
