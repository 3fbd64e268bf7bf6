use leptos::prelude::*;

/// App-wide settings for form inputs, supplied with `provide_context`.
///
/// Fields rendered without a provider fall back to [`InputConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputConfig {
    /// Prefix of generated element ids
    pub id_prefix: String,
    /// Step of the time-of-day control in date-time fields, minutes
    pub time_step_minutes: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            id_prefix: "input".to_string(),
            time_step_minutes: 15,
        }
    }
}

impl InputConfig {
    /// Config from the surrounding context, or the default one
    pub fn current() -> Self {
        use_context::<InputConfig>().unwrap_or_default()
    }

    /// `step` attribute of `<input type="time">`, which is in seconds
    pub fn time_step_seconds(&self) -> u32 {
        self.time_step_minutes.max(1) * 60
    }
}
