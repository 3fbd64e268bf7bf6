/// Date picker flavour used by the date branch of [`super::Input`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DateMode {
    /// Calendar only, value formatted as `YYYY-MM-DD`
    Date,
    /// Calendar plus time of day, value formatted as `YYYY-MM-DDTHH:mm`
    DateTime,
}

impl DateMode {
    /// Returns the HTML `type` attribute this mode stands for.
    pub fn as_str(&self) -> &'static str {
        match self {
            DateMode::Date => "date",
            DateMode::DateTime => "datetime-local",
        }
    }
}

/// Rendering branch of the input field.
///
/// Built from the HTML `type` string: `date` and `datetime-local` select the
/// calendar picker, everything else is forwarded to a native `<input>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// Native text-like control carrying its `type` attribute
    Plain(String),
    /// Calendar picker
    Date(DateMode),
}

impl InputKind {
    pub fn parse(type_attr: &str) -> Self {
        let normalized = type_attr.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "" => InputKind::Plain("text".to_string()),
            "date" => InputKind::Date(DateMode::Date),
            "datetime-local" => InputKind::Date(DateMode::DateTime),
            _ => InputKind::Plain(normalized),
        }
    }

    /// Returns the HTML `type` attribute.
    pub fn html_type(&self) -> &str {
        match self {
            InputKind::Plain(t) => t,
            InputKind::Date(mode) => mode.as_str(),
        }
    }

    /// Whether a `<label for>` can point at the rendered control
    pub fn is_labelable(&self) -> bool {
        matches!(self, InputKind::Plain(_))
    }

    pub fn date_mode(&self) -> Option<DateMode> {
        match self {
            InputKind::Date(mode) => Some(*mode),
            InputKind::Plain(_) => None,
        }
    }
}

impl Default for InputKind {
    fn default() -> Self {
        InputKind::Plain("text".to_string())
    }
}

impl From<&str> for InputKind {
    fn from(value: &str) -> Self {
        InputKind::parse(value)
    }
}

impl From<String> for InputKind {
    fn from(value: String) -> Self {
        InputKind::parse(&value)
    }
}

impl From<DateMode> for InputKind {
    fn from(mode: DateMode) -> Self {
        InputKind::Date(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_kinds() {
        assert_eq!(InputKind::parse("date"), InputKind::Date(DateMode::Date));
        assert_eq!(
            InputKind::parse("datetime-local"),
            InputKind::Date(DateMode::DateTime)
        );
        assert_eq!(
            InputKind::parse(" DateTime-Local "),
            InputKind::Date(DateMode::DateTime)
        );
    }

    #[test]
    fn test_parse_plain_kinds() {
        assert_eq!(InputKind::parse("email"), InputKind::Plain("email".into()));
        assert_eq!(InputKind::parse("Password").html_type(), "password");
        assert_eq!(InputKind::parse(""), InputKind::default());
        assert_eq!(InputKind::default().html_type(), "text");
    }

    #[test]
    fn test_date_mode() {
        assert_eq!(InputKind::from("date").date_mode(), Some(DateMode::Date));
        assert_eq!(InputKind::from("number").date_mode(), None);
        assert_eq!(InputKind::from(DateMode::DateTime).html_type(), "datetime-local");
    }

    #[test]
    fn test_label_target() {
        assert!(InputKind::parse("email").is_labelable());
        assert!(InputKind::default().is_labelable());
        assert!(!InputKind::parse("date").is_labelable());
        assert!(!InputKind::parse("datetime-local").is_labelable());
    }
}
