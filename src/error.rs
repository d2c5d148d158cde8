use thiserror::Error;

/// Errors produced while binding a config struct.
///
/// Every variant is terminal: the bind stops at the first one it hits.
#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum BindError {
    #[error("Invalid receiver: expected a struct")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(clapbind::invalid_receiver),
            help("pass a struct that implements `Bind`, e.g. one declared with `bindable!`")
        )
    )]
    InvalidReceiver,

    #[error("Cannot set field '{0}'")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(clapbind::cannot_set),
            help("declare the field with a visibility qualifier such as `pub`")
        )
    )]
    CannotSet(String),

    #[error("Unsupported type: {0}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(clapbind::unsupported_type)))]
    UnsupportedType(&'static str),

    #[error("Cannot use '{value}' as a value of type {type_name}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(clapbind::cannot_use)))]
    CannotUse {
        value: String,
        type_name: &'static str,
    },

    #[error("Missing required field '{0}'")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(clapbind::missing_required),
            help("pass the flag, set the environment variable, or declare a default")
        )
    )]
    MissingRequired(String),

    #[error("Flag '{0}' is defined more than once")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(clapbind::duplicate_flag),
            help("give one of the fields an explicit `flag` name")
        )
    )]
    DuplicateFlag(String),

    #[error("Invalid flag name '{0}'")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(clapbind::invalid_flag_name),
            help("flag names must be non-empty and must not start with '-'")
        )
    )]
    InvalidFlagName(String),

    #[error("{0}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(clapbind::flags)))]
    Flags(#[from] clap::Error),
}

impl BindError {
    pub(crate) fn cannot_use(value: &str, type_name: &'static str) -> Self {
        BindError::CannotUse {
            value: value.to_string(),
            type_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cannot_use_formats_value_and_type() {
        let err = BindError::cannot_use("wrong", "i64");
        let msg = err.to_string();
        assert!(msg.contains("wrong"));
        assert!(msg.contains("i64"));
    }

    #[test]
    fn missing_required_names_field() {
        let err = BindError::MissingRequired("db-url".into());
        assert!(err.to_string().contains("db-url"));
    }

    #[test]
    fn invalid_flag_name_quotes_key() {
        let err = BindError::InvalidFlagName("-x-port".into());
        assert_eq!(err.to_string(), "Invalid flag name '-x-port'");
    }

    #[test]
    fn unsupported_type_names_kind() {
        let err = BindError::UnsupportedType("f32");
        assert_eq!(err.to_string(), "Unsupported type: f32");
    }
}
