use thiserror::Error;

/// Problems with the rules themselves, as opposed to the values being checked.
///
/// These never abort a run. They surface as report entries next to ordinary
/// validation failures, except [`RulesNotObject`](Self::RulesNotObject) and
/// [`Json`](Self::Json), which stop a JSON-driven run before any field is read.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("First param of the rule must be: required, permit_empty, required_if, required_if_not.")]
    InvalidPresence,

    #[error("{id} not found.")]
    FieldNotFound { id: String },

    #[error("No rule type")]
    UnknownRule { rule: String },

    #[error("Rules must be an object")]
    RulesNotObject,

    #[error("{id} must define a label and rules.")]
    MalformedEntry { id: String },

    #[cfg(feature = "json")]
    #[error("invalid rules json: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_presence_message() {
        assert_eq!(
            ConfigError::InvalidPresence.to_string(),
            "First param of the rule must be: required, permit_empty, required_if, required_if_not."
        );
    }

    #[test]
    fn field_not_found_message() {
        let err = ConfigError::FieldNotFound { id: "ghost".into() };
        assert_eq!(err.to_string(), "ghost not found.");
    }

    #[test]
    fn unknown_rule_message() {
        let err = ConfigError::UnknownRule {
            rule: "shiny".into(),
        };
        assert_eq!(err.to_string(), "No rule type");
    }

    #[test]
    fn rules_not_object_message() {
        assert_eq!(
            ConfigError::RulesNotObject.to_string(),
            "Rules must be an object"
        );
    }

    #[test]
    fn malformed_entry_message() {
        let err = ConfigError::MalformedEntry { id: "age".into() };
        assert_eq!(err.to_string(), "age must define a label and rules.");
    }
}
