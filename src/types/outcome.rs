use thiserror::Error;

use crate::ConfigError;

/// Why a single field did not pass. Carried as data, never raised.
#[derive(Debug, Error)]
pub enum Failure {
    /// The rule expression, or a field it refers to, is broken.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// The field named in the rules has no input.
    #[error("{id} doesn't exist.")]
    MissingField { id: String },

    /// The value did not satisfy a presence or predicate directive.
    #[error("{message}")]
    Invalid { message: String },
}

impl Failure {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Failure::Invalid {
            message: message.into(),
        }
    }

    /// Whether this failure flags the input with the run's marker.
    ///
    /// Every predicate failure marks, including an unrecognized rule, and so
    /// does an empty required field. Broken presence directives, missing
    /// siblings and missing inputs do not.
    #[must_use]
    pub fn marks_field(&self) -> bool {
        matches!(
            self,
            Failure::Invalid { .. } | Failure::Configuration(ConfigError::UnknownRule { .. })
        )
    }

    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Failure::Configuration(_))
    }
}

/// Result of validating one field.
#[derive(Debug)]
#[must_use]
pub struct FieldOutcome {
    failure: Option<Failure>,
}

impl FieldOutcome {
    pub(crate) fn valid() -> Self {
        Self { failure: None }
    }

    pub(crate) fn failed(failure: Failure) -> Self {
        Self {
            failure: Some(failure),
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }

    /// The failure message, if the field failed.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.failure.as_ref().map(ToString::to_string)
    }

    #[must_use]
    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    pub(crate) fn into_failure(self) -> Option<Failure> {
        self.failure
    }
}

impl From<Result<(), Failure>> for FieldOutcome {
    fn from(result: Result<(), Failure>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(failure) => Self::failed(failure),
        }
    }
}
