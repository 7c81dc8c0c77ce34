/// Marker applied to inputs that fail when no other is configured.
pub const DEFAULT_INVALID_MARKER: &str = "is-invalid";

/// Run-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct ValidateOptions {
    /// Marker cleared from every input at the start of a run and applied to
    /// each input that fails. An empty marker turns marking off.
    #[cfg_attr(
        feature = "json",
        serde(rename = "invalidMarkerClass", alias = "invalid_marker")
    )]
    pub invalid_marker: String,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            invalid_marker: DEFAULT_INVALID_MARKER.to_owned(),
        }
    }
}

impl ValidateOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.invalid_marker = marker.into();
        self
    }

    /// The marker to apply, or `None` when marking is off.
    #[must_use]
    pub fn marker(&self) -> Option<&str> {
        if self.invalid_marker.is_empty() {
            None
        } else {
            Some(&self.invalid_marker)
        }
    }
}
