use std::fmt;

use super::field::FieldCollection;
use super::options::ValidateOptions;
use super::report::RunResult;

/// Label and rule expression for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub label: String,
    pub rules: String,
}

/// Ordered mapping from field id to its [`FieldRule`].
///
/// Iteration order is insertion order, and it is the order of the report.
///
/// # Example
///
/// ```
/// use ruleform::{FieldRules, Form};
///
/// let rules = FieldRules::builder()
///     .field("age", "Age", "required|numeric|greater_than[17]")
///     .field("email", "Email", "permit_empty|email")
///     .build();
///
/// let mut form = Form::new().text("age", "21").text("email", "");
/// assert!(rules.validate(&mut form).is_valid());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRules {
    entries: Vec<(String, FieldRule)>,
}

/// Builder for [`FieldRules`].
#[derive(Debug, Default)]
pub struct FieldRulesBuilder {
    entries: Vec<(String, FieldRule)>,
}

impl FieldRulesBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field. A repeated id replaces the earlier rule in place.
    #[must_use]
    pub fn field(mut self, id: &str, label: &str, rules: &str) -> Self {
        let rule = FieldRule {
            label: label.to_owned(),
            rules: rules.to_owned(),
        };
        match self.entries.iter_mut().find(|(existing, _)| existing == id) {
            Some((_, slot)) => *slot = rule,
            None => self.entries.push((id.to_owned(), rule)),
        }
        self
    }

    #[must_use]
    pub fn build(self) -> FieldRules {
        FieldRules {
            entries: self.entries,
        }
    }
}

impl FieldRules {
    #[must_use]
    pub fn builder() -> FieldRulesBuilder {
        FieldRulesBuilder::new()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FieldRule> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, rule)| rule)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.entries.iter().map(|(id, rule)| (id.as_str(), rule))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate `fields` with the default [`ValidateOptions`].
    pub fn validate<C: FieldCollection + ?Sized>(&self, fields: &mut C) -> RunResult {
        crate::validate::validate(fields, self, &ValidateOptions::default())
    }

    /// Validate `fields` with explicit options.
    pub fn validate_with<C: FieldCollection + ?Sized>(
        &self,
        fields: &mut C,
        options: &ValidateOptions,
    ) -> RunResult {
        crate::validate::validate(fields, self, options)
    }
}

#[cfg(feature = "json")]
impl FieldRules {
    /// Read a rules object of the form
    /// `{"<id>": {"label": "...", "rules": "..."}, ...}`, keeping key order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`](crate::ConfigError::Json) for malformed
    /// JSON, [`ConfigError::RulesNotObject`](crate::ConfigError::RulesNotObject)
    /// when the top level is not an object, and
    /// [`ConfigError::MalformedEntry`](crate::ConfigError::MalformedEntry) when
    /// an entry lacks a string `label` or `rules`.
    pub fn from_json(input: &str) -> Result<Self, crate::ConfigError> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        Self::from_value(&value)
    }

    /// Like [`from_json`](Self::from_json), for an already-parsed value.
    ///
    /// # Errors
    ///
    /// Same as [`from_json`](Self::from_json), minus JSON syntax errors.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, crate::ConfigError> {
        let object = value
            .as_object()
            .ok_or(crate::ConfigError::RulesNotObject)?;

        let mut builder = FieldRulesBuilder::new();
        for (id, entry) in object {
            let rule = FieldRule::from_value(id, entry)?;
            builder = builder.field(id, &rule.label, &rule.rules);
        }
        Ok(builder.build())
    }
}

#[cfg(feature = "json")]
impl FieldRule {
    /// Read one `{"label": "...", "rules": "..."}` entry.
    pub(crate) fn from_value(id: &str, entry: &serde_json::Value) -> Result<Self, crate::ConfigError> {
        let label = entry.get("label").and_then(serde_json::Value::as_str);
        let rules = entry.get("rules").and_then(serde_json::Value::as_str);
        match (label, rules) {
            (Some(label), Some(rules)) => Ok(FieldRule {
                label: label.to_owned(),
                rules: rules.to_owned(),
            }),
            _ => Err(crate::ConfigError::MalformedEntry { id: id.to_owned() }),
        }
    }
}

impl fmt::Display for FieldRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldRules({} fields)", self.entries.len())
    }
}
