use tracing::warn;

use crate::{ConfigError, Failure, FieldCollection, FieldState, Presence};

/// How a presence directive settled for one field in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The field has a value. Predicates run.
    Filled,
    /// The field is empty and a conditional directive does not require it in
    /// this run. Predicates still run against the empty value.
    NotRequired,
    /// The field is empty under `permit_empty`. Predicates are skipped.
    EmptyPermitted,
}

impl Resolution {
    #[must_use]
    pub fn runs_predicates(self) -> bool {
        !matches!(self, Resolution::EmptyPermitted)
    }
}

/// Decide whether `own` satisfies `presence`, consulting its sibling in
/// `fields` for conditional directives.
///
/// # Errors
///
/// Returns `"it's required."` when the field is required and empty, and a
/// [`ConfigError::FieldNotFound`] when a conditional directive names a sibling
/// that does not exist. The missing sibling is reported whatever `own` holds.
pub fn resolve<C>(presence: &Presence, own: &C::Field, fields: &C) -> Result<Resolution, Failure>
where
    C: FieldCollection + ?Sized,
{
    let sibling_empty = presence
        .sibling()
        .map(|id| lookup_sibling(fields, id).map(FieldState::is_empty))
        .transpose()?;

    if !own.is_empty() {
        return Ok(Resolution::Filled);
    }

    let required = match (presence, sibling_empty) {
        (Presence::PermitEmpty, _) => return Ok(Resolution::EmptyPermitted),
        (Presence::Required, _) => true,
        (Presence::RequiredIf(_), Some(empty)) => !empty,
        (Presence::RequiredIfNot(_), Some(empty)) => empty,
        _ => false,
    };
    if required {
        return Err(Failure::invalid("it's required."));
    }
    Ok(Resolution::NotRequired)
}

fn lookup_sibling<'c, C>(fields: &'c C, id: &str) -> Result<&'c C::Field, ConfigError>
where
    C: FieldCollection + ?Sized,
{
    fields.lookup(id).ok_or_else(|| {
        warn!(sibling = id, "conditional rule names a field that does not exist");
        ConfigError::FieldNotFound { id: id.to_owned() }
    })
}
