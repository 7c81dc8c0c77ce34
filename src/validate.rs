use tracing::{debug, warn};

use crate::parse::parse_rule;
use crate::{
    ConfigError, Failure, FieldCollection, FieldOutcome, FieldRule, FieldRules, Report,
    ReportEntry, RunResult, ValidateOptions,
};

/// Validate one field against a rule expression.
///
/// Presence is resolved first; predicates then run left to right and stop at
/// the first failure. A failure that [marks](Failure::marks_field) the field
/// applies `marker` to it before returning. Success never touches markers.
pub fn validate_field<C>(fields: &mut C, id: &str, rules: &str, marker: Option<&str>) -> FieldOutcome
where
    C: FieldCollection + ?Sized,
{
    let result = check_field(&*fields, id, rules);

    if let (Err(failure), Some(marker)) = (&result, marker) {
        if failure.marks_field() {
            fields.mark_invalid(id, marker);
        }
    }

    FieldOutcome::from(result)
}

fn check_field<C>(fields: &C, id: &str, rules: &str) -> Result<(), Failure>
where
    C: FieldCollection + ?Sized,
{
    let field = fields
        .lookup(id)
        .ok_or_else(|| Failure::MissingField { id: id.to_owned() })?;

    let expr = parse_rule(rules)?;

    let resolution = crate::presence::resolve(&expr.presence, field, fields)?;
    if !resolution.runs_predicates() {
        return Ok(());
    }

    for predicate in &expr.predicates {
        crate::predicate::evaluate(predicate, field)?;
    }
    Ok(())
}

/// Validate every field in `rules` against `fields`.
///
/// The run first clears the configured marker from every input, then marks
/// each input that fails. Missing inputs, broken rules and rejected values
/// each add one report entry, in `rules` order, and never stop the run.
pub fn validate<C>(fields: &mut C, rules: &FieldRules, options: &ValidateOptions) -> RunResult
where
    C: FieldCollection + ?Sized,
{
    let marker = options.marker();
    reset_markers(fields, marker);

    let mut report = Report::default();
    for (id, rule) in rules.iter() {
        run_entry(fields, id, Ok(rule), marker, &mut report);
    }
    finish(report)
}

/// Validate against a JSON rules object, as read by
/// [`FieldRules::from_json`].
///
/// Markers are cleared before the JSON is inspected. Malformed JSON or a
/// top level that is not an object ends the run with a single entry. An entry
/// without a string `label` and `rules` is reported and the run moves on.
#[cfg(feature = "json")]
pub fn validate_json<C>(fields: &mut C, json: &str, options: &ValidateOptions) -> RunResult
where
    C: FieldCollection + ?Sized,
{
    let marker = options.marker();
    reset_markers(fields, marker);

    let value: serde_json::Value = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(err) => return rejected(ConfigError::from(err)),
    };
    let Some(object) = value.as_object() else {
        return rejected(ConfigError::RulesNotObject);
    };

    let mut report = Report::default();
    for (id, entry) in object {
        match FieldRule::from_value(id, entry) {
            Ok(rule) => run_entry(fields, id, Ok(&rule), marker, &mut report),
            Err(err) => run_entry(fields, id, Err(err), marker, &mut report),
        }
    }
    finish(report)
}

fn reset_markers<C>(fields: &mut C, marker: Option<&str>)
where
    C: FieldCollection + ?Sized,
{
    if let Some(marker) = marker {
        fields.clear_all_marked(marker);
    }
}

fn run_entry<C>(
    fields: &mut C,
    id: &str,
    rule: Result<&FieldRule, ConfigError>,
    marker: Option<&str>,
    report: &mut Report,
) where
    C: FieldCollection + ?Sized,
{
    let rule = match rule {
        Ok(rule) => rule,
        Err(err) => {
            warn!(field = id, error = %err, "skipping malformed rule entry");
            report.push(ReportEntry::new(id, None, err.into()));
            return;
        }
    };

    if fields.lookup(id).is_none() {
        warn!(field = id, "rules name a field that does not exist");
        report.push(ReportEntry::new(
            id,
            Some(rule.label.clone()),
            Failure::MissingField { id: id.to_owned() },
        ));
        return;
    }

    let outcome = validate_field(fields, id, &rule.rules, marker);
    debug!(field = id, valid = outcome.is_valid(), "field validated");

    if let Some(failure) = outcome.into_failure() {
        if failure.is_configuration() {
            warn!(field = id, rules = %rule.rules, error = %failure, "rule configuration error");
        }
        report.push(ReportEntry::new(id, Some(rule.label.clone()), failure));
    }
}

#[cfg(feature = "json")]
fn rejected(err: ConfigError) -> RunResult {
    warn!(error = %err, "rules rejected before validation");
    let mut report = Report::default();
    report.push(ReportEntry::new("", None, err.into()));
    finish(report)
}

fn finish(report: Report) -> RunResult {
    let result = RunResult::from_report(report);
    debug!(valid = result.is_valid(), errors = result.entries().len(), "validation run finished");
    result
}
