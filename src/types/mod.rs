mod directive;
mod field;
mod form;
mod options;
mod outcome;
mod report;
mod rules;

pub use directive::{Predicate, Presence, RuleExpr};
pub use field::{FieldCollection, FieldState};
pub use form::{Form, Input};
pub use options::{ValidateOptions, DEFAULT_INVALID_MARKER};
pub use outcome::{Failure, FieldOutcome};
pub use report::{Report, ReportEntry, RunResult, REPORT_CLOSE, REPORT_OPEN};
pub use rules::{FieldRule, FieldRules, FieldRulesBuilder};
