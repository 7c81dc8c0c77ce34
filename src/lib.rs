//! Declarative validation of form inputs.
//!
//! Each field gets a label and a rule expression such as
//! `required|email|min_length[3]`. The first directive decides whether the
//! field may be empty; the rest constrain its value and run left to right
//! until one fails. A run checks every field, marks the inputs that fail, and
//! returns an HTML list of everything that went wrong.
//!
//! ```
//! use ruleform::{FieldRules, Form};
//!
//! let rules = FieldRules::builder()
//!     .field("age", "Age", "required|numeric|greater_than[17]")
//!     .build();
//! let mut form = Form::new().text("age", "15");
//!
//! let result = rules.validate(&mut form);
//! assert!(!result.is_valid());
//! assert_eq!(
//!     result.report(),
//!     r#"<ul style="text-align: start;"><li>Age -> must be greater than 17</li></ul>"#
//! );
//! assert!(form.is_marked("age", "is-invalid"));
//! ```

mod error;
mod parse;
mod predicate;
mod presence;
mod types;
mod validate;

pub use error::ConfigError;
pub use parse::parse_rule;
pub use predicate::evaluate as evaluate_predicate;
pub use presence::{resolve as resolve_presence, Resolution};
pub use types::{
    Failure, FieldCollection, FieldOutcome, FieldRule, FieldRules, FieldRulesBuilder, FieldState,
    Form, Input, Predicate, Presence, Report, ReportEntry, RuleExpr, RunResult, ValidateOptions,
    DEFAULT_INVALID_MARKER, REPORT_CLOSE, REPORT_OPEN,
};
#[cfg(feature = "json")]
pub use validate::validate_json;
pub use validate::{validate, validate_field};
