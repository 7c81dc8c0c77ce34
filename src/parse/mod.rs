mod grammar;

use tracing::warn;
use winnow::Parser;

use crate::{ConfigError, Predicate, RuleExpr};

/// Split a rule expression on `|` into its presence directive and predicates.
///
/// Predicate segments that match no known rule are kept as
/// [`Predicate::Unknown`] so they fail in order, when evaluation reaches them.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPresence`] if the first segment is not one of
/// `required`, `permit_empty`, `required_if[id]` or `required_if_not[id]`.
pub fn parse_rule(input: &str) -> Result<RuleExpr, ConfigError> {
    let mut segments = input.split('|');

    let first = segments.next().unwrap_or_default();
    let presence = grammar::segment
        .parse(first)
        .ok()
        .and_then(|(keyword, arg)| grammar::presence(keyword, arg))
        .ok_or_else(|| {
            warn!(rule = input, "rule does not start with a presence directive");
            ConfigError::InvalidPresence
        })?;

    let predicates = segments.map(parse_predicate).collect();

    Ok(RuleExpr {
        presence,
        predicates,
    })
}

fn parse_predicate(segment: &str) -> Predicate {
    grammar::segment
        .parse(segment)
        .ok()
        .and_then(|(keyword, arg)| grammar::predicate(keyword, arg))
        .unwrap_or_else(|| Predicate::Unknown(segment.to_owned()))
}
