use winnow::combinator::{opt, preceded};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{rest, take_while};

use crate::{Predicate, Presence};

// -- Segments ---------------------------------------------------------------

fn keyword<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_')
        .context(StrContext::Expected(StrContextValue::Description(
            "rule keyword",
        )))
        .parse_next(input)
}

/// Everything between `[` and the `]` that closes the segment, taken
/// verbatim. Inner brackets belong to the argument.
fn argument<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded('[', rest.verify_map(|arg: &'i str| arg.strip_suffix(']')))
        .context(StrContext::Expected(StrContextValue::CharLiteral(']')))
        .parse_next(input)
}

/// One `|`-separated segment: `keyword` or `keyword[argument]`.
pub fn segment<'i>(input: &mut &'i str) -> ModalResult<(&'i str, Option<&'i str>)> {
    (keyword, opt(argument)).parse_next(input)
}

// -- Classification ---------------------------------------------------------

pub fn presence(keyword: &str, arg: Option<&str>) -> Option<Presence> {
    match (keyword, arg) {
        ("required", None) => Some(Presence::Required),
        ("permit_empty", None) => Some(Presence::PermitEmpty),
        ("required_if", Some(id)) => Some(Presence::RequiredIf(id.to_owned())),
        ("required_if_not", Some(id)) => Some(Presence::RequiredIfNot(id.to_owned())),
        _ => None,
    }
}

pub fn predicate(keyword: &str, arg: Option<&str>) -> Option<Predicate> {
    // Bare kinds tolerate a bracketed argument and ignore it.
    let bare = match keyword {
        "email" => Some(Predicate::Email),
        "numeric" => Some(Predicate::Numeric),
        "unchecked" => Some(Predicate::Unchecked),
        "date" => Some(Predicate::Date),
        _ => None,
    };
    if bare.is_some() {
        return bare;
    }

    let arg = arg?.to_owned();
    let predicate = match keyword {
        "in_list" => Predicate::InList(arg),
        "not_in_list" => Predicate::NotInList(arg),
        "length" => Predicate::Length(arg),
        "min_length" => Predicate::MinLength(arg),
        "max_length" => Predicate::MaxLength(arg),
        "equal_than" => Predicate::EqualThan(arg),
        "greater_than" => Predicate::GreaterThan(arg),
        "less_than" => Predicate::LessThan(arg),
        _ => return None,
    };
    Some(predicate)
}
