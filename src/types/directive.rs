use std::fmt;

/// The leading directive of a rule expression. Decides whether an empty
/// value is itself a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence {
    /// `required`
    Required,
    /// `permit_empty`
    PermitEmpty,
    /// `required_if[other]`: required while `other` has a value.
    RequiredIf(String),
    /// `required_if_not[other]`: required while `other` is empty.
    RequiredIfNot(String),
}

/// A value constraint following the presence directive.
///
/// Arguments are kept as the raw text between the brackets: failure messages
/// echo them verbatim, and numeric arguments are interpreted at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Email,
    Numeric,
    Unchecked,
    Date,
    InList(String),
    NotInList(String),
    Length(String),
    MinLength(String),
    MaxLength(String),
    EqualThan(String),
    GreaterThan(String),
    LessThan(String),
    /// A segment that names no known rule. Always fails with "No rule type".
    Unknown(String),
}

/// A tokenized rule expression: one presence directive, then predicates in
/// the order they were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleExpr {
    pub presence: Presence,
    pub predicates: Vec<Predicate>,
}

impl Presence {
    /// The sibling field consulted by conditional directives.
    #[must_use]
    pub fn sibling(&self) -> Option<&str> {
        match self {
            Presence::RequiredIf(id) | Presence::RequiredIfNot(id) => Some(id),
            Presence::Required | Presence::PermitEmpty => None,
        }
    }
}

impl Predicate {
    /// Message reported when this predicate rejects a value.
    #[must_use]
    pub fn failure_message(&self) -> String {
        match self {
            Predicate::Email => "must be a valid email".to_owned(),
            Predicate::Numeric => "must be a number".to_owned(),
            Predicate::Unchecked => "must be unchecked".to_owned(),
            Predicate::Date => "must be a valid date".to_owned(),
            Predicate::InList(arg) => format!("must contains {arg}"),
            Predicate::NotInList(arg) => format!("can't contains {arg}"),
            Predicate::Length(arg) => format!("length must be exactly {arg}"),
            Predicate::MinLength(arg) => format!("min length must be {arg}"),
            Predicate::MaxLength(arg) => format!("max length must be {arg}"),
            Predicate::EqualThan(arg) => format!("must be equal than {arg}"),
            Predicate::GreaterThan(arg) => format!("must be greater than {arg}"),
            Predicate::LessThan(arg) => format!("must be less than {arg}"),
            Predicate::Unknown(_) => "No rule type".to_owned(),
        }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Presence::Required => write!(f, "required"),
            Presence::PermitEmpty => write!(f, "permit_empty"),
            Presence::RequiredIf(id) => write!(f, "required_if[{id}]"),
            Presence::RequiredIfNot(id) => write!(f, "required_if_not[{id}]"),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Email => write!(f, "email"),
            Predicate::Numeric => write!(f, "numeric"),
            Predicate::Unchecked => write!(f, "unchecked"),
            Predicate::Date => write!(f, "date"),
            Predicate::InList(arg) => write!(f, "in_list[{arg}]"),
            Predicate::NotInList(arg) => write!(f, "not_in_list[{arg}]"),
            Predicate::Length(arg) => write!(f, "length[{arg}]"),
            Predicate::MinLength(arg) => write!(f, "min_length[{arg}]"),
            Predicate::MaxLength(arg) => write!(f, "max_length[{arg}]"),
            Predicate::EqualThan(arg) => write!(f, "equal_than[{arg}]"),
            Predicate::GreaterThan(arg) => write!(f, "greater_than[{arg}]"),
            Predicate::LessThan(arg) => write!(f, "less_than[{arg}]"),
            Predicate::Unknown(raw) => write!(f, "{raw}"),
        }
    }
}

impl fmt::Display for RuleExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.presence)?;
        for predicate in &self.predicates {
            write!(f, "|{predicate}")?;
        }
        Ok(())
    }
}
