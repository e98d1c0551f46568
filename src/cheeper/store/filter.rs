use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// Query over the top-level fields of a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Matches every document.
    All,
    /// Field equals the value exactly.
    Eq(&'static str, Value),
    /// Field is a timestamp within `[start, end]`, both ends included.
    Between {
        field: &'static str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// Every inner filter matches.
    And(Vec<Filter>),
}

impl Filter {
    pub fn eq(field: &'static str, value: impl Into<Value>) -> Self {
        Filter::Eq(field, value.into())
    }

    /// Equality on a field holding an ID.
    pub fn id(field: &'static str, id: &Uuid) -> Self {
        Filter::Eq(field, Value::String(id.to_string()))
    }

    pub fn between(field: &'static str, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Filter::Between { field, start, end }
    }

    pub fn and(self, other: Filter) -> Self {
        match self {
            Filter::All => other,
            Filter::And(mut filters) => {
                filters.push(other);
                Filter::And(filters)
            }
            first => Filter::And(vec![first, other]),
        }
    }

    pub fn matches(&self, doc: &Value) -> bool {
        match self {
            Filter::All => true,
            Filter::Eq(field, expected) => doc.get(*field) == Some(expected),
            Filter::Between { field, start, end } => match timestamp(doc.get(*field)) {
                Some(at) => *start <= at && at <= *end,
                None => false,
            },
            Filter::And(filters) => filters.iter().all(|f| f.matches(doc)),
        }
    }
}

// Timestamps are RFC 3339 strings with variable sub-second digits, so they
// only order correctly once parsed.
fn timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    let raw = value?.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|at| at.with_timezone(&Utc))
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "*"),
            Filter::Eq(field, value) => write!(f, "{}={}", field, value),
            Filter::Between { field, start, end } => {
                write!(f, "{} in [{}, {}]", field, start.to_rfc3339(), end.to_rfc3339())
            }
            Filter::And(filters) => {
                let parts: Vec<String> = filters.iter().map(|x| x.to_string()).collect();
                write!(f, "{}", parts.join(" & "))
            }
        }
    }
}
