//! # Validation Results
//!
//! Entities report invariant violations as data, not as errors. A
//! [`Violations`] value is empty when the entity is valid and otherwise lists
//! every `(field, message)` pair that failed. The [`ResourceActor`](crate::ResourceActor)
//! calls [`ActorEntity::validate`](crate::ActorEntity::validate) before every
//! write and refuses to commit an entity whose result is non-empty.
//!
//! Serialised, a `Violations` is a JSON object keyed by field, in the order
//! the fields were first reported:
//!
//! ```json
//! { "name": ["can't be blank"], "email": ["can't be blank"] }
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Message recorded by [`Violations::require_present`].
pub const BLANK: &str = "can't be blank";

/// A single failed rule on a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

/// The outcome of validating an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Records a violation on `field`.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.0.push(Violation {
            field: field.into(),
            message: message.into(),
        });
        self
    }

    /// Records [`BLANK`] on `field` when `value` is empty or only whitespace.
    pub fn require_present(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.push(field, BLANK);
        }
        self
    }

    /// Returns true if any violation was recorded on `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    /// `Ok(())` when valid, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Violations> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self)
        }
    }

    // Fields in first-seen order, each with its messages.
    fn grouped(&self) -> Vec<(&str, Vec<&str>)> {
        let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
        for v in &self.0 {
            match groups.iter_mut().find(|(field, _)| *field == v.field) {
                Some((_, messages)) => messages.push(v.message.as_str()),
                None => groups.push((v.field.as_str(), vec![v.message.as_str()])),
            }
        }
        groups
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for v in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", v.field, v.message)?;
            first = false;
        }
        Ok(())
    }
}

impl Serialize for Violations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let groups = self.grouped();
        let mut map = serializer.serialize_map(Some(groups.len()))?;
        for (field, messages) in &groups {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}
