use std::{collections::HashMap, fmt::Display};

/// Identifier of one of the five contact form fields, matching the element
/// ids on the contact page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl FieldId {
    /// The fields in the order they appear on the form.
    pub const ALL: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Subject,
        FieldId::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Subject => "subject",
            FieldId::Message => "message",
        }
    }
}

impl Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Capability to read the current text value of a form field. The handler
/// only depends on this trait, so it can run against any field surface: a
/// live form, a captured request body, or a fixture in tests.
pub trait FieldReader {
    fn value(&self, field: FieldId) -> String;
}

/// An in-memory field surface backed by a plain map. A field that was never
/// set reads as the empty string, like an untouched input element.
#[derive(Debug, Default, Clone)]
pub struct StaticFields(HashMap<FieldId, String>);

impl StaticFields {
    pub fn set(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.0.insert(field, value.into());
        self
    }
}

impl FieldReader for StaticFields {
    fn value(&self, field: FieldId) -> String {
        self.0.get(&field).cloned().unwrap_or_default()
    }
}
