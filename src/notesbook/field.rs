//! Validated string fields.
//!
//! A [`Field`] wraps a single string and enforces a [`FieldRule`] every time
//! the value is written, at construction and on [`Field::set`]. The rule is a
//! type parameter, so a [`Tag`] and a [`Body`] are distinct types that share
//! one implementation.
//!
//! ## Rules
//!
//! - [`Tag`]: 2 to 20 characters, starting with `#`
//! - [`Body`]: 1 to 300 characters
//! - [`PlainField`]: any string
//!
//! Lengths count characters, not bytes.

use crate::error::{NotesError, Result};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

const TAG_MIN_LEN: usize = 2;
const TAG_MAX_LEN: usize = 20;
const TAG_PREFIX: char = '#';
const BODY_MIN_LEN: usize = 1;
const BODY_MAX_LEN: usize = 300;

/// A validation rule for one kind of field.
pub trait FieldRule {
    /// Short name used in debug output and error messages.
    const NAME: &'static str;

    fn validate(raw: &str) -> std::result::Result<(), FieldViolation>;
}

/// Error type for field validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldViolation {
    /// Tag is shorter than 2 or longer than 20 characters
    TagLength,
    /// Tag does not start with `#`
    TagPrefix,
    /// Body is empty or longer than 300 characters
    BodyLength,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldViolation::TagLength => write!(f, "tag length out of range"),
            FieldViolation::TagPrefix => write!(f, "tag must start with '{}'", TAG_PREFIX),
            FieldViolation::BodyLength => write!(f, "body length out of range"),
        }
    }
}

impl std::error::Error for FieldViolation {}

impl From<FieldViolation> for NotesError {
    fn from(violation: FieldViolation) -> Self {
        NotesError::Value(violation.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Plain;

impl FieldRule for Plain {
    const NAME: &'static str = "Field";

    fn validate(_raw: &str) -> std::result::Result<(), FieldViolation> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TagRule;

impl FieldRule for TagRule {
    const NAME: &'static str = "Tag";

    fn validate(raw: &str) -> std::result::Result<(), FieldViolation> {
        let len = raw.chars().count();
        if !(TAG_MIN_LEN..=TAG_MAX_LEN).contains(&len) {
            return Err(FieldViolation::TagLength);
        }
        if !raw.starts_with(TAG_PREFIX) {
            return Err(FieldViolation::TagPrefix);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BodyRule;

impl FieldRule for BodyRule {
    const NAME: &'static str = "Body";

    fn validate(raw: &str) -> std::result::Result<(), FieldViolation> {
        let len = raw.chars().count();
        if !(BODY_MIN_LEN..=BODY_MAX_LEN).contains(&len) {
            return Err(FieldViolation::BodyLength);
        }
        Ok(())
    }
}

/// A string value that always satisfies the rule `R`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Field<R> {
    value: String,
    rule: PhantomData<R>,
}

/// A category label attached to a record, e.g. `#work`.
pub type Tag = Field<TagRule>;
/// The free-text content of a record.
pub type Body = Field<BodyRule>;
/// A field with no rule beyond being a string.
pub type PlainField = Field<Plain>;

impl<R: FieldRule> Field<R> {
    /// Validates `value` and wraps it.
    ///
    /// # Examples
    /// ```
    /// use notesbook::field::Tag;
    ///
    /// assert!(Tag::new("#work").is_ok());
    /// assert!(Tag::new("work").is_err());
    /// assert!(Tag::new("#").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        R::validate(&value)?;
        Ok(Self {
            value,
            rule: PhantomData,
        })
    }

    /// Builds a field from an untyped JSON value. Anything but a string is a
    /// type error.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Self::new(s.as_str()),
            other => Err(NotesError::Type(format!(
                "{} value {} must be a string",
                R::NAME,
                other
            ))),
        }
    }

    /// Replaces the value. On failure the old value is kept.
    pub fn set(&mut self, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        R::validate(&value)?;
        self.value = value;
        Ok(())
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl<R: FieldRule> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", R::NAME, self.value)
    }
}

impl<R> fmt::Display for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<R> AsRef<str> for Field<R> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<R> PartialEq<str> for Field<R> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl<R> PartialEq<&str> for Field<R> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl<R> PartialEq<String> for Field<R> {
    fn eq(&self, other: &String) -> bool {
        &self.value == other
    }
}

impl<R> Serialize for Field<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, R: FieldRule> Deserialize<'de> for Field<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Field::new(raw).map_err(de::Error::custom)
    }
}

/// Coercion into a validated field.
///
/// Operations that take a tag or a body accept either an existing field or
/// a raw string; raw strings are validated on the way in.
pub trait IntoField<R: FieldRule> {
    fn into_field(self) -> Result<Field<R>>;
}

impl<R: FieldRule> IntoField<R> for Field<R> {
    fn into_field(self) -> Result<Field<R>> {
        Ok(self)
    }
}

impl<R: FieldRule + Clone> IntoField<R> for &Field<R> {
    fn into_field(self) -> Result<Field<R>> {
        Ok(self.clone())
    }
}

impl<R: FieldRule> IntoField<R> for &str {
    fn into_field(self) -> Result<Field<R>> {
        Field::new(self)
    }
}

impl<R: FieldRule> IntoField<R> for String {
    fn into_field(self) -> Result<Field<R>> {
        Field::new(self)
    }
}

impl<R: FieldRule> IntoField<R> for &String {
    fn into_field(self) -> Result<Field<R>> {
        Field::new(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_valid_tags() {
        assert!(Tag::new("#a").is_ok());
        assert!(Tag::new("#inc").is_ok());
        assert!(Tag::new(format!("#{}", "x".repeat(19))).is_ok());
    }

    #[test]
    fn test_tag_string_form_is_unchanged() {
        let tag = Tag::new("#digit").unwrap();
        assert_eq!(tag.to_string(), "#digit");
        assert_eq!(tag.value(), "#digit");
    }

    #[test]
    fn test_tag_too_short_or_long() {
        let err = Tag::new("#").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(err.to_string(), "Invalid value: tag length out of range");

        let long = format!("#{}", "x".repeat(20));
        assert_eq!(Tag::new(long).unwrap_err().kind(), ErrorKind::Value);
        assert_eq!(Tag::new("").unwrap_err().kind(), ErrorKind::Value);
    }

    #[test]
    fn test_tag_missing_prefix() {
        let err = Tag::new("work").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(err.to_string(), "Invalid value: tag must start with '#'");
    }

    #[test]
    fn test_tag_length_counts_characters() {
        // 1 + 19 multi-byte characters: 20 chars, well over 20 bytes
        let tag = format!("#{}", "é".repeat(19));
        assert!(Tag::new(tag).is_ok());
    }

    #[test]
    fn test_body_bounds() {
        assert!(Body::new("x").is_ok());
        assert!(Body::new("x".repeat(300)).is_ok());
        assert_eq!(Body::new("").unwrap_err().kind(), ErrorKind::Value);
        assert_eq!(
            Body::new("x".repeat(301)).unwrap_err().to_string(),
            "Invalid value: body length out of range"
        );
    }

    #[test]
    fn test_set_validates_and_keeps_old_value_on_failure() {
        let mut tag = Tag::new("#old").unwrap();
        assert!(tag.set("nohash").is_err());
        assert_eq!(tag, "#old");

        tag.set("#new").unwrap();
        assert_eq!(tag, "#new");
    }

    #[test]
    fn test_equality_with_fields_and_raw_strings() {
        let a = Tag::new("#same").unwrap();
        let b = Tag::new("#same").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, "#same");
        assert_eq!(a, String::from("#same"));
        assert!(a != "#other");
    }

    #[test]
    fn test_plain_field_accepts_anything() {
        let field = PlainField::new("").unwrap();
        assert_eq!(field.to_string(), "");
    }

    #[test]
    fn test_from_json_rejects_non_strings() {
        assert_eq!(
            Body::from_json(&json!(42)).unwrap_err().kind(),
            ErrorKind::Type
        );
        assert_eq!(
            PlainField::from_json(&Value::Null).unwrap_err().kind(),
            ErrorKind::Type
        );
        assert_eq!(Tag::from_json(&json!("#ok")).unwrap(), "#ok");
        assert_eq!(
            Tag::from_json(&json!("bad")).unwrap_err().kind(),
            ErrorKind::Value
        );
    }

    #[test]
    fn test_serde_validates_on_the_way_in() {
        let tag: Tag = serde_json::from_str("\"#ok\"").unwrap();
        assert_eq!(serde_json::to_string(&tag).unwrap(), "\"#ok\"");
        assert!(serde_json::from_str::<Tag>("\"ok\"").is_err());
    }

    #[test]
    fn test_debug_names_the_rule() {
        let body = Body::new("hello").unwrap();
        assert_eq!(format!("{:?}", body), "Body(\"hello\")");
    }

    #[test]
    fn test_violation_display() {
        assert_eq!(
            FieldViolation::TagLength.to_string(),
            "tag length out of range"
        );
        assert_eq!(
            FieldViolation::TagPrefix.to_string(),
            "tag must start with '#'"
        );
        assert_eq!(
            FieldViolation::BodyLength.to_string(),
            "body length out of range"
        );
    }
}
