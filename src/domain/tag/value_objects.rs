use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const TAG_NAME_MAX_CHARS: usize = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagId(pub i64);

impl TagId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("tag id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TagId> for i64 {
    fn from(value: TagId) -> Self {
        value.0
    }
}

/// Tag names compare case-insensitively for lookup, but keep the spelling
/// they were first created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagName(String);

impl TagName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::validation("tag name cannot be empty"));
        }
        if value.chars().count() > TAG_NAME_MAX_CHARS {
            return Err(DomainError::validation(format!(
                "tag \"{value}\" is longer than {TAG_NAME_MAX_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TagName> for String {
    fn from(value: TagName) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_rejects_blank() {
        assert_eq!(TagName::new("  rust ").unwrap().as_str(), "rust");
        assert!(TagName::new("   ").is_err());
    }

    #[test]
    fn rejects_overlong_names() {
        assert!(TagName::new("x".repeat(TAG_NAME_MAX_CHARS)).is_ok());
        assert!(TagName::new("x".repeat(TAG_NAME_MAX_CHARS + 1)).is_err());
    }

    #[test]
    fn compares_without_case() {
        let name = TagName::new("Python").unwrap();
        assert!(name.eq_ignore_case("python"));
        assert!(!name.eq_ignore_case("pythonic"));
    }
}
