// src/domain/tag/services.rs
use crate::domain::errors::DomainResult;
use crate::domain::tag::TagName;

/// Split a user supplied tag string into trimmed tokens.
///
/// A string containing a comma is split on commas only, so `"a b, c"`
/// yields `["a b", "c"]`. Otherwise it is split on whitespace. Empty tokens
/// are dropped.
pub fn parse_tag_string(raw: &str) -> Vec<String> {
    let tokens: Vec<&str> = if raw.contains(',') {
        raw.split(',').collect()
    } else {
        raw.split_whitespace().collect()
    };

    tokens
        .into_iter()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// How an article's tag associations change on write. Applied inside the
/// transaction that writes the article row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagReconciliation {
    /// Get-or-create and attach each name, keeping existing associations.
    Attach(Vec<TagName>),
    /// Drop every association the article has at write time, then attach.
    Replace(Vec<TagName>),
}

impl TagReconciliation {
    pub fn names(&self) -> &[TagName] {
        match self {
            Self::Attach(names) | Self::Replace(names) => names,
        }
    }

    pub fn replaces_existing(&self) -> bool {
        matches!(self, Self::Replace(_))
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Self::Attach(names) if names.is_empty())
    }
}

pub struct TagManager;

impl TagManager {
    /// Parse and validate a tag string. Names repeated with different case
    /// collapse into the first spelling.
    pub fn parse(raw: &str) -> DomainResult<Vec<TagName>> {
        let mut names: Vec<TagName> = Vec::new();
        for token in parse_tag_string(raw) {
            let name = TagName::new(token)?;
            if !names.iter().any(|known| known.eq_ignore_case(name.as_str())) {
                names.push(name);
            }
        }
        Ok(names)
    }

    pub fn plan_for_create(names: Vec<TagName>) -> TagReconciliation {
        TagReconciliation::Attach(names)
    }

    /// Every association present when the write runs is removed and the new
    /// names attached. Tags themselves are never deleted.
    pub fn plan_for_update(names: Vec<TagName>) -> TagReconciliation {
        TagReconciliation::Replace(names)
    }
}
