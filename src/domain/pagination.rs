// src/domain/pagination.rs
use crate::domain::errors::{DomainError, DomainResult};

/// Slice of a result set to fetch for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
}

/// Page-number arithmetic over a counted result set.
///
/// A trailing page holding `orphans` items or fewer is folded into the page
/// before it. An empty result set still has one (empty) first page.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    count: u64,
    per_page: u64,
    orphans: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub number: u64,
    pub num_pages: u64,
    pub count: u64,
    pub per_page: u64,
}

impl PageMeta {
    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn next_page_number(&self) -> Option<u64> {
        self.has_next().then(|| self.number + 1)
    }

    pub fn previous_page_number(&self) -> Option<u64> {
        self.has_previous().then(|| self.number - 1)
    }

    pub fn is_paginated(&self) -> bool {
        self.num_pages > 1
    }
}

impl Paginator {
    pub fn new(count: u64, per_page: u32, orphans: u32) -> Self {
        Self {
            count,
            per_page: u64::from(per_page.max(1)),
            orphans: u64::from(orphans),
        }
    }

    pub fn num_pages(&self) -> u64 {
        if self.count == 0 {
            return 1;
        }
        let hits = self.count.saturating_sub(self.orphans).max(1);
        hits.div_ceil(self.per_page)
    }

    /// Resolve a raw `page` parameter the way list views do: a positive
    /// integer or `last`. Anything else is a `NotFound`.
    pub fn resolve_strict(&self, raw: Option<&str>) -> DomainResult<u64> {
        let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
            return Ok(1);
        };
        if raw == "last" {
            return Ok(self.num_pages());
        }
        let number = raw.parse::<u64>().map_err(|_| {
            DomainError::not_found("page is not 'last', nor can it be converted to an int")
        })?;
        self.validate_number(number)
    }

    /// Resolve a raw `page` parameter leniently: garbage yields the first
    /// page, an out-of-range number yields the last page.
    pub fn resolve_lenient(&self, raw: Option<&str>) -> u64 {
        let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
            return 1;
        };
        match raw.parse::<i64>() {
            Ok(number) => u64::try_from(number)
                .ok()
                .and_then(|number| self.validate_number(number).ok())
                .unwrap_or_else(|| self.num_pages()),
            Err(_) => 1,
        }
    }

    pub fn validate_number(&self, number: u64) -> DomainResult<u64> {
        if number < 1 {
            return Err(DomainError::not_found("that page number is less than 1"));
        }
        if number > self.num_pages() {
            return Err(DomainError::not_found("that page contains no results"));
        }
        Ok(number)
    }

    /// Window for an already validated page number.
    pub fn window(&self, number: u64) -> PageWindow {
        let bottom = (number.max(1) - 1) * self.per_page;
        let mut top = bottom + self.per_page;
        if top + self.orphans >= self.count {
            top = self.count;
        }
        PageWindow {
            offset: bottom.min(self.count),
            limit: top.saturating_sub(bottom),
        }
    }

    pub fn meta(&self, number: u64) -> PageMeta {
        PageMeta {
            number,
            num_pages: self.num_pages(),
            count: self.count,
            per_page: self.per_page,
        }
    }
}
