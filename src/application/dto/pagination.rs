use crate::domain::pagination::PageMeta;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageInfoDto {
    pub number: u64,
    pub num_pages: u64,
    pub count: u64,
    pub per_page: u64,
    pub has_next: bool,
    pub has_previous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page_number: Option<u64>,
    pub is_paginated: bool,
}

impl From<PageMeta> for PageInfoDto {
    fn from(meta: PageMeta) -> Self {
        Self {
            number: meta.number,
            num_pages: meta.num_pages,
            count: meta.count,
            per_page: meta.per_page,
            has_next: meta.has_next(),
            has_previous: meta.has_previous(),
            next_page_number: meta.next_page_number(),
            previous_page_number: meta.previous_page_number(),
            is_paginated: meta.is_paginated(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub page: PageInfoDto,
}

impl<T> PageDto<T> {
    pub fn new(items: Vec<T>, meta: PageMeta) -> Self {
        Self {
            items,
            page: meta.into(),
        }
    }
}
