//! Roster paging: raw query, validated request and page envelope.

use serde::{Deserialize, Serialize};

use crate::domain::player::PlayerStatus;
use crate::errors::domain::{ArgumentKind, DomainError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Query string as sent by the client, before bounds are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub order: Option<SortOrder>,
    pub status: Option<PlayerStatus>,
    pub in_jail: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_page_size: u32,
    pub max_page_size: u32,
    pub max_page_index: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 100,
            max_page_index: 10_000,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilter {
    pub status: Option<PlayerStatus>,
    pub in_jail: Option<bool>,
}

/// A bounded, validated page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
    pub order: SortOrder,
    pub filter: PlayerFilter,
}

impl PageRequest {
    pub fn from_query(query: &PlayerQuery, limits: &PageLimits) -> Result<Self, DomainError> {
        let page = match query.page {
            None => 0,
            Some(p) if p < 0 => {
                return Err(pagination_error(format!("page must be >= 0, got {p}")))
            }
            Some(p) if p > i64::from(limits.max_page_index) => {
                return Err(pagination_error(format!(
                    "page must be <= {}, got {p}",
                    limits.max_page_index
                )))
            }
            Some(p) => p as u32,
        };

        let page_size = match query.page_size {
            None => limits.default_page_size,
            Some(s) if s < 1 || s > i64::from(limits.max_page_size) => {
                return Err(pagination_error(format!(
                    "page_size must be between 1 and {}, got {s}",
                    limits.max_page_size
                )))
            }
            Some(s) => s as u32,
        };

        Ok(Self {
            page,
            page_size,
            order: query.order.unwrap_or_default(),
            filter: PlayerFilter {
                status: query.status,
                in_jail: query.in_jail,
            },
        })
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.page_size)
    }
}

fn pagination_error(detail: String) -> DomainError {
    DomainError::invalid_argument(ArgumentKind::Pagination, detail)
}

/// One page of results plus enough metadata to walk the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: &PageRequest, total: u64) -> Self {
        let total_pages = total.div_ceil(u64::from(request.page_size));
        Self {
            items,
            page: request.page,
            page_size: request.page_size,
            total,
            total_pages,
            has_next: u64::from(request.page) + 1 < total_pages,
        }
    }
}
