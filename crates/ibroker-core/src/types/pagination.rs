//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Page used when the request omits or garbles `page`.
pub const DEFAULT_PAGE: u64 = 1;
/// Page size used when the request omits or garbles `limit`.
pub const DEFAULT_LIMIT: u64 = 10;

/// Requested page of a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
}

impl PageRequest {
    /// Create a new page request. Zero values fall back to the defaults.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
        }
    }

    /// Read `page` and `limit` from raw query values.
    ///
    /// Missing, non-numeric and non-positive values are replaced by the
    /// defaults. There is no upper bound on `limit`.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: positive_or(page, DEFAULT_PAGE),
            limit: positive_or(limit, DEFAULT_LIMIT),
        }
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn positive_or(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|value| *value >= 1)
        .map(|value| value as u64)
        .unwrap_or(default)
}

/// One page of rows plus the number of rows matching the filters.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Rows on this page, ordered by id.
    pub items: Vec<T>,
    /// Total rows matching the filters across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    /// Create a page.
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }

    /// Convert every row, keeping the total.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

/// Derived pagination facts for one list response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    /// Current page.
    pub page: u64,
    /// Page size.
    pub limit: u64,
    /// Rows matching the filters.
    pub total_count: u64,
    /// `ceil(total_count / limit)`, or 0 when nothing matched.
    pub total_pages: u64,
    /// Whether a later page holds rows.
    pub has_next: bool,
    /// Whether an earlier page should be linked.
    pub has_prev: bool,
    /// Absolute URL of the next page.
    pub next_link: Option<String>,
    /// Absolute URL of the previous page.
    pub prev_link: Option<String>,
}

impl PaginationState {
    /// Compute the pagination facts for `request` given the matching row count.
    pub fn compute(request: &PageRequest, total_count: u64) -> Self {
        let PageRequest { page, limit } = *request;
        Self {
            page,
            limit,
            total_count,
            total_pages: total_pages(total_count, limit),
            has_next: has_next(total_count, page, limit),
            has_prev: has_prev(total_count, page, limit),
            next_link: None,
            prev_link: None,
        }
    }

    /// Fill in the next/previous links from the absolute URL of the current request.
    pub fn with_links(mut self, current_url: &str) -> Self {
        self.next_link = self
            .has_next
            .then(|| set_page_param(current_url, self.page + 1));
        self.prev_link = self
            .has_prev
            .then(|| set_page_param(current_url, self.page - 1));
        self
    }

    /// The wire form of this state.
    pub fn meta(&self) -> PaginationMeta {
        PaginationMeta {
            next_page: self.next_link.clone().unwrap_or_default(),
            prev_page: self.prev_link.clone().unwrap_or_default(),
            total_records: self.total_count,
            total_pages: self.total_pages,
            current_page: self.page,
        }
    }
}

/// `ceil(total / limit)`, or 0 when `total` is 0.
pub fn total_pages(total: u64, limit: u64) -> u64 {
    if total == 0 || limit == 0 {
        0
    } else {
        total.div_ceil(limit)
    }
}

/// True iff rows exist beyond the current page.
pub fn has_next(total: u64, page: u64, limit: u64) -> bool {
    total != 0 && u128::from(total) > u128::from(page) * u128::from(limit)
}

/// True iff `page > 1` and the result set spans more than one page.
///
/// A request past the end of a single-page result gets no previous link.
pub fn has_prev(total: u64, page: u64, limit: u64) -> bool {
    total != 0 && page > 1 && total > limit
}

/// Replace (or append) the `page` query parameter of an absolute URL.
///
/// Other parameters keep their order and encoding. Repeated `page`
/// parameters collapse into the first.
pub fn set_page_param(url: &str, page: u64) -> String {
    let (without_fragment, fragment) = match url.split_once('#') {
        Some((head, tail)) => (head, Some(tail)),
        None => (url, None),
    };
    let (base, query) = match without_fragment.split_once('?') {
        Some((base, query)) => (base, query),
        None => (without_fragment, ""),
    };

    let replacement = format!("page={page}");
    let mut replaced = false;
    let mut parts: Vec<&str> = Vec::new();

    for part in query.split('&').filter(|part| !part.is_empty()) {
        let key = part.split_once('=').map_or(part, |(key, _)| key);
        if key == "page" {
            if !replaced {
                parts.push(&replacement);
                replaced = true;
            }
            continue;
        }
        parts.push(part);
    }
    if !replaced {
        parts.push(&replacement);
    }

    let mut out = format!("{base}?{}", parts.join("&"));
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

/// Pagination block of a list response.
///
/// Absent links serialise as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Link to the next page, or `""`.
    pub next_page: String,
    /// Link to the previous page, or `""`.
    pub prev_page: String,
    /// Rows matching the filters.
    pub total_records: u64,
    /// Number of pages.
    pub total_pages: u64,
    /// Current page.
    pub current_page: u64,
}

/// List response envelope: `{ "pagination": {...}, "data": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    /// Pagination block.
    pub pagination: PaginationMeta,
    /// Rows on this page.
    pub data: Vec<T>,
}

impl<T> PageEnvelope<T> {
    /// Wrap a page of rows.
    pub fn new(state: &PaginationState, data: Vec<T>) -> Self {
        Self {
            pagination: state.meta(),
            data,
        }
    }
}
