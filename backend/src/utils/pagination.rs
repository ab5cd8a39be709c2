use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use serde::{Deserialize, Deserializer, Serialize};

/// Raw pagination query parameters as they arrive on the wire.
/// Malformed values are treated as absent rather than rejected, so
/// `?per_page=abc` falls back to the default instead of a 400.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub per_page: Option<i64>,
}

/// Query-string values arrive as strings; anything that does not parse
/// as an integer is ignored.
pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

/// Validated pagination parameters. Out-of-range values are clamped,
/// never rejected: per_page is capped to [1, 50], page floors at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: i64,
    pub per_page: i64,
}

impl PageParams {
    pub fn from_query(query: &PageQuery) -> Self {
        Self {
            page: query.page.unwrap_or(1).max(1),
            per_page: query
                .per_page
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        }
    }

    // Saturating: page is attacker-controlled and may be i64::MAX
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

/// Full pagination envelope for the people listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: i64,
    pub per_page: i64,
    pub total: i64,
    pub last_page: i64,
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub has_more_pages: bool,
    pub next_page_url: Option<String>,
    pub prev_page_url: Option<String>,
}

impl Pagination {
    /// Builds the metadata for one page of `total` items. `path` is the
    /// request path used for the next/prev page links.
    pub fn new(params: PageParams, total: i64, path: &str) -> Self {
        let last_page = if total == 0 {
            1
        } else {
            (total + params.per_page - 1) / params.per_page
        };

        let from = params.offset().saturating_add(1);
        let to = params.offset().saturating_add(params.per_page).min(total);
        let page_is_empty = from > total;

        let has_more_pages = params.page < last_page;
        let page_url =
            |page: i64| format!("{}?page={}&per_page={}", path, page, params.per_page);

        Self {
            current_page: params.page,
            per_page: params.per_page,
            total,
            last_page,
            from: if page_is_empty { None } else { Some(from) },
            to: if page_is_empty { None } else { Some(to) },
            has_more_pages,
            next_page_url: has_more_pages.then(|| page_url(params.page + 1)),
            prev_page_url: (params.page > 1).then(|| page_url(params.page - 1)),
        }
    }
}

/// Compact metadata used by the activity feeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityMeta {
    pub current_page: i64,
    pub total: i64,
    pub per_page: i64,
    pub last_page: i64,
}

impl ActivityMeta {
    pub fn new(params: PageParams, total: i64) -> Self {
        let last_page = if total == 0 {
            1
        } else {
            (total + params.per_page - 1) / params.per_page
        };

        Self {
            current_page: params.page,
            total,
            per_page: params.per_page,
            last_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<i64>, per_page: Option<i64>) -> PageQuery {
        PageQuery { page, per_page }
    }

    #[test]
    fn per_page_defaults_to_ten() {
        let params = PageParams::from_query(&query(None, None));
        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, 10);
    }

    #[test]
    fn per_page_is_capped_at_fifty() {
        let params = PageParams::from_query(&query(None, Some(100)));
        assert_eq!(params.per_page, 50);
    }

    #[test]
    fn per_page_floors_at_one() {
        let params = PageParams::from_query(&query(None, Some(0)));
        assert_eq!(params.per_page, 1);
        let params = PageParams::from_query(&query(None, Some(-3)));
        assert_eq!(params.per_page, 1);
    }

    #[test]
    fn page_floors_at_one() {
        let params = PageParams::from_query(&query(Some(0), None));
        assert_eq!(params.page, 1);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn middle_page_metadata() {
        let params = PageParams::from_query(&query(Some(2), Some(10)));
        let meta = Pagination::new(params, 25, "/api/people");

        assert_eq!(meta.current_page, 2);
        assert_eq!(meta.total, 25);
        assert_eq!(meta.last_page, 3);
        assert_eq!(meta.from, Some(11));
        assert_eq!(meta.to, Some(20));
        assert!(meta.has_more_pages);
        assert_eq!(
            meta.next_page_url.as_deref(),
            Some("/api/people?page=3&per_page=10")
        );
        assert_eq!(
            meta.prev_page_url.as_deref(),
            Some("/api/people?page=1&per_page=10")
        );
    }

    #[test]
    fn final_page_metadata() {
        let params = PageParams::from_query(&query(Some(3), Some(10)));
        let meta = Pagination::new(params, 25, "/api/people");

        assert_eq!(meta.from, Some(21));
        assert_eq!(meta.to, Some(25));
        assert!(!meta.has_more_pages);
        assert!(meta.next_page_url.is_none());
    }

    #[test]
    fn empty_result_set() {
        let params = PageParams::from_query(&query(None, None));
        let meta = Pagination::new(params, 0, "/api/people");

        assert_eq!(meta.total, 0);
        assert_eq!(meta.last_page, 1);
        assert_eq!(meta.from, None);
        assert_eq!(meta.to, None);
        assert!(!meta.has_more_pages);
        assert!(meta.next_page_url.is_none());
        assert!(meta.prev_page_url.is_none());
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let params = PageParams::from_query(&query(Some(i64::MAX), Some(50)));
        assert_eq!(params.offset(), i64::MAX);

        let meta = Pagination::new(params, 25, "/api/people");
        assert_eq!(meta.current_page, i64::MAX);
        assert_eq!(meta.from, None);
        assert_eq!(meta.to, None);
        assert!(!meta.has_more_pages);
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        // query-string values are strings on the wire; junk is ignored,
        // not rejected
        let parsed: PageQuery =
            serde_json::from_str(r#"{"page": "abc", "per_page": "20"}"#).unwrap();
        assert_eq!(parsed.page, None);
        assert_eq!(parsed.per_page, Some(20));

        let params = PageParams::from_query(&parsed);
        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, 20);

        let parsed: PageQuery = serde_json::from_str(r#"{}"#).unwrap();
        let params = PageParams::from_query(&parsed);
        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, 10);
    }

    #[test]
    fn activity_meta_last_page() {
        let params = PageParams::from_query(&query(Some(1), Some(10)));
        let meta = ActivityMeta::new(params, 31);
        assert_eq!(meta.last_page, 4);

        let meta = ActivityMeta::new(params, 30);
        assert_eq!(meta.last_page, 3);

        let meta = ActivityMeta::new(params, 0);
        assert_eq!(meta.last_page, 1);
    }
}
