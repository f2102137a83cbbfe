//! List query extractor: pagination, filter predicates and the request URL.

use axum::extract::{FromRequestParts, Query};
use axum::http::header::HOST;
use axum::http::request::Parts;

use ibroker_core::error::AppError;
use ibroker_core::types::{FilterPredicate, PageRequest, parse_query};

use crate::error::ApiError;

/// Everything a list handler needs from the request.
///
/// `page` and `limit` are read for pagination and also show up as
/// predicates; the entity allow-list drops them later.
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// Requested page.
    pub page: PageRequest,
    /// Predicates in query-string order, first occurrence per key.
    pub predicates: Vec<FilterPredicate>,
    /// Host the client addressed.
    pub host: String,
    /// Path and query of the request.
    pub path_and_query: String,
}

impl ListQuery {
    /// Build from decoded query pairs.
    pub fn from_pairs(pairs: &[(String, String)], host: &str, path_and_query: &str) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        Self {
            page: PageRequest::from_query(first("page"), first("limit")),
            predicates: parse_query(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))),
            host: host.to_string(),
            path_and_query: path_and_query.to_string(),
        }
    }

    /// Absolute URL of the request as the client saw it.
    pub fn current_url(&self, scheme: &str) -> String {
        format!("{scheme}://{}{}", self.host, self.path_and_query)
    }
}

impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::validation(format!("Invalid query string: {}", e.body_text())))?;

        let host = parts
            .headers
            .get(HOST)
            .and_then(|v| v.to_str().ok())
            .or_else(|| parts.uri.authority().map(|a| a.as_str()))
            .unwrap_or("localhost");

        let path_and_query = parts
            .uri
            .path_and_query()
            .map_or_else(|| parts.uri.path(), |pq| pq.as_str());

        Ok(Self::from_pairs(&pairs, host, path_and_query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ibroker_core::types::FilterOp;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs_reads_page_and_predicates() {
        let query = ListQuery::from_pairs(
            &pairs(&[("price_gt", "100"), ("page", "2"), ("limit", "5")]),
            "localhost:5500",
            "/offer/api/v1?price_gt=100&page=2&limit=5",
        );

        assert_eq!(query.page, PageRequest::new(2, 5));
        assert_eq!(
            query.predicates[0],
            FilterPredicate::new("price", FilterOp::GreaterThan, "100")
        );
        assert_eq!(query.predicates.len(), 3);
        assert_eq!(
            query.current_url("https"),
            "https://localhost:5500/offer/api/v1?price_gt=100&page=2&limit=5"
        );
    }

    #[test]
    fn test_first_page_value_wins() {
        let query = ListQuery::from_pairs(&pairs(&[("page", "3"), ("page", "9")]), "h", "/x");
        assert_eq!(query.page.page, 3);
        assert_eq!(query.page.limit, 10);
    }
}
