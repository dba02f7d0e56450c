use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Extension,
};
use pfinder_core::SearchQuery;

use crate::middleware::RequestId;

use super::{AppState, ProxyError};

const QUERY_PARAM: &str = "query";

/// Value of the first `query` parameter. Repeated parameters are allowed and
/// later occurrences are ignored.
fn first_query(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == QUERY_PARAM)
        .map(|(_, value)| value.as_str())
}

/// `GET /api/search?query=<keyword>`: forwards to Rainforest and relays the
/// provider body unchanged.
pub(super) async fn search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, ProxyError> {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::debug!(request_id = %req_id.0, error = %rejection, "unparseable search params");
            Vec::new()
        }
    };

    let Some(query) = first_query(&params).and_then(|raw| SearchQuery::parse(raw).ok()) else {
        tracing::debug!(request_id = %req_id.0, "search rejected: missing query");
        return Err(ProxyError::MissingQuery);
    };

    match state.provider.search(&query).await {
        Ok(body) => {
            tracing::info!(request_id = %req_id.0, query = %query, "search proxied");
            Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
        }
        Err(e) => {
            tracing::error!(
                request_id = %req_id.0,
                query = %query,
                error = %e,
                "rainforest search failed"
            );
            Err(ProxyError::Upstream)
        }
    }
}
