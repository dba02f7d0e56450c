//! Presenter lifecycle: `Idle -> Loading -> {Success, NoResults, Failed}`.
//!
//! Every submitted search gets a [`RequestToken`]. Only the response for the
//! most recent token is applied; responses for older tokens are dropped, so a
//! slow earlier search cannot overwrite a newer one.

use rand::Rng;
use serde_json::Value;

use crate::metrics::SyntheticRanges;
use crate::normalize::normalize;
use crate::query::SearchQuery;
use crate::tier::{TieredResults, TieringPolicy};

/// Identifies one submitted search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Why a search produced no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The proxy rejected the keyword.
    BadRequest,
    /// The proxy or provider could not be reached or answered with garbage.
    Upstream,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PresenterState {
    Idle,
    Loading {
        token: RequestToken,
        query: SearchQuery,
    },
    Success(TieredResults),
    NoResults,
    Failed(FailureKind),
}

/// State container for one search screen.
#[derive(Debug)]
pub struct Presenter<R> {
    state: PresenterState,
    issued: u64,
    policy: TieringPolicy,
    ranges: SyntheticRanges,
    rng: R,
}

impl<R: Rng> Presenter<R> {
    pub fn new(policy: TieringPolicy, ranges: SyntheticRanges, rng: R) -> Self {
        Self {
            state: PresenterState::Idle,
            issued: 0,
            policy,
            ranges,
            rng,
        }
    }

    #[must_use]
    pub fn state(&self) -> &PresenterState {
        &self.state
    }

    /// Enters `Loading` for `query`; the previous result set is discarded.
    pub fn begin(&mut self, query: SearchQuery) -> RequestToken {
        self.issued += 1;
        let token = RequestToken(self.issued);
        tracing::debug!(token = token.0, query = %query, "search submitted");
        self.state = PresenterState::Loading { token, query };
        token
    }

    /// Applies the outcome of the search identified by `token`.
    ///
    /// Returns `false` and leaves the state untouched when `token` is not the
    /// most recently issued one.
    pub fn complete(&mut self, token: RequestToken, outcome: Result<Value, FailureKind>) -> bool {
        if token.0 != self.issued {
            tracing::debug!(
                token = token.0,
                latest = self.issued,
                "dropping stale search response"
            );
            return false;
        }

        self.state = match outcome {
            Ok(payload) => {
                let products = normalize(&payload, &self.ranges, &mut self.rng);
                if products.is_empty() {
                    PresenterState::NoResults
                } else {
                    PresenterState::Success(self.policy.tier(products))
                }
            }
            Err(kind) => PresenterState::Failed(kind),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    use super::*;

    fn presenter() -> Presenter<StdRng> {
        Presenter::new(
            TieringPolicy::default(),
            SyntheticRanges::default(),
            StdRng::seed_from_u64(11),
        )
    }

    fn query(s: &str) -> SearchQuery {
        SearchQuery::parse(s).expect("valid query")
    }

    fn payload(n: usize) -> Value {
        let results: Vec<Value> = (0..n)
            .map(|i| json!({ "asin": format!("A{i}"), "title": format!("Item {i}") }))
            .collect();
        json!({ "search_results": results })
    }

    #[test]
    fn starts_idle() {
        assert_eq!(presenter().state(), &PresenterState::Idle);
    }

    #[test]
    fn begin_enters_loading() {
        let mut p = presenter();
        let token = p.begin(query("kitchen"));
        assert!(matches!(p.state(), PresenterState::Loading { .. }));
        assert_eq!(
            p.state(),
            &PresenterState::Loading {
                token,
                query: query("kitchen")
            }
        );
    }

    #[test]
    fn payload_with_results_becomes_success() {
        let mut p = presenter();
        let token = p.begin(query("kitchen"));
        assert!(p.complete(token, Ok(payload(5))));
        let PresenterState::Success(results) = p.state() else {
            panic!("expected success, got {:?}", p.state());
        };
        assert_eq!(results.len(), 5);
        assert!(results.show_upgrade);
    }

    #[test]
    fn empty_payload_is_no_results_not_failure() {
        let mut p = presenter();
        let token = p.begin(query("zzzz"));
        p.complete(token, Ok(json!({})));
        assert_eq!(p.state(), &PresenterState::NoResults);
    }

    #[test]
    fn empty_results_array_is_no_results() {
        let mut p = presenter();
        let token = p.begin(query("zzzz"));
        p.complete(token, Ok(json!({ "search_results": [] })));
        assert_eq!(p.state(), &PresenterState::NoResults);
    }

    #[test]
    fn failure_is_reported() {
        let mut p = presenter();
        let token = p.begin(query("kitchen"));
        p.complete(token, Err(FailureKind::Upstream));
        assert_eq!(p.state(), &PresenterState::Failed(FailureKind::Upstream));
    }

    #[test]
    fn success_and_failure_return_to_loading_on_next_search() {
        let mut p = presenter();
        let first = p.begin(query("kitchen"));
        p.complete(first, Err(FailureKind::Upstream));
        p.begin(query("garden"));
        assert!(matches!(p.state(), PresenterState::Loading { .. }));

        let mut p = presenter();
        let first = p.begin(query("kitchen"));
        p.complete(first, Ok(payload(2)));
        p.begin(query("garden"));
        assert!(matches!(p.state(), PresenterState::Loading { .. }));
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut p = presenter();
        let older = p.begin(query("kitchen"));
        let newer = p.begin(query("garden"));

        assert!(p.complete(newer, Ok(payload(2))));
        assert!(!p.complete(older, Err(FailureKind::Upstream)));

        let PresenterState::Success(results) = p.state() else {
            panic!("newer result should survive, got {:?}", p.state());
        };
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn new_result_set_replaces_previous() {
        let mut p = presenter();
        let first = p.begin(query("kitchen"));
        p.complete(first, Ok(payload(5)));
        let second = p.begin(query("garden"));
        p.complete(second, Ok(payload(1)));
        let PresenterState::Success(results) = p.state() else {
            panic!("expected success");
        };
        assert_eq!(results.len(), 1);
        assert_eq!(results.items[0].product.id.as_deref(), Some("A0"));
    }
}
