pub mod app_config;
pub mod config;
pub mod metrics;
pub mod normalize;
pub mod products;
pub mod query;
pub mod raw;
pub mod state;
pub mod tier;

pub use app_config::{AppConfig, Environment, PresenterConfig};
pub use config::{
    load_app_config, load_app_config_from_env, load_presenter_config,
    load_presenter_config_from_env, DEFAULT_AMAZON_DOMAIN, DEFAULT_PROVIDER_BASE_URL,
};
pub use metrics::SyntheticRanges;
pub use normalize::{normalize, normalize_result};
pub use products::{Metric, NormalizedProduct, PLACEHOLDER_IMAGE_URL};
pub use query::{encode_query_value, SearchQuery};
pub use raw::{extract_results, RawImage, RawPrice, RawSearchResult};
pub use state::{FailureKind, Presenter, PresenterState, RequestToken};
pub use tier::{TieredProduct, TieredResults, TieringPolicy, DEFAULT_FREE_RESULTS};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("search keyword must not be blank")]
    BlankQuery,

    #[error("invalid synthetic range for {name}: {start}..={end} is empty")]
    EmptyRange {
        name: &'static str,
        start: u32,
        end: u32,
    },
}
