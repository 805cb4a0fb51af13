//! Domain records and configuration shared by the uprofile crates.

pub mod activity;
pub mod app_config;
pub mod config;
pub mod profile;
pub mod report;

use thiserror::Error;

pub use activity::{CommentItem, PostItem};
pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use profile::{Karma, ProfileRecord, ProfileSource, UserIdentifier};
pub use report::{AggregateResult, CollectionStatus, DegradedResult, UserReport};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
