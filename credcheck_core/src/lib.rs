mod validation;
pub use validation::{Outcome, Validation};

mod probe;
pub use probe::{http_client, probe};

pub mod report;

pub const USER_AGENT: &str = concat!("credcheck/", env!("CARGO_PKG_VERSION"));

/// A single authenticated check against one service.
#[async_trait::async_trait]
pub trait Validator
where
    Self: Send + Sync,
{
    /// Human readable name of the service, e.g. `Spotify`
    fn service(&self) -> &'static str;

    async fn validate(&self) -> Validation;
}
