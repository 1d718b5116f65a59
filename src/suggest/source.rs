use futures::future::BoxFuture;

use crate::api::{ApiClient, ApiError};

/// Anything that can turn a query into suggestion strings
///
/// The returned future owns everything it needs so the worker can spawn it.
pub trait SuggestionSource: Send + Sync + 'static {
    fn fetch(&self, query: String) -> BoxFuture<'static, Result<Vec<String>, ApiError>>;
}

impl SuggestionSource for ApiClient {
    fn fetch(&self, query: String) -> BoxFuture<'static, Result<Vec<String>, ApiError>> {
        let client = self.clone();
        Box::pin(async move { client.suggestions(&query).await })
    }
}
