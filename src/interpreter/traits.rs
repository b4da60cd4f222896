use async_trait::async_trait;

use super::types::{NluError, NluRequest};

/// Text-understanding backend the interpreter delegates to
/// This allows swapping the hosted model for another provider or a test double
#[async_trait]
pub trait NluService: Send + Sync {
    /// Send the prompt and return the raw response text
    async fn complete(&self, request: &NluRequest) -> Result<String, NluError>;

    /// Get the name of the backing service
    fn service_name(&self) -> &'static str;
}
