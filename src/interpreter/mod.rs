pub mod fallback;
pub mod openai;
pub mod prompt;
pub mod traits;
pub mod types;

pub use fallback::extract_fallback;
pub use openai::OpenAiService;
pub use traits::NluService;
pub use types::{ModelPayload, NluError, NluRequest};

use tracing::{debug, info, warn};

use crate::models::{Filter, Interpretation};

/// Turns free text into a [`Filter`], preferring the NLU service
///
/// Without a service every query goes straight to the fallback extractor.
pub struct QueryInterpreter {
    service: Option<Box<dyn NluService>>,
}

impl QueryInterpreter {
    pub fn new(service: Box<dyn NluService>) -> Self {
        Self {
            service: Some(service),
        }
    }

    /// Interpreter that never calls out
    pub fn offline() -> Self {
        Self { service: None }
    }

    /// Interpret one query. Service and payload failures are reported in
    /// the returned [`Interpretation`] alongside the fallback filter.
    pub async fn interpret(&self, text: &str) -> Interpretation {
        let Some(service) = &self.service else {
            info!("Interpreting offline with the fallback extractor");
            return Interpretation::from_fallback(extract_fallback(text), None);
        };

        match self.ask(service.as_ref(), text).await {
            Ok(filter) => {
                info!(
                    "{} interpreted the query ({} locations)",
                    service.service_name(),
                    filter.locations.len()
                );
                Interpretation::from_model(filter)
            }
            Err(err) => {
                warn!("Falling back to keyword extraction: {}", err);
                Interpretation::from_fallback(extract_fallback(text), Some(err))
            }
        }
    }

    async fn ask(&self, service: &dyn NluService, text: &str) -> Result<Filter, NluError> {
        let request = NluRequest::deterministic(prompt::render(text));
        let response = service.complete(&request).await?;
        debug!("Raw model response: {}", response);
        parse_payload(&response)
    }
}

/// Strictly parse the first JSON object found in a model response
pub fn parse_payload(response: &str) -> Result<Filter, NluError> {
    let object = prompt::first_object(response)
        .ok_or_else(|| NluError::Payload("no JSON object in response".to_string()))?;
    let payload: ModelPayload =
        serde_json::from_str(object).map_err(|e| NluError::Payload(e.to_string()))?;
    Filter::try_from(payload)
}
