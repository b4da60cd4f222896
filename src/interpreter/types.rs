use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Filter;

/// Why the model path could not produce a filter
#[derive(Debug, Clone, Error, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum NluError {
    /// Credential rejected (401/403)
    #[error("NLU service rejected the credential: {0}")]
    Auth(String),
    /// 429 from the service
    #[error("NLU service rate limit reached: {0}")]
    RateLimited(String),
    #[error("NLU service request failed: {0}")]
    Transport(String),
    /// Response held no usable structured object
    #[error("could not parse NLU response: {0}")]
    Payload(String),
}

impl From<reqwest::Error> for NluError {
    fn from(err: reqwest::Error) -> Self {
        NluError::Transport(err.to_string())
    }
}

/// One prompt sent to the NLU service
#[derive(Debug, Clone, PartialEq)]
pub struct NluRequest {
    pub prompt: String,
    /// Always 0 for query interpretation
    pub temperature: f32,
}

impl NluRequest {
    pub fn deterministic(prompt: String) -> Self {
        Self {
            prompt,
            temperature: 0.0,
        }
    }
}

/// Object schema the model is asked to answer with
///
/// Absent keys and `null` both deserialize to `None`.
#[derive(Debug, Default, Deserialize)]
pub struct ModelPayload {
    #[serde(default)]
    pub locations: Option<Vec<String>>,
    #[serde(default, rename = "type")]
    pub property_type: Option<String>,
    #[serde(default)]
    pub size_min: Option<f64>,
    #[serde(default)]
    pub size_max: Option<f64>,
    #[serde(default)]
    pub rooms_min: Option<f64>,
    #[serde(default)]
    pub rooms_max: Option<f64>,
    #[serde(default)]
    pub price_min: Option<f64>,
    #[serde(default)]
    pub price_max: Option<f64>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub heating: Option<String>,
}

impl TryFrom<ModelPayload> for Filter {
    type Error = NluError;

    fn try_from(payload: ModelPayload) -> Result<Self, Self::Error> {
        let locations = payload
            .locations
            .unwrap_or_default()
            .into_iter()
            .map(|loc| loc.trim().to_string())
            .filter(|loc| !loc.is_empty())
            .collect();

        Ok(Filter {
            locations,
            property_type: label(payload.property_type),
            size_min: amount("size_min", payload.size_min)?,
            size_max: amount("size_max", payload.size_max)?,
            rooms_min: rooms("rooms_min", payload.rooms_min)?,
            rooms_max: rooms("rooms_max", payload.rooms_max)?,
            price_min: amount("price_min", payload.price_min)?,
            price_max: amount("price_max", payload.price_max)?,
            condition: label(payload.condition),
            heating: label(payload.heating),
        })
    }
}

fn label(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn amount(field: &str, value: Option<f64>) -> Result<Option<f64>, NluError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(NluError::Payload(format!(
            "{} must be a non-negative number, got {}",
            field, v
        ))),
        other => Ok(other),
    }
}

fn rooms(field: &str, value: Option<f64>) -> Result<Option<u32>, NluError> {
    match amount(field, value)? {
        Some(v) if v.fract() != 0.0 || v > u32::MAX as f64 => Err(NluError::Payload(format!(
            "{} must be a whole number, got {}",
            field, v
        ))),
        Some(v) => Ok(Some(v as u32)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Filter, NluError> {
        let payload: ModelPayload = serde_json::from_str(json).unwrap();
        Filter::try_from(payload)
    }

    #[test]
    fn missing_and_null_keys_are_absent() {
        let filter = parse(r#"{"locations": ["Érd"], "type": null, "price_max": 40}"#).unwrap();
        assert_eq!(filter.locations, vec!["Érd"]);
        assert_eq!(filter.property_type, None);
        assert_eq!(filter.price_max, Some(40.0));
        assert_eq!(filter.size_min, None);
        assert_eq!(filter.rooms_min, None);
    }

    #[test]
    fn blank_labels_and_locations_are_dropped() {
        let filter = parse(r#"{"locations": [" Budapest ", ""], "type": "  ", "heating": "gáz"}"#)
            .unwrap();
        assert_eq!(filter.locations, vec!["Budapest"]);
        assert_eq!(filter.property_type, None);
        assert_eq!(filter.heating.as_deref(), Some("gáz"));
    }

    #[test]
    fn rooms_accept_whole_floats() {
        let filter = parse(r#"{"locations": ["Pécs"], "rooms_min": 2.0, "rooms_max": 4}"#).unwrap();
        assert_eq!(filter.rooms_min, Some(2));
        assert_eq!(filter.rooms_max, Some(4));
    }

    #[test]
    fn fractional_rooms_are_rejected() {
        let err = parse(r#"{"locations": ["Pécs"], "rooms_min": 2.5}"#).unwrap_err();
        assert!(matches!(err, NluError::Payload(_)));
    }

    #[test]
    fn negative_numbers_are_rejected() {
        let err = parse(r#"{"locations": ["Pécs"], "size_min": -10}"#).unwrap_err();
        assert!(matches!(err, NluError::Payload(_)));
    }
}
