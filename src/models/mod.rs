use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::interpreter::NluError;

/// Which path produced a filter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FilterSource {
    Model,
    Fallback,
}

/// Structured real-estate search query
///
/// Every numeric bound is independently optional and no ordering between
/// min and max is enforced.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Filter {
    /// Place names in order of mention
    pub locations: Vec<String>,
    pub property_type: Option<String>,
    /// Square meters
    pub size_min: Option<f64>,
    pub size_max: Option<f64>,
    pub rooms_min: Option<u32>,
    pub rooms_max: Option<u32>,
    /// Million forints
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub condition: Option<String>,
    pub heating: Option<String>,
}

impl Filter {
    /// A filter without locations cannot be turned into a search
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// Outcome of interpreting one query
#[derive(Debug, Clone, Serialize)]
pub struct Interpretation {
    pub filter: Filter,
    pub source: FilterSource,
    /// Why the model path was abandoned, when it was
    pub error: Option<NluError>,
    pub interpreted_at: DateTime<Utc>,
}

impl Interpretation {
    pub fn from_model(filter: Filter) -> Self {
        Self {
            filter,
            source: FilterSource::Model,
            error: None,
            interpreted_at: Utc::now(),
        }
    }

    pub fn from_fallback(filter: Filter, error: Option<NluError>) -> Self {
        Self {
            filter,
            source: FilterSource::Fallback,
            error,
            interpreted_at: Utc::now(),
        }
    }
}
