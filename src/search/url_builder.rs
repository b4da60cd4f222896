use serde::Serialize;

use super::vocabulary::{Vocabulary, CONDITIONS, HEATING, PROPERTY_TYPES};
use crate::models::Filter;

pub const BASE_URL: &str = "https://ingatlan.com/lista/";
/// Joins path segments in the URL
pub const URL_SEPARATOR: &str = "+";
/// Joins path segments in the human-readable preview
pub const DISPLAY_SEPARATOR: &str = ", ";

const LISTING_INTENT: &str = "elado";
const DISTRICT_MARKER: &str = "kerület";

const PRICE_FLOOR_MILLIONS: f64 = 1.0;
const PRICE_CEILING_MILLIONS: f64 = 500.0;
const ROOMS_FLOOR: u32 = 1;
const ROOMS_CEILING: u32 = 10;
const AREA_FLOOR: f64 = 20.0;
const AREA_CEILING: f64 = 500.0;

/// A rendered vendor search link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchUrl {
    pub url: String,
    /// Path segments in emission order
    pub segments: Vec<String>,
}

impl SearchUrl {
    pub fn preview(&self) -> String {
        self.segments.join(DISPLAY_SEPARATOR)
    }
}

/// Render `filter` as an ingatlan.com listing URL.
///
/// Returns `None` when the filter has no locations. Out-of-order ranges are
/// passed through as given; only missing bounds are defaulted.
pub fn build_url(filter: &Filter) -> Option<SearchUrl> {
    if filter.locations.is_empty() {
        return None;
    }

    let mut segments: Vec<String> = filter
        .locations
        .iter()
        .map(|loc| location_segment(loc))
        .collect();

    segments.push(LISTING_INTENT.to_string());

    push_category(&mut segments, &PROPERTY_TYPES, filter.property_type.as_deref());
    push_category(&mut segments, &CONDITIONS, filter.condition.as_deref());
    push_category(&mut segments, &HEATING, filter.heating.as_deref());

    if filter.price_min.is_some() || filter.price_max.is_some() {
        let min = millions_to_forints(filter.price_min.unwrap_or(PRICE_FLOOR_MILLIONS));
        let max = millions_to_forints(filter.price_max.unwrap_or(PRICE_CEILING_MILLIONS));
        segments.push(format!("price-{}-{}", min, max));
    }

    if filter.rooms_min.is_some() || filter.rooms_max.is_some() {
        let min = filter.rooms_min.unwrap_or(ROOMS_FLOOR);
        let max = filter.rooms_max.unwrap_or(ROOMS_CEILING);
        segments.push(format!("rooms-{}-{}", min, max));
    }

    if filter.size_min.is_some() || filter.size_max.is_some() {
        let min = whole(filter.size_min.unwrap_or(AREA_FLOOR));
        let max = whole(filter.size_max.unwrap_or(AREA_CEILING));
        segments.push(format!("area-{}-{}", min, max));
    }

    let url = format!("{}{}", BASE_URL, segments.join(URL_SEPARATOR));
    Some(SearchUrl { url, segments })
}

/// Path token for one place name
///
/// Budapest districts ("Budapest 13. kerület") lose their periods; every
/// location is lowercased with each space turned into a hyphen.
/// Diacritics are kept.
fn location_segment(location: &str) -> String {
    let mut token = location.trim().to_lowercase();
    if token.contains(DISTRICT_MARKER) || token.contains('.') {
        token.retain(|c| c != '.');
    }
    token.replace(' ', "-")
}

fn push_category(segments: &mut Vec<String>, table: &Vocabulary, label: Option<&str>) {
    if let Some(tokens) = label.and_then(|l| table.lookup(l)) {
        segments.extend(tokens.iter().map(|t| t.to_string()));
    }
}

fn millions_to_forints(millions: f64) -> u64 {
    whole(millions * 1_000_000.0)
}

/// Drops the fractional part
fn whole(value: f64) -> u64 {
    value.max(0.0).trunc() as u64
}
