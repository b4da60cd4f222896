//! Keyword and regex extractor used when the model path is unavailable.
//!
//! Deliberately narrow: it recognizes major city names, a Budapest district,
//! the property type, an "N-M m2" size range and an "N millió" price ceiling.
//! Rooms, condition and heating are never filled in here.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::Filter;

/// Scanned in this order; output follows this order, not the text's
const CITIES: &[&str] = &[
    "budapest",
    "debrecen",
    "szeged",
    "miskolc",
    "pécs",
    "győr",
    "nyíregyháza",
    "kecskemét",
    "székesfehérvár",
    "szombathely",
    "érd",
];

static DISTRICT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"budapest.*?(\d+).*?kerület").unwrap());

static SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*[-–]\s*(\d+)\s*m[2²]|(\d+)\s*[-–]\s*(\d+)\s*négyzetméter").unwrap()
});

static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:[.,]\d+)?)\s*millió").unwrap());

/// Best-effort filter from raw query text. Never fails.
pub fn extract_fallback(text: &str) -> Filter {
    let lowered = text.to_lowercase();

    let mut filter = Filter {
        locations: locations(&lowered),
        property_type: property_type(&lowered).map(str::to_string),
        price_max: price_ceiling(&lowered),
        ..Default::default()
    };
    if let Some((min, max)) = size_range(&lowered) {
        filter.size_min = Some(min);
        filter.size_max = Some(max);
    }

    debug!("Fallback extracted {:?}", filter);
    filter
}

fn locations(lowered: &str) -> Vec<String> {
    if let Some(caps) = DISTRICT_RE.captures(lowered) {
        return vec![format!("Budapest {}. kerület", &caps[1])];
    }

    CITIES
        .iter()
        .filter(|city| lowered.contains(**city))
        .map(|city| capitalize(city))
        .collect()
}

fn property_type(lowered: &str) -> Option<&'static str> {
    if lowered.contains("családi ház") || lowered.contains("családiház") {
        Some("családi ház")
    } else if lowered.contains("ikerház") {
        Some("ikerház")
    } else if lowered.contains("sorház") {
        Some("sorház")
    } else if lowered.contains("lakás") {
        Some("lakás")
    } else if lowered.contains("ház") {
        Some("ház")
    } else {
        None
    }
}

fn size_range(lowered: &str) -> Option<(f64, f64)> {
    let caps = SIZE_RE.captures(lowered)?;
    let (min, max) = match (caps.get(1), caps.get(2)) {
        (Some(min), Some(max)) => (min, max),
        _ => (caps.get(3)?, caps.get(4)?),
    };
    Some((min.as_str().parse().ok()?, max.as_str().parse().ok()?))
}

fn price_ceiling(lowered: &str) -> Option<f64> {
    let caps = PRICE_RE.captures(lowered)?;
    caps[1].replace(',', ".").parse().ok()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
