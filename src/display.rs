//! Terminal rendering of an interpretation.

use url::Url;

use crate::interpreter::NluError;
use crate::models::{Filter, FilterSource, Interpretation};
use crate::search::SearchUrl;

const FALLBACK_NOTICE: &str = "Kulcsszavas értelmezést használtam helyette.";

/// Status line for how the filter was produced
pub fn status_banner(interpretation: &Interpretation) -> String {
    let cause = match &interpretation.error {
        None => {
            return match interpretation.source {
                FilterSource::Model => "✅ A keresést a nyelvi modell értelmezte.".to_string(),
                FilterSource::Fallback => {
                    "ℹ️  Offline mód: kulcsszavas értelmezés.".to_string()
                }
            }
        }
        Some(NluError::Auth(_)) => "🔐 Az OpenAI API kulcs érvénytelen vagy nincs jogosultsága.",
        Some(NluError::RateLimited(_)) => "⏳ Az OpenAI kérési korlátja elérve, próbáld később.",
        Some(NluError::Transport(_)) => "🌐 Nem sikerült elérni az OpenAI szolgáltatást.",
        Some(NluError::Payload(_)) => "⚠️  A modell válaszát nem sikerült feldolgozni.",
    };
    format!("{} {}", cause, FALLBACK_NOTICE)
}

/// Shown when a filter has no locations
pub fn empty_warning() -> &'static str {
    "⚠️  Nem sikerült értelmezni a helyszíneket vagy típust. Próbáld újrafogalmazni!"
}

pub fn filter_summary(filter: &Filter) -> String {
    let mut out = String::new();
    out.push_str(&format!("📍 Helyszínek: {}\n", filter.locations.join(", ")));
    if let Some(kind) = &filter.property_type {
        out.push_str(&format!("🏠 Típus: {}\n", kind));
    }
    if let Some(range) = range_text(filter.size_min, filter.size_max, "m²") {
        out.push_str(&format!("📐 Alapterület: {}\n", range));
    }
    let rooms_min = filter.rooms_min.map(f64::from);
    let rooms_max = filter.rooms_max.map(f64::from);
    if let Some(range) = range_text(rooms_min, rooms_max, "szoba") {
        out.push_str(&format!("🚪 Szobák: {}\n", range));
    }
    if let Some(range) = range_text(filter.price_min, filter.price_max, "M Ft") {
        out.push_str(&format!("💰 Ár: {}\n", range));
    }
    if let Some(condition) = &filter.condition {
        out.push_str(&format!("🔧 Állapot: {}\n", condition));
    }
    if let Some(heating) = &filter.heating {
        out.push_str(&format!("🔥 Fűtés: {}\n", heating));
    }
    out
}

fn range_text(min: Option<f64>, max: Option<f64>, unit: &str) -> Option<String> {
    match (min, max) {
        (Some(min), Some(max)) => Some(format!("{}–{} {}", min, max, unit)),
        (Some(min), None) => Some(format!("legalább {} {}", min, unit)),
        (None, Some(max)) => Some(format!("legfeljebb {} {}", max, unit)),
        (None, None) => None,
    }
}

/// Preview line plus a link-safe URL
///
/// Non-ASCII path characters are percent-encoded; the raw URL is used if it
/// does not parse.
pub fn search_link(search: &SearchUrl) -> String {
    let href = Url::parse(&search.url)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| search.url.clone());
    format!("🔗 Keresés: {}\n   {}", search.preview(), href)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::build_url;

    #[test]
    fn every_classification_has_its_own_banner() {
        let errors = [
            NluError::Auth(String::new()),
            NluError::RateLimited(String::new()),
            NluError::Transport(String::new()),
            NluError::Payload(String::new()),
        ];
        let mut banners: Vec<String> = errors
            .into_iter()
            .map(|e| status_banner(&Interpretation::from_fallback(Filter::default(), Some(e))))
            .collect();
        banners.push(status_banner(&Interpretation::from_model(Filter::default())));
        banners.push(status_banner(&Interpretation::from_fallback(Filter::default(), None)));

        let mut unique = banners.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), banners.len());
    }

    #[test]
    fn link_is_percent_encoded() {
        let filter = Filter {
            locations: vec!["Érd".into()],
            ..Default::default()
        };
        let link = search_link(&build_url(&filter).unwrap());
        assert!(link.contains("Keresés: érd, elado"));
        assert!(link.contains("https://ingatlan.com/lista/%C3%A9rd+elado"));
    }

    #[test]
    fn summary_lists_only_present_fields() {
        let filter = Filter {
            locations: vec!["Budapest".into(), "Debrecen".into()],
            price_max: Some(50.0),
            ..Default::default()
        };
        let summary = filter_summary(&filter);
        assert!(summary.contains("Budapest, Debrecen"));
        assert!(summary.contains("legfeljebb 50 M Ft"));
        assert!(!summary.contains("Szobák"));
    }
}
