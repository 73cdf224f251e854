use crate::models::{NearbyPlace, ScanResult};

pub const EMPTY_PLACES_MESSAGE: &str = "No nearby places found for this drink.";
pub const SIMULATED_DISCLAIMER: &str = "Results are simulated. In production, this would use AI vision and real map data to identify drinks and find actual nearby locations.";

/// Visual band for the confidence badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    High,
    Medium,
    /// Not produced by the simulated classifier, whose floor is 75%.
    Low,
}

impl ConfidenceTier {
    pub fn from_percent(percent: u32) -> Self {
        if percent > 85 {
            ConfidenceTier::High
        } else if percent > 70 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }
}

impl std::fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ConfidenceTier::High => "🟢",
            ConfidenceTier::Medium => "🟠",
            ConfidenceTier::Low => "🔴",
        };
        write!(f, "{}", s)
    }
}

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
}

#[allow(dead_code)]
/// Decode a serialized place list. Anything unparsable yields an empty list.
pub fn parse_places(json: &str) -> Vec<NearbyPlace> {
    match serde_json::from_str(json) {
        Ok(places) => places,
        Err(e) => {
            log::warn!("⚠️ Could not parse place list, showing none: {}", e);
            Vec::new()
        }
    }
}

/// 1-based rank shown in the badge; the first place is highlighted.
pub fn rank_label(index: usize) -> String {
    (index + 1).to_string()
}

pub fn rating_label(place: &NearbyPlace) -> Option<String> {
    place.rating.map(|r| format!("{:.1}", r))
}

pub fn found_label(places: &[NearbyPlace]) -> String {
    format!("{} found", places.len())
}

pub fn directions_label(places: &[NearbyPlace]) -> Option<String> {
    places.first().map(|p| format!("Directions to {}", p.name))
}

/// Native maps deep link for a place.
#[allow(dead_code)]
pub fn maps_url(place: &NearbyPlace, platform: Platform) -> String {
    let name = encode_uri_component(&place.name);
    match platform {
        Platform::Ios => format!(
            "maps:?q={}&ll={},{}",
            name, place.latitude, place.longitude
        ),
        Platform::Android => format!(
            "geo:{},{}?q={}",
            place.latitude, place.longitude, name
        ),
    }
}

/// Web fallback when no native maps handler accepts the deep link.
pub fn web_maps_url(place: &NearbyPlace) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={},{}&query_place_id={}",
        place.latitude,
        place.longitude,
        encode_uri_component(&place.name)
    )
}

// Percent-encodes everything outside A-Z a-z 0-9 - _ . ! ~ * ' ( )
fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Plain-text rendering of the results screen.
pub fn render(result: &ScanResult) -> String {
    let tier = ConfidenceTier::from_percent(result.confidence);
    let mut out = format!(
        "🥤 *{}*\n\
         🏷️ {} · {} {}% match\n\n\
         📍 Nearby Places ({})\n",
        result.drink_name,
        result.drink_category,
        tier,
        result.confidence,
        found_label(&result.places)
    );

    if result.places.is_empty() {
        out.push_str(&format!("\n{}\n", EMPTY_PLACES_MESSAGE));
    }

    for (index, place) in result.places.iter().enumerate() {
        out.push_str(&format!(
            "\n{}. {} ({})\n   {}",
            rank_label(index),
            place.name,
            place.distance_label,
            place.address
        ));
        if let Some(rating) = rating_label(place) {
            out.push_str(&format!(" ⭐ {}", rating));
        }
        out.push('\n');
    }

    if let (Some(directions), Some(first)) = (directions_label(&result.places), result.places.first()) {
        out.push_str(&format!("\n🧭 {}\n   {}\n", directions, web_maps_url(first)));
    }

    out.push_str(&format!("\n{}", SIMULATED_DISCLAIMER));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DrinkCategory;

    fn place(name: &str, rating: Option<f64>) -> NearbyPlace {
        NearbyPlace {
            id: "place-0".to_string(),
            name: name.to_string(),
            address: "512 Valencia St".to_string(),
            distance_label: "0.3 mi".to_string(),
            latitude: 37.77,
            longitude: -122.42,
            rating,
        }
    }

    fn result(places: Vec<NearbyPlace>) -> ScanResult {
        ScanResult {
            drink_name: "Bubble Tea".to_string(),
            drink_category: DrinkCategory::Tea,
            confidence: 91,
            places,
            photo_uri: "placeholder".to_string(),
            user_lat: 37.7749,
            user_lon: -122.4194,
        }
    }

    #[test]
    fn test_confidence_tiers() {
        assert_eq!(ConfidenceTier::from_percent(95), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_percent(86), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_percent(85), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_percent(75), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_percent(70), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_percent(0), ConfidenceTier::Low);
    }

    #[test]
    fn test_parse_places_fallback() {
        assert!(parse_places("not json").is_empty());
        assert!(parse_places("{\"id\": 1}").is_empty());
        assert!(parse_places("[]").is_empty());

        let json = r#"[{
            "id": "place-0",
            "name": "Gong Cha",
            "address": "123 Main St",
            "distance": "264 ft",
            "latitude": 37.775,
            "longitude": -122.419
        }]"#;
        let places = parse_places(json);
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].distance_label, "264 ft");
        assert_eq!(places[0].rating, None);
    }

    #[test]
    fn test_labels() {
        let places = vec![place("Death & Co", Some(4.26)), place("Attaboy", None)];
        assert_eq!(rank_label(0), "1");
        assert_eq!(rating_label(&places[0]).as_deref(), Some("4.3"));
        assert_eq!(rating_label(&places[1]), None);
        assert_eq!(found_label(&places), "2 found");
        assert_eq!(directions_label(&places).as_deref(), Some("Directions to Death & Co"));
        assert_eq!(directions_label(&[]), None);
    }

    #[test]
    fn test_maps_urls() {
        let p = place("Death & Co", None);
        assert_eq!(
            maps_url(&p, Platform::Ios),
            "maps:?q=Death%20%26%20Co&ll=37.77,-122.42"
        );
        assert_eq!(
            maps_url(&p, Platform::Android),
            "geo:37.77,-122.42?q=Death%20%26%20Co"
        );
        assert_eq!(
            web_maps_url(&place("Please Don't Tell", None)),
            "https://www.google.com/maps/search/?api=1&query=37.77,-122.42&query_place_id=Please%20Don't%20Tell"
        );
    }

    #[test]
    fn test_encode_uri_component_utf8() {
        assert_eq!(encode_uri_component("Café"), "Caf%C3%A9");
        assert_eq!(encode_uri_component("7-Eleven"), "7-Eleven");
    }

    #[test]
    fn test_render() {
        let text = render(&result(vec![place("Gong Cha", Some(4.5))]));
        assert!(text.contains("*Bubble Tea*"));
        assert!(text.contains("Tea · 🟢 91% match"));
        assert!(text.contains("1 found"));
        assert!(text.contains("1. Gong Cha (0.3 mi)"));
        assert!(text.contains("⭐ 4.5"));
        assert!(text.contains("Directions to Gong Cha"));
        assert!(text.contains("query_place_id=Gong%20Cha"));
        assert!(text.ends_with(SIMULATED_DISCLAIMER));

        let empty = render(&result(Vec::new()));
        assert!(empty.contains(EMPTY_PLACES_MESSAGE));
        assert!(!empty.contains("Directions to"));
    }
}
