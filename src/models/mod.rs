use serde::{Deserialize, Serialize};

/// Display category of a drink, as shown on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrinkCategory {
    Coffee,
    Tea,
    Smoothie,
    Juice,
    Beer,
    Wine,
    Cocktail,
    Soda,
    Milkshake,
    #[serde(rename = "Energy Drink")]
    EnergyDrink,
    Water,
    Lemonade,
    #[serde(rename = "Hot Chocolate")]
    HotChocolate,
    Kombucha,
}

impl std::fmt::Display for DrinkCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DrinkCategory::Coffee => "Coffee",
            DrinkCategory::Tea => "Tea",
            DrinkCategory::Smoothie => "Smoothie",
            DrinkCategory::Juice => "Juice",
            DrinkCategory::Beer => "Beer",
            DrinkCategory::Wine => "Wine",
            DrinkCategory::Cocktail => "Cocktail",
            DrinkCategory::Soda => "Soda",
            DrinkCategory::Milkshake => "Milkshake",
            DrinkCategory::EnergyDrink => "Energy Drink",
            DrinkCategory::Water => "Water",
            DrinkCategory::Lemonade => "Lemonade",
            DrinkCategory::HotChocolate => "Hot Chocolate",
            DrinkCategory::Kombucha => "Kombucha",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of one classification call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrinkResult {
    pub name: String,
    pub category: DrinkCategory,
    pub confidence: f64, // 0.0 - 1.0
}

/// A synthesized venue. A list of these is one result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyPlace {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(rename = "distance")]
    pub distance_label: String, // "264 ft", "1.2 mi"
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InvalidCoordinate {
    #[error("coordinate is not finite: ({latitude}, {longitude})")]
    NotFinite { latitude: f64, longitude: f64 },
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

impl Coordinate {
    /// Validated constructor. Non-finite or out-of-range values are rejected, never clamped.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(InvalidCoordinate::NotFinite { latitude, longitude });
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinate::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinate::LongitudeOutOfRange(longitude));
        }
        Ok(Self { latitude, longitude })
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Everything the results screen needs for one scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub drink_name: String,
    pub drink_category: DrinkCategory,
    pub confidence: u32, // percent, rounded
    pub places: Vec<NearbyPlace>,
    pub photo_uri: String,
    pub user_lat: f64,
    pub user_lon: f64,
}
