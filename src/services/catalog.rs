//! Static lookup tables: drink keys, venue names, street names.
//!
//! Everything here is read-only and lives for the whole process.

use crate::models::DrinkCategory;

pub struct DrinkEntry {
    pub key: &'static str,
    pub search_terms: &'static [&'static str],
    pub category: DrinkCategory,
}

const fn entry(
    key: &'static str,
    search_terms: &'static [&'static str],
    category: DrinkCategory,
) -> DrinkEntry {
    DrinkEntry {
        key,
        search_terms,
        category,
    }
}

// Order matters: venue-type resolution takes the first key contained in the label,
// so compound keys sit ahead of the shorter keys they contain.
pub static DRINK_TABLE: &[DrinkEntry] = &[
    entry("iced coffee", &["coffee shop", "cafe"], DrinkCategory::Coffee),
    entry("cold brew", &["coffee shop", "cafe"], DrinkCategory::Coffee),
    entry("coffee", &["coffee shop", "cafe"], DrinkCategory::Coffee),
    entry("latte", &["coffee shop", "cafe"], DrinkCategory::Coffee),
    entry("espresso", &["coffee shop", "cafe", "espresso bar"], DrinkCategory::Coffee),
    entry("cappuccino", &["coffee shop", "cafe"], DrinkCategory::Coffee),
    entry("americano", &["coffee shop", "cafe"], DrinkCategory::Coffee),
    entry("macchiato", &["coffee shop", "cafe"], DrinkCategory::Coffee),
    entry("mocha", &["coffee shop", "cafe"], DrinkCategory::Coffee),
    entry("bubble tea", &["bubble tea", "boba tea"], DrinkCategory::Tea),
    entry("tea", &["tea house", "cafe", "bubble tea"], DrinkCategory::Tea),
    entry("boba", &["bubble tea", "boba tea"], DrinkCategory::Tea),
    entry("matcha", &["cafe", "tea house", "matcha"], DrinkCategory::Tea),
    entry("smoothie", &["smoothie", "juice bar"], DrinkCategory::Smoothie),
    entry("juice", &["juice bar", "smoothie"], DrinkCategory::Juice),
    entry("craft beer", &["brewery", "craft beer bar"], DrinkCategory::Beer),
    entry("beer", &["bar", "brewery", "pub"], DrinkCategory::Beer),
    entry("wine", &["wine bar", "winery"], DrinkCategory::Wine),
    entry("cocktail", &["cocktail bar", "bar"], DrinkCategory::Cocktail),
    entry("margarita", &["bar", "mexican restaurant"], DrinkCategory::Cocktail),
    entry("soda", &["restaurant", "convenience store"], DrinkCategory::Soda),
    entry(
        "milkshake",
        &["diner", "ice cream shop", "burger restaurant"],
        DrinkCategory::Milkshake,
    ),
    entry(
        "energy drink",
        &["convenience store", "gas station"],
        DrinkCategory::EnergyDrink,
    ),
    entry("water", &["convenience store", "grocery store"], DrinkCategory::Water),
    entry("lemonade", &["cafe", "restaurant", "juice bar"], DrinkCategory::Lemonade),
    entry("hot chocolate", &["coffee shop", "cafe"], DrinkCategory::HotChocolate),
    entry("kombucha", &["health food store", "juice bar"], DrinkCategory::Kombucha),
];

/// Venue type used when no drink key matches a label.
pub const DEFAULT_VENUE_TYPE: &str = "cafe";

static VENUE_NAMES: &[(&str, &[&str])] = &[
    (
        "coffee shop",
        &[
            "Blue Bottle Coffee",
            "Stumptown Coffee Roasters",
            "Verve Coffee",
            "Ritual Coffee",
            "Sightglass Coffee",
            "Philz Coffee",
        ],
    ),
    (
        "cafe",
        &[
            "The Daily Grind",
            "Sunrise Cafe",
            "The Bean Counter",
            "Meadow Cafe",
            "Golden Hour Cafe",
            "The Roastery",
        ],
    ),
    (
        "bubble tea",
        &[
            "Tiger Sugar",
            "Kung Fu Tea",
            "ShareTea",
            "Gong Cha",
            "TP Tea",
            "CoCo Fresh Tea",
        ],
    ),
    (
        "juice bar",
        &[
            "Jamba Juice",
            "Pressed Juicery",
            "Juice Generation",
            "The Juice Shop",
            "Raw Juce",
        ],
    ),
    (
        "bar",
        &[
            "The Tipsy Crow",
            "Lucky Strike",
            "The Broken Shaker",
            "Death & Co",
            "Attaboy",
            "Please Don't Tell",
        ],
    ),
    (
        "brewery",
        &[
            "Stone Brewing",
            "Sierra Nevada",
            "Lagunitas Taproom",
            "Modern Times",
            "Ballast Point",
        ],
    ),
    (
        "wine bar",
        &[
            "The Wine Cellar",
            "Cork & Bottle",
            "Vinoteca",
            "The Wine Room",
            "Terroir",
        ],
    ),
    (
        "tea house",
        &[
            "Samovar Tea Lounge",
            "The Tea Spot",
            "Cha Cha Tea",
            "Zen Tea House",
        ],
    ),
    (
        "smoothie",
        &[
            "Jamba Juice",
            "Smoothie King",
            "Tropical Smoothie",
            "Nekter Juice Bar",
        ],
    ),
    (
        "convenience store",
        &["7-Eleven", "Circle K", "Wawa", "QuickStop"],
    ),
];

pub static DEFAULT_VENUE_NAMES: &[&str] = &[
    "The Corner Spot",
    "Main Street Drinks",
    "Central Beverage Co",
    "The Thirsty Traveler",
];

pub static STREET_NAMES: &[&str] = &[
    "Main St",
    "Oak Ave",
    "Market St",
    "Broadway",
    "1st Ave",
    "Park Blvd",
    "Mission St",
    "Valencia St",
];

pub fn lookup(key: &str) -> Option<&'static DrinkEntry> {
    DRINK_TABLE.iter().find(|e| e.key == key)
}

/// Resolve a drink label to its venue type.
///
/// The label is lowercased and matched against every table key by substring, in
/// table order. The first hit wins and contributes its primary search term.
pub fn venue_type_for(label: &str) -> &'static str {
    let lower = label.to_lowercase();
    DRINK_TABLE
        .iter()
        .find(|e| lower.contains(e.key))
        .and_then(|e| e.search_terms.first().copied())
        .unwrap_or(DEFAULT_VENUE_TYPE)
}

/// Candidate venue names for a venue type, falling back to the default list.
pub fn venue_names(venue_type: &str) -> &'static [&'static str] {
    VENUE_NAMES
        .iter()
        .find(|(kind, _)| *kind == venue_type)
        .map(|(_, names)| *names)
        .unwrap_or(DEFAULT_VENUE_NAMES)
}

#[allow(dead_code)]
pub fn categories() -> impl Iterator<Item = DrinkCategory> {
    DRINK_TABLE.iter().map(|e| e.category)
}
