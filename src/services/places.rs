use rand::Rng;

use crate::models::{Coordinate, InvalidCoordinate, NearbyPlace};
use crate::services::catalog;
use crate::services::geo::{distance_miles, format_distance};

/// Upper bound on the size of one result set.
pub const MAX_PLACES: usize = 5;

// Offset spread in degrees per rank, before the (r - 0.5) centering.
const OFFSET_STEP_DEGREES: f64 = 0.03;

/// Synthesize up to five venues near `origin_lat`/`origin_lon` for a drink label.
///
/// Names come from the venue list matching the label, in list order. Each place
/// gets a random offset that widens with its index, a random street address and
/// a random rating in [3.5, 5.0]. The result is sorted by distance from the origin.
pub fn find_nearby<R: Rng + ?Sized>(
    drink_label: &str,
    origin_lat: f64,
    origin_lon: f64,
    rng: &mut R,
) -> Result<Vec<NearbyPlace>, InvalidCoordinate> {
    let origin = Coordinate::new(origin_lat, origin_lon)?;

    let venue_type = catalog::venue_type_for(drink_label);
    let names = catalog::venue_names(venue_type);
    log::debug!("🏪 '{}' resolved to venue type '{}' ({} names)", drink_label, venue_type, names.len());

    let mut places: Vec<NearbyPlace> = names
        .iter()
        .take(MAX_PLACES)
        .enumerate()
        .map(|(i, name)| synthesize_place(i, name, &origin, &mut *rng))
        .collect();

    places.sort_by(|a, b| {
        let da = distance_from(&origin, a);
        let db = distance_from(&origin, b);
        da.total_cmp(&db)
    });

    Ok(places)
}

fn synthesize_place<R: Rng + ?Sized>(
    index: usize,
    name: &str,
    origin: &Coordinate,
    rng: &mut R,
) -> NearbyPlace {
    let spread = OFFSET_STEP_DEGREES * (index + 1) as f64;
    let latitude = origin.latitude + (rng.gen::<f64>() - 0.5) * spread;
    let longitude = origin.longitude + (rng.gen::<f64>() - 0.5) * spread;

    let distance = distance_miles(origin.latitude, origin.longitude, latitude, longitude);

    let street_number: u32 = rng.gen_range(100..=999);
    let street = catalog::STREET_NAMES[rng.gen_range(0..catalog::STREET_NAMES.len())];

    NearbyPlace {
        id: format!("place-{}", index),
        name: name.to_string(),
        address: format!("{} {}", street_number, street),
        distance_label: format_distance(distance),
        latitude,
        longitude,
        rating: Some(rng.gen_range(3.5..=5.0)),
    }
}

/// Distance in miles from the query origin to a place.
pub fn distance_from(origin: &Coordinate, place: &NearbyPlace) -> f64 {
    distance_miles(origin.latitude, origin.longitude, place.latitude, place.longitude)
}
