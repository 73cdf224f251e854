use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};

use crate::models::{Coordinate, NearbyPlace, ScanResult};
use crate::services::{
    capture_photo, places, resolve_origin, Camera, DrinkClassifier, LocationOutcome,
    LocationProvider, PhotoRef,
};

/// Runs one scan: identify the drink, locate the user, synthesize nearby places.
pub struct ScanHandler {
    classifier: Arc<dyn DrinkClassifier>,
    location: Arc<dyn LocationProvider>,
    rng: Mutex<StdRng>,
}

impl ScanHandler {
    pub fn new(
        classifier: Arc<dyn DrinkClassifier>,
        location: Arc<dyn LocationProvider>,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => {
                log::info!("🎲 Using deterministic RNG (seed {})", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        Self {
            classifier,
            location,
            rng: Mutex::new(rng),
        }
    }

    /// Capture with the given camera, then scan the result.
    pub async fn scan(&self, camera: &dyn Camera) -> Result<ScanResult> {
        let photo = capture_photo(camera).await;
        self.scan_photo(photo).await
    }

    /// Scan an already captured photo, asking the location provider for the origin.
    pub async fn scan_photo(&self, photo: PhotoRef) -> Result<ScanResult> {
        let outcome = self.location.request_location().await;
        self.scan_with_location(photo, outcome)
    }

    /// Scan with a location outcome supplied by the caller.
    pub fn scan_with_location(&self, photo: PhotoRef, outcome: LocationOutcome) -> Result<ScanResult> {
        log::info!("📸 New scan for photo: {}", photo);

        let origin = resolve_origin(outcome);
        log::debug!("📍 Search origin: {}", origin);

        // The lock is held only for synchronous generation, never across an await
        let (drink, places) = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| anyhow::anyhow!("RNG lock poisoned"))?;
            let drink = self.classifier.identify(&photo, &mut *rng);
            let places = places::find_nearby(&drink.name, origin.latitude, origin.longitude, &mut *rng)?;
            (drink, places)
        };

        log::info!(
            "🥤 Identified '{}' ({}, {:.0}%), {} nearby places",
            drink.name,
            drink.category,
            drink.confidence * 100.0,
            places.len()
        );

        Ok(ScanResult {
            drink_name: drink.name,
            drink_category: drink.category,
            confidence: confidence_percent(drink.confidence),
            places,
            photo_uri: photo.as_str().to_string(),
            user_lat: origin.latitude,
            user_lon: origin.longitude,
        })
    }

    /// Place lookup on its own, for an explicit drink label and origin.
    pub fn find_places(&self, drink_label: &str, origin: Coordinate) -> Result<Vec<NearbyPlace>> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| anyhow::anyhow!("RNG lock poisoned"))?;
        let places = places::find_nearby(drink_label, origin.latitude, origin.longitude, &mut *rng)?;
        Ok(places)
    }
}

/// Confidence as a whole percentage, rounded half away from zero.
pub fn confidence_percent(confidence: f64) -> u32 {
    (confidence.clamp(0.0, 1.0) * 100.0).round() as u32
}
