use crate::models::Coordinate;

/// Used whenever the device position is unavailable (San Francisco).
pub const DEFAULT_LOCATION: Coordinate = Coordinate {
    latitude: 37.7749,
    longitude: -122.4194,
};

#[derive(Debug, Clone, PartialEq)]
pub enum LocationOutcome {
    Granted(Coordinate),
    /// The user declined the permission prompt.
    Denied,
    /// Device or provider error.
    Unavailable(String),
}

#[async_trait::async_trait]
pub trait LocationProvider: Send + Sync {
    async fn request_location(&self) -> LocationOutcome;
}

/// Caller policy for location: the granted position, or the default for every other outcome.
pub fn resolve_origin(outcome: LocationOutcome) -> Coordinate {
    match outcome {
        LocationOutcome::Granted(coordinate) => {
            match Coordinate::new(coordinate.latitude, coordinate.longitude) {
                Ok(c) => c,
                Err(e) => {
                    log::warn!("⚠️ Provider returned an invalid position ({}), using default", e);
                    DEFAULT_LOCATION
                }
            }
        }
        LocationOutcome::Denied => {
            log::warn!("⚠️ Location permission denied, using default location");
            DEFAULT_LOCATION
        }
        LocationOutcome::Unavailable(reason) => {
            log::warn!("⚠️ Location unavailable ({}), using default location", reason);
            DEFAULT_LOCATION
        }
    }
}

/// Device with a known, fixed position. `None` behaves like a device without a fix.
pub struct FixedLocationProvider {
    position: Option<Coordinate>,
}

impl FixedLocationProvider {
    pub fn new(position: Option<Coordinate>) -> Self {
        Self { position }
    }
}

#[async_trait::async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn request_location(&self) -> LocationOutcome {
        match self.position {
            Some(position) => LocationOutcome::Granted(position),
            None => LocationOutcome::Unavailable("no position fix".to_string()),
        }
    }
}

/// Provider whose permission prompt is always declined.
pub struct DeniedLocationProvider;

#[async_trait::async_trait]
impl LocationProvider for DeniedLocationProvider {
    async fn request_location(&self) -> LocationOutcome {
        LocationOutcome::Denied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_granted_position_is_used() {
        let here = Coordinate::new(51.5074, -0.1278).unwrap();
        let provider = FixedLocationProvider::new(Some(here));
        assert_eq!(resolve_origin(provider.request_location().await), here);
    }

    #[tokio::test]
    async fn test_denied_falls_back_to_default() {
        let outcome = DeniedLocationProvider.request_location().await;
        assert_eq!(outcome, LocationOutcome::Denied);
        assert_eq!(resolve_origin(outcome), DEFAULT_LOCATION);
    }

    #[tokio::test]
    async fn test_no_fix_falls_back_to_default() {
        let outcome = FixedLocationProvider::new(None).request_location().await;
        assert!(matches!(outcome, LocationOutcome::Unavailable(_)));
        assert_eq!(resolve_origin(outcome), DEFAULT_LOCATION);
    }

    #[test]
    fn test_invalid_granted_position_falls_back() {
        let bogus = Coordinate {
            latitude: f64::NAN,
            longitude: 10.0,
        };
        assert_eq!(resolve_origin(LocationOutcome::Granted(bogus)), DEFAULT_LOCATION);
    }
}
