pub mod camera; // Photo capture with placeholder fallback
pub mod catalog; // Static drink / venue / street tables
pub mod classifier;
pub mod geo;
pub mod location; // Device location with default-coordinate fallback
pub mod places;

pub use camera::{capture_photo, Camera, FileCamera, PhotoRef};
pub use classifier::{DrinkClassifier, SimulatedClassifier};
pub use location::{
    resolve_origin, DeniedLocationProvider, FixedLocationProvider, LocationOutcome,
    LocationProvider,
};
