use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

use crate::models::Coordinate;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: String,
    pub rng_seed: Option<u64>,
    pub device_position: Option<Coordinate>,
    pub location_permission_denied: bool,
    pub photo_path: Option<String>,
}

impl Config {
    /// Read configuration from the process environment (after `.env` is loaded).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("DRINK_FINDER_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string());
        let rng_seed = parse_var::<u64, _>(&lookup, "DRINK_FINDER_SEED")?;

        let latitude = parse_var::<f64, _>(&lookup, "DEVICE_LATITUDE")?;
        let longitude = parse_var::<f64, _>(&lookup, "DEVICE_LONGITUDE")?;
        let device_position = match (latitude, longitude) {
            (Some(lat), Some(lon)) => Some(
                Coordinate::new(lat, lon).context("DEVICE_LATITUDE/DEVICE_LONGITUDE out of range")?,
            ),
            (None, None) => None,
            _ => anyhow::bail!("DEVICE_LATITUDE and DEVICE_LONGITUDE must be set together"),
        };

        let permission = lookup("LOCATION_PERMISSION").unwrap_or_else(|| "granted".to_string());
        let location_permission_denied = match permission.trim().to_lowercase().as_str() {
            "granted" => false,
            "denied" => true,
            other => anyhow::bail!("LOCATION_PERMISSION must be 'granted' or 'denied', got '{}'", other),
        };

        let photo_path = lookup("DRINK_PHOTO").filter(|p| !p.trim().is_empty());

        Ok(Self {
            bind_addr,
            rng_seed,
            device_position,
            location_permission_denied,
            photo_path,
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            let value = raw
                .trim()
                .parse::<T>()
                .with_context(|| format!("invalid value for {}: '{}'", key, raw))?;
            Ok(Some(value))
        }
        _ => Ok(None),
    }
}
