use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use tracing::{info, warn};

/// Runtime knobs, read once at startup from COMANDA_* variables.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    pub channel_capacity: usize,
    pub sweep_interval: Duration,
    pub autosave_interval: Duration,
    pub snapshot_path: PathBuf,
}

impl PlatformConfig {
    pub fn load() -> Self {
        Self {
            channel_capacity: try_load("COMANDA_CHANNEL_CAPACITY", "32"),
            sweep_interval: Duration::from_secs(try_load("COMANDA_SWEEP_INTERVAL_SECS", "5")),
            autosave_interval: Duration::from_secs(try_load("COMANDA_AUTOSAVE_INTERVAL_SECS", "3")),
            snapshot_path: PathBuf::from(try_load::<String>(
                "COMANDA_SNAPSHOT_PATH",
                "comanda-orders.json",
            )),
        }
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            sweep_interval: Duration::from_secs(5),
            autosave_interval: Duration::from_secs(3),
            snapshot_path: PathBuf::from("comanda-orders.json"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_load_fallbacks() {
        let config = PlatformConfig::default();
        assert_eq!(config.channel_capacity, 32);
        assert_eq!(config.sweep_interval, Duration::from_secs(5));
        assert_eq!(config.autosave_interval, Duration::from_secs(3));
        assert_eq!(config.snapshot_path, PathBuf::from("comanda-orders.json"));
    }
}
