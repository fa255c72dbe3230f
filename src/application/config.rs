use std::str::FromStr;
use crate::domain::Algorithm;

pub const ENV_GRID_WIDTH: &str = "LIFE_GRID_WIDTH";
pub const ENV_GRID_HEIGHT: &str = "LIFE_GRID_HEIGHT";
pub const ENV_STEPS_PER_SECOND: &str = "LIFE_STEPS_PER_SECOND";
pub const ENV_ALGORITHM: &str = "LIFE_ALGORITHM";

/// Startup settings for a simulation.
/// Values are validated when the grid and scheduler are built from them.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    pub steps_per_second: f32,
    pub algorithm: Algorithm,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 30,
            steps_per_second: 2.0,
            algorithm: Algorithm::default(),
        }
    }
}

impl SimulationConfig {
    /// Defaults overridden by `LIFE_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each key.
    /// Unparsable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let algorithm = match lookup(ENV_ALGORITHM) {
            Some(raw) => Algorithm::from_name(&raw).unwrap_or_else(|| {
                log::warn!("ignoring {ENV_ALGORITHM}={raw:?}, expected serial or parallel");
                defaults.algorithm
            }),
            None => defaults.algorithm,
        };

        Self {
            grid_width: parse_or(&lookup, ENV_GRID_WIDTH, defaults.grid_width),
            grid_height: parse_or(&lookup, ENV_GRID_HEIGHT, defaults.grid_height),
            steps_per_second: parse_or(&lookup, ENV_STEPS_PER_SECOND, defaults.steps_per_second),
            algorithm,
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        log::warn!("ignoring {key}={raw:?}, not a valid number");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        assert_eq!(SimulationConfig::from_lookup(|_| None), SimulationConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = SimulationConfig::from_lookup(lookup_from(&[
            (ENV_GRID_WIDTH, "64"),
            (ENV_GRID_HEIGHT, " 48 "),
            (ENV_STEPS_PER_SECOND, "7.5"),
            (ENV_ALGORITHM, "Parallel"),
        ]));
        assert_eq!(config.grid_width, 64);
        assert_eq!(config.grid_height, 48);
        assert_eq!(config.steps_per_second, 7.5);
        assert_eq!(config.algorithm, Algorithm::Parallel);
    }

    #[test]
    fn test_garbage_falls_back_to_defaults() {
        let config = SimulationConfig::from_lookup(lookup_from(&[
            (ENV_GRID_WIDTH, "-3"),
            (ENV_STEPS_PER_SECOND, "fast"),
            (ENV_ALGORITHM, "gpu"),
        ]));
        assert_eq!(config, SimulationConfig::default());
    }
}
