//! Scenario configuration.

use crate::error::{CoreError, CoreResult};
use crate::generator::{build_source_from_entropy, build_source_seeded};
use crate::record::{known_name, Record, NAMES};

/// Default number of records in a source collection.
pub const DEFAULT_SOURCE_SIZE: usize = 100_000;

/// Default number of results kept by the top-N scenario.
pub const DEFAULT_TOP_N: usize = 10;

/// Default name the scenarios filter on.
pub const DEFAULT_TARGET_NAME: &str = "taro";

/// Default id threshold for the second filter of the multi-stage scenario.
pub const DEFAULT_ID_THRESHOLD: u32 = 100;

/// Parameters shared by every scenario in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioConfig {
    /// Number of records in the source collection.
    pub source_size: usize,

    /// Number of results the top-N scenario keeps.
    pub top_n: usize,

    /// Name matched by the first filter stage.
    pub target_name: &'static str,

    /// Records with an id at or below this are dropped by the multi-stage scenario.
    pub id_threshold: u32,

    /// Seed for the source generator (`None` = operating system entropy).
    pub seed: Option<u64>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            source_size: DEFAULT_SOURCE_SIZE,
            top_n: DEFAULT_TOP_N,
            target_name: DEFAULT_TARGET_NAME,
            id_threshold: DEFAULT_ID_THRESHOLD,
            seed: None,
        }
    }
}

impl ScenarioConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source collection size.
    #[must_use]
    pub const fn source_size(mut self, size: usize) -> Self {
        self.source_size = size;
        self
    }

    /// Sets how many results the top-N scenario keeps.
    #[must_use]
    pub const fn top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    /// Sets the id threshold of the multi-stage scenario.
    #[must_use]
    pub const fn id_threshold(mut self, threshold: u32) -> Self {
        self.id_threshold = threshold;
        self
    }

    /// Sets the generator seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the target name.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] if `name` is not a known label.
    pub fn target_name(mut self, name: &str) -> CoreResult<Self> {
        self.target_name = known_name(name).ok_or_else(|| unknown_label(name))?;
        Ok(self)
    }

    /// Checks that the configuration can drive a run.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] if the target name is not a
    /// known label.
    pub fn validate(&self) -> CoreResult<()> {
        match known_name(self.target_name) {
            Some(_) => Ok(()),
            None => Err(unknown_label(self.target_name)),
        }
    }

    /// Builds the source collection this configuration describes.
    #[must_use]
    pub fn build_source(&self) -> Box<[Record]> {
        match self.seed {
            Some(seed) => build_source_seeded(self.source_size, seed),
            None => build_source_from_entropy(self.source_size),
        }
    }
}

fn unknown_label(name: &str) -> CoreError {
    CoreError::invalid_config(format!(
        "target name {name:?} is not one of {}",
        NAMES.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ScenarioConfig::default();
        assert_eq!(config.source_size, 100_000);
        assert_eq!(config.top_n, 10);
        assert_eq!(config.target_name, "taro");
        assert_eq!(config.id_threshold, 100);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_pattern() {
        let config = ScenarioConfig::new()
            .source_size(1_000)
            .top_n(3)
            .id_threshold(7)
            .seed(99)
            .target_name("jiro")
            .unwrap();

        assert_eq!(config.source_size, 1_000);
        assert_eq!(config.top_n, 3);
        assert_eq!(config.id_threshold, 7);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.target_name, "jiro");
    }

    #[test]
    fn unknown_target_name_rejected() {
        let err = ScenarioConfig::new().target_name("saburo").unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig { .. }));
        assert!(err.to_string().contains("saburo"));

        let config = ScenarioConfig {
            target_name: "nobody",
            ..ScenarioConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let config = ScenarioConfig::new().source_size(200).seed(11);
        assert_eq!(config.build_source(), config.build_source());
        assert_eq!(config.build_source().len(), 200);
    }
}
