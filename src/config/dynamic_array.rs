//! Configuration for dynamic arrays.

use super::{parse_env_opt, parse_env_var, Config};
use crate::containers::DEFAULT_CAPACITY;
use crate::error::{DynArrayError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest accepted initial capacity hint
pub const MAX_INITIAL_CAPACITY: usize = u32::MAX as usize;

/// Settings used by [`DynamicArray::from_config`](crate::DynamicArray::from_config).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicArrayConfig {
    /// Number of slots allocated by the first growth
    pub initial_capacity: usize,
    /// Fixed seed for the sorter's pivot selection; `None` draws from entropy
    pub sort_seed: Option<u64>,
}

impl Default for DynamicArrayConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            sort_seed: None,
        }
    }
}

impl DynamicArrayConfig {
    /// Set the initial capacity hint
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Make sorting reproducible with `seed`
    pub fn with_sort_seed(mut self, seed: u64) -> Self {
        self.sort_seed = Some(seed);
        self
    }
}

impl Config for DynamicArrayConfig {
    fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(DynArrayError::configuration(
                "initial_capacity must be greater than 0",
            ));
        }
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(DynArrayError::configuration(format!(
                "initial_capacity {} exceeds maximum {}",
                self.initial_capacity, MAX_INITIAL_CAPACITY
            )));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.initial_capacity = parse_env_var(
            &format!("{}INITIAL_CAPACITY", prefix),
            config.initial_capacity,
        );
        config.sort_seed = parse_env_opt(&format!("{}SORT_SEED", prefix)).or(config.sort_seed);
        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self {
            initial_capacity: 1024,
            sort_seed: None,
        }
    }

    fn memory_preset() -> Self {
        Self {
            initial_capacity: 1,
            sort_seed: None,
        }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            DynArrayError::configuration(format!("Failed to serialize array config: {}", e))
        })?;
        std::fs::write(path, serialized).map_err(|e| {
            DynArrayError::configuration(format!("Failed to write array config file: {}", e))
        })?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DynArrayError::configuration(format!("Failed to read array config file: {}", e))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            DynArrayError::configuration(format!("Failed to parse array config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}
