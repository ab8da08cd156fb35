//! Configuration APIs for dynarray
//!
//! Configuration types implement the [`Config`] trait, which covers
//! validation, initialization from environment variables, presets, and
//! JSON persistence.
//!
//! ```rust
//! use dynarray::config::{Config, DynamicArrayConfig};
//! use dynarray::DynamicArray;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads DYNARRAY_INITIAL_CAPACITY and DYNARRAY_SORT_SEED when set
//! let config = DynamicArrayConfig::from_env()?;
//! let array: DynamicArray<u32> = DynamicArray::from_config(&config)?;
//! assert!(array.is_empty());
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod dynamic_array;


pub use dynamic_array::{DynamicArrayConfig, MAX_INITIAL_CAPACITY};

/// Default prefix for configuration environment variables
pub const ENV_PREFIX: &str = "DYNARRAY_";

/// Common configuration trait providing validation, environment
/// initialization, and preset management.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables.
    ///
    /// Variables use the format `DYNARRAY_{FIELD}`, for example
    /// `DYNARRAY_INITIAL_CAPACITY=64`.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Initialize configuration from environment variables with a custom prefix.
    ///
    /// Unset or unparsable variables keep their default value.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Preset favoring fewer reallocations over memory footprint.
    fn performance_preset() -> Self;

    /// Preset favoring the smallest possible buffers.
    fn memory_preset() -> Self;

    /// Balanced preset, the default configuration.
    fn balanced_preset() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Save configuration to a JSON file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Parse an environment variable, falling back to `default` when the
/// variable is unset or does not parse.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    parse_env_opt(var_name).unwrap_or(default)
}

/// Parse an environment variable into `Some(value)`, or `None` when the
/// variable is unset or does not parse.
pub fn parse_env_opt<T>(var_name: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(var_name).ok().and_then(|s| s.trim().parse().ok())
}
