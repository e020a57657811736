//! Symbol table configuration

use crate::error::{ConfigError, ConfigResult};

/// Default number of entries a fresh table reserves room for
pub const DEFAULT_INITIAL_CAPACITY: usize = 4096;

/// Tuning knobs for an [`Interner`](crate::Interner) and everything built on top of it.
///
/// # Examples
///
/// ```
/// use kava_symbols::SymbolTableConfig;
///
/// let config = SymbolTableConfig {
///     initial_capacity: 1 << 16,
///     shard_amount: Some(64),
///     ..SymbolTableConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTableConfig {
    /// Entries reserved up front. A seeded table always reserves at least the seed's size.
    pub initial_capacity: usize,

    /// Number of lock shards in the backing map.
    ///
    /// `None` lets the map pick a value from the number of available cores.
    pub shard_amount: Option<usize>,

    /// Maintain hit/miss/race counters
    pub track_stats: bool,
}

impl Default for SymbolTableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            shard_amount: None,
            track_stats: true,
        }
    }
}

impl SymbolTableConfig {
    /// Config sized for a small table, mostly useful in tests and short-lived tools.
    pub fn small() -> Self {
        Self {
            initial_capacity: 64,
            ..Self::default()
        }
    }

    /// Check that the values can be handed to the backing map.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::InvalidCapacity(self.initial_capacity));
        }
        if let Some(shards) = self.shard_amount {
            if shards <= 1 || !shards.is_power_of_two() {
                return Err(ConfigError::InvalidShardAmount(shards));
            }
        }
        Ok(())
    }
}
