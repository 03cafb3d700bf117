//! Engine configuration with documented constants
//!
//! All tuning numbers are collected here with explanations of their purpose
//! and how they interact with each other.

/// Configuration for a colony session
///
/// The tick is a fixed unit of real time: `tick()` runs once per render
/// frame and the time multiplier scales effect magnitudes, never the tick
/// rate itself.
#[derive(Debug, Clone)]
pub struct ColonyConfig {
    // === TIME ===
    /// Simulation ticks per real-time second (the frame rate)
    ///
    /// Income and extraction pay out when `game_time % ticks_per_second == 0`,
    /// and converter cycle lengths are expressed in seconds times this value.
    pub ticks_per_second: u64,

    // === GRID ===
    /// Grid width in tiles
    pub grid_width: u32,
    /// Grid height in tiles
    pub grid_height: u32,
    /// Tile edge length in pixels (for derived display geometry only)
    pub tile_size: u32,

    // === STARTING STATE ===
    /// Credits at colony creation
    pub initial_credits: i64,
    /// Population at colony creation
    pub initial_population: u64,
    /// Base power capacity available before any generator is built
    ///
    /// Participates in `power_capacity` ahead of generator sums, so a young
    /// colony can run a few consumers with no generator at all.
    pub base_power: u32,

    // === POPULATION PACING ===
    /// Seconds between +1 population steps while below housing capacity
    pub growth_period_seconds: u64,
    /// Seconds between -1 population steps while above housing capacity
    ///
    /// Deliberately shorter than the growth period: overcrowding corrects
    /// faster than growth fills spare capacity.
    pub decline_period_seconds: u64,

    // === ALERTS ===
    /// How long a raised alert stays active, in ticks
    ///
    /// The UI collaborator drains the queue at its own pace; this bounds how
    /// long an undrained alert is still worth showing.
    pub alert_display_ticks: u64,

    // === WORLDGEN ===
    /// Resource-node patches generated per node type
    pub node_patches_per_type: u32,
    /// Minimum patch edge length in tiles
    pub node_patch_min: u32,
    /// Maximum patch edge length in tiles
    pub node_patch_max: u32,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 60,

            grid_width: 50,
            grid_height: 50,
            tile_size: 32,

            initial_credits: 10_000,
            initial_population: 10,
            base_power: 100,

            growth_period_seconds: 5,
            decline_period_seconds: 2,

            alert_display_ticks: 180,

            node_patches_per_type: 5,
            node_patch_min: 2,
            node_patch_max: 5,
        }
    }
}

impl ColonyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.ticks_per_second == 0 {
            return Err("ticks_per_second must be positive".into());
        }
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err("grid dimensions must be positive".into());
        }
        if self.growth_period_seconds == 0 || self.decline_period_seconds == 0 {
            return Err("population periods must be positive".into());
        }
        if self.node_patch_min > self.node_patch_max {
            return Err(format!(
                "node_patch_min ({}) must be <= node_patch_max ({})",
                self.node_patch_min, self.node_patch_max
            ));
        }
        if self.node_patch_max > self.grid_width.min(self.grid_height) {
            return Err("node patches must fit within the grid".into());
        }
        Ok(())
    }

    /// Ticks in one population growth interval at multiplier 1
    pub fn growth_period_ticks(&self) -> u64 {
        self.growth_period_seconds * self.ticks_per_second
    }

    /// Ticks in one population decline interval at multiplier 1
    pub fn decline_period_ticks(&self) -> u64 {
        self.decline_period_seconds * self.ticks_per_second
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ColonyConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let config = ColonyConfig {
            ticks_per_second: 0,
            ..ColonyConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_patch_bounds_ordering_rejected() {
        let config = ColonyConfig {
            node_patch_min: 6,
            node_patch_max: 4,
            ..ColonyConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
