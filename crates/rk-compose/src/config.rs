use crate::error::{ComposeError, ComposeResult};

/// Geometry and timing used when composing scenes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeConfig {
    /// Units between the origins of neighbouring cells.
    pub tile_size: u32,
    /// Units covered by one drawing pixel.
    pub pixel_size: u32,
    /// How long each animation frame is shown, in milliseconds.
    pub frame_duration_ms: u32,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            tile_size: 8,
            pixel_size: 1,
            frame_duration_ms: 400,
        }
    }
}

impl ComposeConfig {
    /// Set the distance between neighbouring cells.
    pub fn with_tile_size(mut self, size: u32) -> Self {
        self.tile_size = size;
        self
    }

    /// Set the size of one drawing pixel.
    pub fn with_pixel_size(mut self, size: u32) -> Self {
        self.pixel_size = size;
        self
    }

    /// Set the animation frame duration.
    pub fn with_frame_duration_ms(mut self, ms: u32) -> Self {
        self.frame_duration_ms = ms;
        self
    }

    /// Reject zero sizes and durations.
    pub fn validate(&self) -> ComposeResult<()> {
        if self.tile_size == 0 {
            return Err(ComposeError::InvalidConfig("tile size must be positive".into()));
        }
        if self.pixel_size == 0 {
            return Err(ComposeError::InvalidConfig("pixel size must be positive".into()));
        }
        if self.frame_duration_ms == 0 {
            return Err(ComposeError::InvalidConfig(
                "frame duration must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_eight_unit_tiles() {
        let config = ComposeConfig::default();
        assert_eq!(config.tile_size, 8);
        assert_eq!(config.pixel_size, 1);
        assert_eq!(config.frame_duration_ms, 400);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_overrides() {
        let config = ComposeConfig::default()
            .with_tile_size(16)
            .with_pixel_size(2)
            .with_frame_duration_ms(250);
        assert_eq!(config.tile_size, 16);
        assert_eq!(config.pixel_size, 2);
        assert_eq!(config.frame_duration_ms, 250);
    }

    #[test]
    fn zero_values_are_rejected() {
        let err = ComposeConfig::default().with_tile_size(0).validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid compose config: tile size must be positive");
        assert!(ComposeConfig::default().with_frame_duration_ms(0).validate().is_err());
    }
}
