use rk_core::ColorSlot;

/// Alias for `Result<T, ComposeError>`.
pub type ComposeResult<T> = Result<T, ComposeError>;

/// Errors that stop a room from being composed.
///
/// Dangling tile, sprite, and item references are not errors: those cells
/// simply draw less. Only the palette has to resolve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    /// The room never named a palette.
    #[error("room \"{room_id}\" has no palette")]
    NoPalette {
        /// The room being composed.
        room_id: String,
    },

    /// The room names a palette that does not exist.
    #[error("room \"{room_id}\" references palette \"{palette_id}\", which does not exist")]
    PaletteNotFound {
        /// The room being composed.
        room_id: String,
        /// The dangling palette id.
        palette_id: String,
    },

    /// The palette is too short to provide a color the drawing needs.
    #[error("palette \"{palette_id}\" has no {slot}")]
    MissingColor {
        /// The palette that was too short.
        palette_id: String,
        /// The slot that was asked for.
        slot: ColorSlot,
    },

    /// No room carries the requested id.
    #[error("room not found: \"{0}\"")]
    RoomNotFound(String),

    /// A configuration value is out of range.
    #[error("invalid compose config: {0}")]
    InvalidConfig(String),
}
