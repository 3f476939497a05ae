//! Room composition for roomkit.
//!
//! Given a loaded [`rk_core::World`], the [`Compositor`] resolves what is
//! drawn on every cell of a room and produces a [`Scene`]: a tree of
//! translated groups whose leaves are colored rectangles. Emitting SVG,
//! pixels, or anything else from the tree is left to the caller.

/// Cell resolution and scene building.
pub mod compositor;
/// Geometry and timing configuration.
pub mod config;
/// Error types for the compose crate.
pub mod error;
/// The visual tree.
pub mod tree;

/// Re-exports of [`compositor::Cell`] and [`compositor::Compositor`].
pub use compositor::{Cell, Compositor};
/// Re-export of [`config::ComposeConfig`].
pub use config::ComposeConfig;
/// Re-exports of [`error::ComposeError`] and [`error::ComposeResult`].
pub use error::{ComposeError, ComposeResult};
/// Re-exports of the visual tree types.
pub use tree::{Group, Node, Rect, Scene};
