//! Shared type definitions for the Chronolife simulation.
//!
//! This crate holds the plain value types that flow between the universe
//! kernel and its collaborators (the tick driver, the engine binary, and any
//! rendering layer). Nothing here knows about the Life rule or history.
//!
//! # Modules
//!
//! - [`enums`] -- Boundary handling for neighbor counting and addressing
//! - [`board`] -- Fixed-size boolean grids, neighbor-count grids, regions
//! - [`status`] -- Read-only generation status for status lines and overlays

pub mod board;
pub mod enums;
pub mod status;

// Re-export all public types at crate root for convenience.
pub use board::{Board, NeighborCounts, Region};
pub use enums::BoundaryMode;
pub use status::{GenerationStatus, StatusFields};
