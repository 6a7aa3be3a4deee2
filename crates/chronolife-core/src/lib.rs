//! Configuration, operator controls, and the generation ticker for Chronolife.
//!
//! This crate sits between the synchronous universe kernel and the binary
//! that drives it. It owns no simulation state of its own.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `chronolife-config.yaml` into
//!   strongly-typed structs.
//! - [`operator`] -- Shared pause, resume, speed, and stop controls.
//! - [`runner`] -- The async tick loop that computes one generation per
//!   interval and reports each to a [`TickCallback`].
//!
//! [`TickCallback`]: runner::TickCallback

pub mod config;
pub mod operator;
pub mod runner;
