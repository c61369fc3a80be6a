//! Presentation Layer
//!
//! Transport adapters. The game engine only ever sees the abstract
//! inbound/outbound ports; this layer binds them to a concrete surface
//! (the console, for local play).

pub mod commands;
pub mod console;
