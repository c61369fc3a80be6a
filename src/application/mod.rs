//! Application Layer
//!
//! Orchestrates the game: the service command surface, the per-session
//! engine and timer, the active-session registry, the outbound message
//! port, and the report DTOs handed to transports.

pub mod dto;
pub mod outbound;
pub mod registry;
pub mod services;
