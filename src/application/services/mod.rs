//! Application Services
//!
//! Business logic coordinating the domain layer, the session registry,
//! and the outbound transport.
//!
//! ## Available Services
//!
//! - **GameService**: the command surface (start, status, quit, help,
//!   guess routing)
//! - **SessionEngine**: per-session event loop and round timer

pub mod game_service;
pub mod session_engine;

// Re-export game service types
pub use game_service::{GameError, GameService, GameServiceImpl, StatusDto, RANDOM_LENGTHS};

// Re-export engine types
pub use session_engine::{
    spawn_round_timer, SessionEngine, SessionEvent, TerminationReason, QUIT_TOKEN,
};
