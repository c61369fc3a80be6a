//! # Anagrams Bot Library
//!
//! This crate provides a channel-based timed anagrams word game:
//! - A session engine that tracks found and missed sub-anagrams
//! - A cancellable round timer with countdown milestones
//! - A command surface for starting, querying, and quitting rounds
//! - A console transport for local play
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Game rules, the session entity, dictionary contract
//! - **Application Layer**: Game service, session engine, outbound port
//! - **Infrastructure Layer**: Dictionary and metrics implementations
//! - **Presentation Layer**: Command parsing and the console transport
//!
//! ## Module Structure
//!
//! ```text
//! anagrams_bot/
//! +-- config/        Configuration management
//! +-- domain/        Entities, value objects, and contracts
//! +-- application/   Game service, engine, registry, DTOs
//! +-- infrastructure/ Dictionary and metrics implementations
//! +-- presentation/  Command parsing and console transport
//! +-- shared/        Common utilities (errors)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core game rules
pub mod domain;

// Application layer - Game orchestration
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - Transport adapters
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and wiring
pub mod startup;

// Telemetry and observability
pub mod telemetry;
