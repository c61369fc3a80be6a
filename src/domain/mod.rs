//! # Domain Layer
//!
//! The domain layer contains the core rules of the word game. It is
//! independent of any runtime, transport, or storage concern.
//!
//! ## Structure
//!
//! - **entities**: the `GameSession` aggregate and its transitions
//! - **value_objects**: letter-multiset matching and scoring
//! - **services**: anagram universe construction
//! - **word_source**: the dictionary access contract
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Pure, synchronous state transitions; the async engine lives above
//! - The `WordSource` trait defines the data access contract, implemented
//!   in the infrastructure layer

pub mod entities;
pub mod services;
pub mod value_objects;
pub mod word_source;

// Re-export commonly used types
pub use entities::*;
pub use services::*;
pub use value_objects::*;
pub use word_source::WordSource;
