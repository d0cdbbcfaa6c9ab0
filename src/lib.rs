//! GridConnect
//!
//! Client for a daily word-grouping puzzle: sixteen words hide four groups of
//! four, and the player has four mistakes to find them all. Wins add to a
//! persisted score and a daily streak.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gridconnect::puzzles::sample_groups;
//! use gridconnect::service::FixedPuzzleService;
//! use gridconnect::session::SessionEngine;
//! use gridconnect::store::MemoryStore;
//!
//! # async fn demo() {
//! let service = FixedPuzzleService::new(sample_groups()).unwrap();
//! let mut engine = SessionEngine::new(service, MemoryStore::new());
//!
//! engine.start_session().await;
//! for word in sample_groups()[0].words() {
//!     engine.select_word(word);
//! }
//! let outcome = engine.submit().await;
//! println!("{outcome:?}");
//! # }
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Puzzle service clients
pub mod service;

// Profile persistence
pub mod store;

// Puzzle files
pub mod puzzles;

// Session state machine
pub mod session;

// Client configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
