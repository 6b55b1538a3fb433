//! Wordle Host
//!
//! A five-letter word game host with two engines: a standard mode with a fixed
//! secret, and an adversarial mode that never commits to an answer and instead
//! keeps the largest group of candidates consistent with every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_host::core::Dictionary;
//! use wordle_host::session::Host;
//!
//! let dictionary = Dictionary::from_strs(&["crane", "slate", "trace", "grape", "brake"]).unwrap();
//! let mut host = Host::new(Arc::new(dictionary), StdRng::seed_from_u64(7));
//!
//! let id = host.start_adversarial(14).unwrap();
//! let outcome = host.submit_guess(id, "crane").unwrap();
//! println!("{} ({:?} left)", outcome.pattern.to_emoji(), outcome.remaining);
//! ```

// Core domain types
pub mod core;

// Standard and adversarial engines
pub mod engine;

// Session state machine and host
pub mod session;

// Error types
pub mod error;

// Word lists
pub mod wordlists;

// Runtime settings
pub mod config;

// Automated player
pub mod player;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::GameError;
