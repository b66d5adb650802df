//! # Console Connect Four
//!
//! A two-player Connect Four game played at the text console.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, win detection, players, state machine
//! - [`players`] — Move sources: console prompt and scripted moves
//! - [`session`] — Game loop, replay driver, session tally
//! - [`ui`] — Line-based console and render sinks
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod players;
pub mod session;
pub mod ui;
