//! Folio - a single-page personal portfolio for the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod storage;
pub mod ui;
