//! View-state machines.
//!
//! Each submodule is a small, pure state machine: explicit state structs
//! mutated by update functions, with the event wiring kept in [`crate::app`].
//! None of them touch the terminal, the clock, or the filesystem, so all of
//! them are testable with plain tick counters.

pub mod filter;
pub mod form;
pub mod nav;
pub mod reveal;
pub mod tabs;
pub mod theme;
pub mod throttle;
pub mod typewriter;
