//! Timing and threshold configuration.
//!
//! All durations are expressed in ticks of the main event loop, which runs
//! at roughly 60fps (16ms per tick). Keeping the state machines tick-driven
//! means none of them need a real clock, which keeps them testable.

/// Milliseconds per event-loop tick (~60fps).
pub const TICK_MS: u64 = 16;

/// Minimum ticks between scroll-driven evaluations (active link + reveals).
/// 7 ticks is ~112ms, keeping re-evaluation at or below ~10Hz.
pub const SCROLL_THROTTLE_TICKS: u64 = 7;

/// Rows scrolled before the header switches to its "scrolled" treatment.
pub const HEADER_SCROLLED_ROWS: usize = 5;

/// Rows of lookahead added to the scroll offset when matching the active
/// section. Triggers the active link slightly before a section tops out.
pub const NAV_LOOKAHEAD_ROWS: usize = 8;

/// Rows scrolled before the back-to-top control becomes visible.
pub const BACK_TO_TOP_ROWS: usize = 25;

/// Fraction of the viewport an element must enter before it is revealed.
pub const REVEAL_THRESHOLD: f32 = 0.15;

/// Per-card delay when staggering project cards into view.
pub const CARD_STAGGER_TICKS: u64 = 6;

/// Ticks between typed characters (~100ms).
pub const TYPE_TICKS: u64 = 6;

/// Ticks between deleted characters. Deleting runs twice as fast as typing.
pub const DELETE_TICKS: u64 = TYPE_TICKS / 2;

/// Hold time on a fully typed phrase (~2000ms).
pub const PHRASE_HOLD_TICKS: u64 = 125;

/// Pause on an empty line before the next phrase starts (~500ms).
pub const PHRASE_GAP_TICKS: u64 = 31;

/// Simulated latency between submitting the contact form and success (~1500ms).
pub const SUBMIT_LATENCY_TICKS: u64 = 94;

/// How long the success banner stays up before auto-hiding (~5000ms).
pub const SUCCESS_VISIBLE_TICKS: u64 = 312;

/// Phrases cycled by the hero typewriter.
pub const TYPEWRITER_PHRASES: &[&str] = &[
    "Computer Science Student",
    "Full Stack Developer",
    "Problem Solver",
    "Tech Enthusiast",
    "Open Source Contributor",
];

/// Categories offered by the project filter bar, in display order. The
/// filter state prepends its show-everything option ahead of these.
pub const FILTER_CATEGORIES: &[&str] = &["web", "app", "ml"];

/// Relative path of the project data feed.
pub const PROJECTS_FILE: &str = "data/projects.json";
