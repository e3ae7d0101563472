//! # Skincare Flow Core Library
//!
//! This library provides the logic behind the Skincare Flow routine wizard:
//! a guided, step-by-step checklist for a morning and evening skincare and
//! haircare routine. The CLI binary is a thin front end over this crate.
//!
//! ## Architecture
//!
//! - **Step Catalog**: ordered rule tables turning the user's options into
//!   the morning and evening step sequences
//! - **Routine Session**: the intro → morning → evening → done state machine
//!   walking a sequence one step at a time
//! - **Countdown Timer**: per-step countdown plus the cancellable tick task
//!   that drives it
//! - **Configuration**: read-only TOML file with option defaults
//!
//! ## Key Components
//!
//! - [`RoutineSession`]: session state machine
//! - [`build_morning_steps`] / [`build_evening_steps`]: step catalog
//! - [`Countdown`] / [`StepTimer`]: step timers
//! - [`Config`]: application configuration

pub mod config;
pub mod error;
pub mod events;
pub mod haptics;
pub mod routine;
pub mod session;
pub mod timer;

pub use config::Config;
pub use error::{ConfigError, CoreError};
pub use events::Event;
pub use haptics::{Haptics, NoHaptics, TerminalBell};
pub use routine::{
    build_evening_steps, build_morning_steps, build_steps, GoingOut, Phase, RoutineOptions, Step,
};
pub use session::{NextControl, RoutineSession};
pub use timer::{format_mmss, Countdown, StepTimer, Ticker};
