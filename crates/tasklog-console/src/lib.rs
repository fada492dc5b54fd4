//! Console frontend for tasklog.
//!
//! [`ConsoleReporter`] implements [`tasklog_core::Observer`] and renders the
//! host's lifecycle as timestamped lines: startup notices at attach, task
//! and script boundaries while the session runs, a farewell banner at
//! detach. Every line carries the lap time since the previous one, so the
//! left margin doubles as a coarse profile of the run.
//!
//! The building blocks are public on their own: [`time`] for the lap timer
//! and fixed-width durations, [`style`] for the status coloring, [`output`]
//! for the line format.

pub mod config;
pub mod output;
pub mod reporter;
pub mod style;
pub mod time;

pub use config::{OptionsError, ReporterOptions};
pub use output::LineEmitter;
pub use reporter::ConsoleReporter;
pub use time::{Stopwatch, format_duration};
