//! Core library for tasklog: the contract between a task runner and its
//! reporting layer.
//!
//! The host engine describes what happened through [`events::Event`] values;
//! anything that wants to react implements [`bus::Observer`] and registers on
//! an [`bus::EventBus`]. The bus dispatches synchronously in registration
//! order, so observers see events exactly as the engine emitted them. An
//! async engine can feed the bus through [`bus::spawn_dispatcher`].
//!
//! This crate carries no rendering: presentation lives in frontends such as
//! `tasklog-console`.

pub mod bus;
pub mod events;
pub mod host;

pub use bus::{EventBus, Observer, spawn_dispatcher};
pub use events::Event;
pub use host::HostInfo;
