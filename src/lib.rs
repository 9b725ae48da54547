//! salescope: day/week/month sales reporting over retail order snapshots
//!
//! The engine is a pure calculation pipeline: it takes a snapshot of orders
//! and a reference instant, and produces bucketed period reports. It holds no
//! state, no timers, and does no I/O of its own (the CLI loads snapshots from
//! disk on the engine's behalf).

pub mod cli;
pub mod services;
pub mod types;
