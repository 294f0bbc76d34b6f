//! # RANGELAB Core
//!
//! The orchestrator behind the platform's team-scoped operations: wires the
//! role resolver, topology store, visibility engine, asset directory, team
//! roster and audit log behind a single authorization guard.

pub mod range_core;

pub use range_core::{CoreConfig, RangeCore};
