//! # RANGELAB Audit
//!
//! Bounded audit trail of topology and visibility operations.

pub mod audit_log;

pub use audit_log::{AuditEntry, AuditEventType, AuditLog, AuditStats};
