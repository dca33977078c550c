//! Domain model for project board records.
//!
//! # Responsibility
//! - Define the canonical project record shared by store, views and drag flow.
//!
//! # Invariants
//! - Every record is identified by a stable `ProjectId`.
//! - Records are never deleted; only `status` changes over a record lifetime.

pub mod project;
