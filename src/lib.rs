//! Automated assessment engine for student submissions.
//!
//! The engine turns a free-text submission plus a rubric into a bounded
//! score with per-criterion rationales, compares submissions against a
//! caller-supplied corpus for similarity, and estimates whether a text is
//! machine-generated. All of it is deterministic, synchronous, and free of
//! I/O; persistence and corpus retrieval belong to the surrounding system.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
