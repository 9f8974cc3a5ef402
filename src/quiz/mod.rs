//! Quiz engine
//!
//! Provides:
//! - Card selection by difficulty tier and due scope
//! - Answer grading (case-insensitive exact match, no partial credit)
//! - Multiple-choice option building
//! - Review rescheduling after an attempt
//! - Append-only attempt log

mod engine;
mod models;
mod schedule;
mod storage;

pub use engine::*;
pub use models::*;
pub use schedule::*;
pub use storage::*;
