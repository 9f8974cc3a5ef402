//! Flashcard model, generation, and storage

mod generator;
mod models;
mod storage;

pub use generator::*;
pub use models::*;
pub use storage::*;
