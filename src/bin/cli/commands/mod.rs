pub mod answer;
pub mod delete;
pub mod import;
pub mod list;
pub mod quiz;
pub mod show;
pub mod stats;
