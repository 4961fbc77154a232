// mod.rs - Data structures module

pub mod loaders;
pub mod table;

// Re-export main types for convenience
pub use table::{Header, Row, Table};
