// mod.rs - File loaders

pub mod csv;

pub use self::csv::{count_rows, read_header, read_table, write_rows};
