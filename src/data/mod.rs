pub mod bitmap;
pub mod csv;

pub use csv::{CsvError, DigitSet};
