pub mod matrix;

pub use matrix::{outer_product_into, sigmoid_in_place, Matrix};
