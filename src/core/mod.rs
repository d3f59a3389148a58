pub mod math_operations;
