// arith.rs

/// Sum of two numbers under plain IEEE-754 addition.
pub fn calculate_sum(a: f64, b: f64) -> f64 {
    a + b
}

/// Product of two numbers under plain IEEE-754 multiplication.
pub fn calculate_product(a: f64, b: f64) -> f64 {
    a * b
}
