use crate::ops::arithmetic::{mul_op, pow_op};
use crate::ops::traits::MicroNumeric;
use crate::value::Value;

/// Divides two nodes: `a / b`, built as `a * b^-1`.
///
/// Creates two nodes (the reciprocal and the product). Division by zero is
/// not an error; it yields an infinite or NaN value per IEEE 754.
pub fn div_op<T: MicroNumeric>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    let reciprocal = pow_op(b, -T::one());
    mul_op(a, &reciprocal)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
