use crate::autograd::backward_op::BackwardOp;
use crate::ops::traits::MicroNumeric;
use crate::value::Value;

/// Natural logarithm.
///
/// Non-positive inputs are not rejected: `ln(0)` is `-inf` and negative inputs
/// give NaN, and backward adds `grad / a` accordingly.
pub fn ln_op<T: MicroNumeric>(a: &Value<T>) -> Value<T> {
    Value::from_op(a.value().ln(), BackwardOp::Ln { input: a.clone() })
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
