use crate::autograd::backward_op::BackwardOp;
use crate::ops::traits::MicroNumeric;
use crate::value::Value;

/// Raises a node to a constant power: `base^exponent`.
///
/// The exponent is a plain number, not a node, so only `base` is a
/// predecessor. Backward adds `exponent * base^(exponent - 1) * grad`.
///
/// Follows `Float::powf` for the forward value: a negative base with a
/// non-integer exponent yields NaN, which then propagates like any other float.
pub fn pow_op<T: MicroNumeric>(base: &Value<T>, exponent: T) -> Value<T> {
    Value::from_op(
        base.value().powf(exponent),
        BackwardOp::Pow {
            base: base.clone(),
            exponent,
        },
    )
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
