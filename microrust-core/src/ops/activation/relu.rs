use crate::autograd::backward_op::BackwardOp;
use crate::ops::traits::MicroNumeric;
use crate::value::Value;

/// Rectified linear unit: `max(0, a)`.
///
/// The gradient passes through only where the output is positive; at exactly
/// zero the subgradient 0 is used. A NaN input yields NaN, and backward then
/// hands NaN to the input's gradient.
pub fn relu_op<T: MicroNumeric>(a: &Value<T>) -> Value<T> {
    let input = a.value();
    let output = if input > T::zero() || input.is_nan() {
        input
    } else {
        T::zero()
    };
    Value::from_op(output, BackwardOp::Relu { input: a.clone() })
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
