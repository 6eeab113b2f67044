use crate::autograd::backward_op::BackwardOp;
use crate::ops::traits::MicroNumeric;
use crate::value::Value;

/// Hyperbolic tangent. Backward adds `(1 - tanh(a)^2) * grad`, reusing the output value.
pub fn tanh_op<T: MicroNumeric>(a: &Value<T>) -> Value<T> {
    Value::from_op(a.value().tanh(), BackwardOp::Tanh { input: a.clone() })
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
