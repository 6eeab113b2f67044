use crate::autograd::backward_op::BackwardOp;
use crate::ops::traits::MicroNumeric;
use crate::value::Value;

/// Natural exponential `e^a`. Its derivative is its own output value.
pub fn exp_op<T: MicroNumeric>(a: &Value<T>) -> Value<T> {
    Value::from_op(a.value().exp(), BackwardOp::Exp { input: a.clone() })
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
