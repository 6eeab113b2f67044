use crate::autograd::backward_op::BackwardOp;
use crate::ops::traits::MicroNumeric;
use crate::value::Value;

/// Multiplies two nodes: `a * b`.
///
/// Product rule: during backward `a` receives `b.value * grad` and `b`
/// receives `a.value * grad`. For `mul_op(&a, &a)` both contributions land
/// on `a`, giving `2 * a.value * grad`.
pub fn mul_op<T: MicroNumeric>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    Value::from_op(
        a.value() * b.value(),
        BackwardOp::Mul {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
