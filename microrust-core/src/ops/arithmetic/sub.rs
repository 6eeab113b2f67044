use crate::autograd::backward_op::BackwardOp;
use crate::ops::traits::MicroNumeric;
use crate::value::Value;

/// Subtracts two nodes: `a - b`. `b` receives the negated upstream gradient.
pub fn sub_op<T: MicroNumeric>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    Value::from_op(
        a.value() - b.value(),
        BackwardOp::Sub {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
