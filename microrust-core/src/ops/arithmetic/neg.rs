use crate::autograd::backward_op::BackwardOp;
use crate::ops::traits::MicroNumeric;
use crate::value::Value;

pub fn neg_op<T: MicroNumeric>(a: &Value<T>) -> Value<T> {
    Value::from_op(-a.value(), BackwardOp::Neg { input: a.clone() })
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
