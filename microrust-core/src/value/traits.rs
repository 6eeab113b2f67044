// src/value/traits.rs

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::ops::traits::MicroNumeric;
use crate::value::Value;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::rc::Rc;

// --- Trait Implementations ---

impl<T: MicroNumeric> Clone for Value<T> {
    /// Clones the handle, not the node. Both handles refer to the same node and
    /// see the same gradient.
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}

impl<T: MicroNumeric> fmt::Debug for Value<T> {
    /// Shows the node's own fields and how many predecessors it has, without
    /// recursing into the graph.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        f.debug_struct("Value")
            .field("value", &guard.value)
            .field("grad", &guard.grad)
            .field("op", &guard.op.kind())
            .field("operands", &guard.op.operands().len())
            .finish()
    }
}

impl<T: MicroNumeric> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(
            f,
            "Value(value={}, grad={}, op={})",
            guard.value,
            guard.grad,
            guard.op.kind()
        )
    }
}

// --- Operator overloads ---
//
// Every combination of owned and borrowed handles, plus a bare number on
// either side. Numbers are wrapped as fresh leaf nodes.

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<T: MicroNumeric> $trait<&Value<T>> for &Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: &Value<T>) -> Value<T> {
                $op_fn(self, rhs)
            }
        }

        impl<T: MicroNumeric> $trait<Value<T>> for Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: Value<T>) -> Value<T> {
                $op_fn(&self, &rhs)
            }
        }

        impl<T: MicroNumeric> $trait<&Value<T>> for Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: &Value<T>) -> Value<T> {
                $op_fn(&self, rhs)
            }
        }

        impl<T: MicroNumeric> $trait<Value<T>> for &Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: Value<T>) -> Value<T> {
                $op_fn(self, &rhs)
            }
        }

        impl<T: MicroNumeric> $trait<T> for &Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: T) -> Value<T> {
                $op_fn(self, &Value::new(rhs))
            }
        }

        impl<T: MicroNumeric> $trait<T> for Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: T) -> Value<T> {
                $op_fn(&self, &Value::new(rhs))
            }
        }

        impl_binary_op!(@scalar_lhs $trait, $method, $op_fn, f32);
        impl_binary_op!(@scalar_lhs $trait, $method, $op_fn, f64);
    };
    (@scalar_lhs $trait:ident, $method:ident, $op_fn:ident, $float:ty) => {
        impl $trait<&Value<$float>> for $float {
            type Output = Value<$float>;
            fn $method(self, rhs: &Value<$float>) -> Value<$float> {
                $op_fn(&Value::new(self), rhs)
            }
        }

        impl $trait<Value<$float>> for $float {
            type Output = Value<$float>;
            fn $method(self, rhs: Value<$float>) -> Value<$float> {
                $op_fn(&Value::new(self), &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl<T: MicroNumeric> Neg for &Value<T> {
    type Output = Value<T>;
    fn neg(self) -> Value<T> {
        neg_op(self)
    }
}

impl<T: MicroNumeric> Neg for Value<T> {
    type Output = Value<T>;
    fn neg(self) -> Value<T> {
        neg_op(&self)
    }
}
