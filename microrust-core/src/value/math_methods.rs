// Method-call forms of the unary operators, e.g. `x.pow(2.0).tanh()`.

use crate::ops::activation::{relu_op, tanh_op};
use crate::ops::arithmetic::pow_op;
use crate::ops::math_elem::{exp_op, ln_op};
use crate::ops::traits::MicroNumeric;
use crate::value::Value;

impl<T: MicroNumeric> Value<T> {
    /// See [`pow_op`].
    pub fn pow(&self, exponent: T) -> Value<T> {
        pow_op(self, exponent)
    }

    pub fn exp(&self) -> Value<T> {
        exp_op(self)
    }

    /// See [`ln_op`].
    pub fn ln(&self) -> Value<T> {
        ln_op(self)
    }

    pub fn tanh(&self) -> Value<T> {
        tanh_op(self)
    }

    /// See [`relu_op`].
    pub fn relu(&self) -> Value<T> {
        relu_op(self)
    }
}
