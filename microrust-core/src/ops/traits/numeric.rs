use num_traits::{Float, NumAssignOps};
use std::fmt::{Debug, Display};

/// A trait representing the floating-point types a [`Value`](crate::Value) can hold.
///
/// `Float` already provides `zero()`, `one()`, `powf`, `exp`, `tanh` and the
/// `to_f64` conversion used when reporting errors.
pub trait MicroNumeric:
    Float // Includes Num + Copy + NumCast + Neg
    + NumAssignOps // AddAssign, SubAssign, ... used when accumulating gradients
    + Debug
    + Display
    + 'static
{
}

impl MicroNumeric for f32 {}
impl MicroNumeric for f64 {}
