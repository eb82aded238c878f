//! Operator overloads for constrained values.
//!
//! Binary operators between containers of possibly different rule types go
//! through [`combine`](super::combine), so the result type carries an
//! `AppendedRule` of both inputs and is re-validated against it. Compound
//! assignment keeps the left-hand rule type but still checks the result
//! against both rules.

use super::{combine, ConstrainedValue};
use crate::rule::{AppendedRule, ValidationRule};

/// Generates a binary operator and its compound assignment for
/// `ConstrainedValue`.
///
/// # Usage
/// ```ignore
/// impl_binary_op!(Add, add, AddAssign, add_assign);
/// ```
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl<T, R1, R2> std::ops::$trait<ConstrainedValue<T, R2>> for ConstrainedValue<T, R1>
        where
            T: std::ops::$trait<Output = T> + 'static,
            R1: ValidationRule<Supported = T>,
            R2: ValidationRule<Supported = T>,
        {
            type Output = ConstrainedValue<T, AppendedRule<R1, R2>>;

            fn $method(self, rhs: ConstrainedValue<T, R2>) -> Self::Output {
                combine(self, rhs, |a, b| std::ops::$trait::$method(a, b))
            }
        }

        impl<T, R1, R2> std::ops::$assign_trait<ConstrainedValue<T, R2>> for ConstrainedValue<T, R1>
        where
            T: std::ops::$trait<Output = T> + 'static,
            R1: ValidationRule<Supported = T>,
            R2: ValidationRule<Supported = T>,
        {
            fn $assign_method(&mut self, rhs: ConstrainedValue<T, R2>) {
                self.combine_assign(rhs, |a, b| std::ops::$trait::$method(a, b));
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign);
impl_binary_op!(Sub, sub, SubAssign, sub_assign);
impl_binary_op!(Mul, mul, MulAssign, mul_assign);
impl_binary_op!(Div, div, DivAssign, div_assign);
impl_binary_op!(Rem, rem, RemAssign, rem_assign);

impl<T, R> std::ops::Neg for ConstrainedValue<T, R>
where
    T: std::ops::Neg<Output = T>,
    R: ValidationRule<Supported = T>,
{
    type Output = Self;

    fn neg(self) -> Self {
        self.update(|value| -value)
    }
}

impl<T, R> std::ops::Not for ConstrainedValue<T, R>
where
    T: std::ops::Not<Output = T>,
    R: ValidationRule<Supported = T>,
{
    type Output = Self;

    fn not(self) -> Self {
        self.update(|value| !value)
    }
}
