// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use num_integer::Integer;

pub trait GCD<Rhs = Self> {
    type Output;
    fn gcd(&self, rhs: &Rhs) -> Self::Output;
}

impl<T: Integer> GCD for T {
    type Output = T;
    fn gcd(&self, rhs: &T) -> T {
        Integer::gcd(self, rhs)
    }
}

/// evaluate a polynomial at `x`
pub trait PolynomialEval<T> {
    fn eval(self, x: &T) -> T;
}

/// evaluate a polynomial at `x`, returning `None` if an intermediate value overflows
pub trait CheckedPolynomialEval<T> {
    fn checked_eval(self, x: &T) -> Option<T>;
}
