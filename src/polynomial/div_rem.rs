// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::polynomial::{DeflateError, InvalidPolynomial, NotARoot, Polynomial};
use num_traits::Zero;
use std::mem;
use std::ops::{AddAssign, MulAssign};

impl<T> Polynomial<T>
where
    T: Clone + Zero + AddAssign,
    for<'a> T: MulAssign<&'a T>,
{
    /// divides `self` by `x - root` using synthetic division.
    ///
    /// returns `(quotient, remainder)`; the remainder is `self` evaluated at `root`.
    pub fn div_rem_linear(&self, root: &T) -> (Self, T) {
        let mut iter = self.iter();
        let mut carry = match iter.next() {
            Some(leading) => leading.clone(),
            None => return (Self::default(), T::zero()),
        };
        let mut quotient = Vec::with_capacity(self.len() - 1);
        for coefficient in iter {
            let mut next = carry.clone();
            next *= root;
            next += coefficient.clone();
            quotient.push(mem::replace(&mut carry, next));
        }
        // the quotient's leading coefficient is `self`'s, so it is non-zero
        (
            Self {
                coefficients: quotient,
            },
            carry,
        )
    }
    /// returns the polynomial `q` with `self == (x - root) * q`.
    ///
    /// fails if `self` has degree less than one or if `root` isn't a root of `self`.
    pub fn deflate(&self, root: &T) -> Result<Self, DeflateError<T>> {
        if self.len() < 2 {
            return Err(InvalidPolynomial::ConstantPolynomial.into());
        }
        let (quotient, remainder) = self.div_rem_linear(root);
        if remainder.is_zero() {
            Ok(quotient)
        } else {
            Err(NotARoot { remainder }.into())
        }
    }
}
