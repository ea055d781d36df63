// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{polynomial::Polynomial, util::divisors_up_to};
use log::{debug, trace};
use num_bigint::BigInt;
use num_rational::Ratio;
use num_traits::{One, Signed, Zero};

/// Cauchy's bound: every root `z` of `polynomial` has `|z| <= 1 + max(|c_i| / |c_0|)`
fn cauchy_bound(polynomial: &Polynomial<BigInt>) -> BigInt {
    let mut iter = polynomial.iter();
    let leading = match iter.next() {
        Some(leading) => leading.abs(),
        None => return BigInt::one(),
    };
    let max_coefficient = iter.map(Signed::abs).max().unwrap_or_else(BigInt::zero);
    BigInt::one() + Ratio::new(max_coefficient, leading).ceil().to_integer()
}

impl Polynomial<BigInt> {
    /// returns every integer root of `self` in ascending order, repeated according to its
    /// multiplicity.
    ///
    /// Every integer is a root of the zero polynomial; that set can't be listed so the
    /// result is empty.
    pub fn integer_roots(&self) -> Vec<BigInt> {
        let mut roots = Vec::new();
        if self.len() < 2 {
            return roots;
        }
        let mut coefficients = self.coefficients.clone();
        while coefficients.len() > 1 && coefficients.last().map_or(false, Zero::is_zero) {
            coefficients.pop();
            roots.push(BigInt::zero());
        }
        let mut remaining = Polynomial { coefficients }.primitive_part();
        if remaining.len() >= 2 {
            remaining.find_nonzero_roots(&mut roots);
        }
        roots.sort();
        debug!("found {} integer roots of {}", roots.len(), self);
        roots
    }

    /// appends the integer roots of `self` to `roots`, deflating `self` as they are found.
    ///
    /// the constant term of `self` must be non-zero.
    fn find_nonzero_roots(&mut self, roots: &mut Vec<BigInt>) {
        let constant = match self.constant_term() {
            Some(constant) => constant.abs(),
            None => return,
        };
        debug_assert!(!constant.is_zero());
        let bound = cauchy_bound(self);
        let divisors = divisors_up_to(&constant, &bound);
        debug!(
            "testing {} candidate roots of {} (root bound {})",
            2 * divisors.len(),
            self,
            bound
        );
        let candidates = divisors
            .iter()
            .rev()
            .map(|divisor| -divisor)
            .chain(divisors.iter().cloned());
        for candidate in candidates {
            // the remainder of dividing by `x - candidate` is `self` evaluated at `candidate`
            while self.len() >= 2 {
                let (quotient, remainder) = self.div_rem_linear(&candidate);
                if !remainder.is_zero() {
                    break;
                }
                trace!("{} is a root of {}", candidate, self);
                roots.push(candidate.clone());
                *self = quotient;
            }
            if self.len() < 2 {
                break;
            }
        }
    }
}
