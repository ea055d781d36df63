// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Exact integer roots of polynomials with integer coefficients.
//!
//! Polynomials are written as coefficient lists, leading coefficient first:
//! `[1, -5, 6]` is `x^2 - 5*x + 6`.
//!
//! ```
//! let roots = introots::integer_roots(&[1, -3, -75, 475, -750]).unwrap();
//! assert_eq!(roots, [-10, 3, 5, 5].map(num_bigint::BigInt::from));
//! assert_eq!(introots::evaluate(&[1, 2, 1], 4).unwrap(), 25.into());
//! ```

pub mod polynomial;
pub mod prelude;
pub mod python;
pub mod traits;
mod util;

pub use crate::polynomial::{DeflateError, InvalidPolynomial, NotARoot, Polynomial};

use crate::traits::PolynomialEval;
use num_bigint::BigInt;

fn to_polynomial<T: Clone + Into<BigInt>>(
    coefficients: &[T],
) -> Result<Polynomial<BigInt>, InvalidPolynomial> {
    Polynomial::new(coefficients.iter().cloned().map(Into::into).collect())
}

/// evaluates the polynomial with the given coefficients at `x`
pub fn evaluate<T, X>(coefficients: &[T], x: X) -> Result<BigInt, InvalidPolynomial>
where
    T: Clone + Into<BigInt>,
    X: Into<BigInt>,
{
    Ok(to_polynomial(coefficients)?.eval(&x.into()))
}

/// returns `true` if `x` is a root of the polynomial with the given coefficients
pub fn is_root<T, X>(coefficients: &[T], x: X) -> Result<bool, InvalidPolynomial>
where
    T: Clone + Into<BigInt>,
    X: Into<BigInt>,
{
    Ok(to_polynomial(coefficients)?.is_root(&x.into()))
}

/// returns the integer roots of the polynomial with the given coefficients in ascending
/// order, each repeated according to its multiplicity
pub fn integer_roots<T>(coefficients: &[T]) -> Result<Vec<BigInt>, InvalidPolynomial>
where
    T: Clone + Into<BigInt>,
{
    Ok(to_polynomial(coefficients)?.integer_roots())
}
