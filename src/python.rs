// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

#![cfg(feature = "python")]

use crate::polynomial::Polynomial;
use crate::traits::PolynomialEval;
use num_bigint::BigInt;
use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyAny;
use pyo3::wrap_pyfunction;

create_exception!(
    introots,
    BadPolynomialError,
    PyValueError,
    "Raised by polynomial routines when the polynomial is invalid."
);

/// a valid polynomial is a list of integer coefficients like `[1, 2, 1]` whose first
/// (leading) coefficient isn't zero
fn extract_polynomial(poly: &PyAny) -> PyResult<Polynomial<BigInt>> {
    let coefficients: Vec<BigInt> = poly
        .extract()
        .map_err(|_| BadPolynomialError::new_err("polynomial must be a list of integers"))?;
    Polynomial::new(coefficients).map_err(|err| BadPolynomialError::new_err(err.to_string()))
}

/// evaluate_polynomial(poly, xval)
/// --
///
/// calculates `p(xval)`; `evaluate_polynomial([1, 2, 1], 3)` is `16`
#[pyfunction]
fn evaluate_polynomial(py: Python, poly: &PyAny, xval: BigInt) -> PyResult<BigInt> {
    let poly = extract_polynomial(poly)?;
    Ok(py.allow_threads(|| poly.eval(&xval)))
}

/// is_root(poly, xval)
/// --
///
/// returns `True` if `xval` is a root of `poly`
#[pyfunction]
fn is_root(py: Python, poly: &PyAny, xval: BigInt) -> PyResult<bool> {
    let poly = extract_polynomial(poly)?;
    Ok(py.allow_threads(|| poly.is_root(&xval)))
}

/// integer_roots(poly)
/// --
///
/// returns the integer roots of `poly` in ascending order, repeated according to
/// their multiplicity
#[pyfunction]
fn integer_roots(py: Python, poly: &PyAny) -> PyResult<Vec<BigInt>> {
    let poly = extract_polynomial(poly)?;
    Ok(py.allow_threads(|| poly.integer_roots()))
}

#[pymodule]
fn introots(py: Python, m: &PyModule) -> PyResult<()> {
    m.add("BadPolynomialError", py.get_type::<BadPolynomialError>())?;
    m.add_function(wrap_pyfunction!(evaluate_polynomial, m)?)?;
    m.add_function(wrap_pyfunction!(is_root, m)?)?;
    m.add_function(wrap_pyfunction!(integer_roots, m)?)?;
    Ok(())
}
