// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
pub use crate::{
    polynomial::Polynomial,
    traits::{CheckedPolynomialEval as _, PolynomialEval as _, GCD as _},
};
pub use num_traits::{
    CheckedAdd as _, CheckedMul as _, One as _, Signed as _, Zero as _,
};
