// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use num_bigint::BigInt;
use num_integer::{Integer, Roots};
use num_traits::{One, Signed};

/// returns the positive divisors of `n` that are no larger than `limit`, in ascending order.
///
/// `n` must be positive. Costs `min(sqrt(n), limit)` trial divisions.
pub(crate) fn divisors_up_to(n: &BigInt, limit: &BigInt) -> Vec<BigInt> {
    debug_assert!(n.is_positive());
    let sqrt = Roots::sqrt(n);
    let mut small = Vec::new();
    let mut divisor = BigInt::one();
    if *limit < sqrt {
        while divisor <= *limit {
            if n.is_multiple_of(&divisor) {
                small.push(divisor.clone());
            }
            divisor += 1u32;
        }
        return small;
    }
    let mut large = Vec::new();
    while divisor <= sqrt {
        if n.is_multiple_of(&divisor) {
            let other = n / &divisor;
            if other != divisor && other <= *limit {
                large.push(other);
            }
            small.push(divisor.clone());
        }
        divisor += 1u32;
    }
    small.extend(large.into_iter().rev());
    small
}
