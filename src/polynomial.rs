// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::traits::{CheckedPolynomialEval, PolynomialEval, GCD};
use num_traits::{zero, CheckedAdd, CheckedMul, Zero};
use std::convert::TryFrom;
use std::error::Error;
use std::fmt;
use std::ops::{AddAssign, Div, MulAssign};
use std::slice;
use std::str::FromStr;
use std::vec;

mod div_rem;
mod integer_roots;

/// A single-variable polynomial.
///
/// Coefficients are stored most significant first: the term at index `n` is
/// `self.coefficients()[n] * pow(x, self.len() - 1 - n)`.
///
/// # Invariants
///
/// `self.coefficients().first()` is either `None` or `Some(v)` where `!v.is_zero()`
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Polynomial<T> {
    coefficients: Vec<T>,
}

impl<T> Default for Polynomial<T> {
    fn default() -> Self {
        Self {
            coefficients: Vec::default(),
        }
    }
}

impl<T: Zero> Polynomial<T> {
    /// creates a polynomial from coefficients ordered leading coefficient first.
    ///
    /// An empty `coefficients` is the zero polynomial.
    pub fn new(coefficients: Vec<T>) -> Result<Self, InvalidPolynomial> {
        match coefficients.first() {
            Some(leading) if leading.is_zero() => Err(InvalidPolynomial::ZeroLeadingCoefficient),
            _ => Ok(Self { coefficients }),
        }
    }
    /// parses one coefficient per token, leading coefficient first
    pub fn parse_coefficients<I, S>(tokens: I) -> Result<Self, InvalidPolynomial>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        T: FromStr,
    {
        let coefficients = tokens
            .into_iter()
            .enumerate()
            .map(|(index, token)| {
                let token = token.as_ref();
                token
                    .trim()
                    .parse()
                    .map_err(|_| InvalidPolynomial::MalformedCoefficient {
                        index,
                        token: token.into(),
                    })
            })
            .collect::<Result<Vec<T>, _>>()?;
        Self::new(coefficients)
    }
}

impl<T: Zero> TryFrom<Vec<T>> for Polynomial<T> {
    type Error = InvalidPolynomial;
    fn try_from(coefficients: Vec<T>) -> Result<Self, InvalidPolynomial> {
        Self::new(coefficients)
    }
}

impl<T: Zero + Clone> TryFrom<&'_ [T]> for Polynomial<T> {
    type Error = InvalidPolynomial;
    fn try_from(coefficients: &[T]) -> Result<Self, InvalidPolynomial> {
        Self::new(coefficients.to_vec())
    }
}

impl<T: Zero + FromStr> FromStr for Polynomial<T> {
    type Err = InvalidPolynomial;
    /// parses whitespace-separated coefficients, leading coefficient first
    fn from_str(text: &str) -> Result<Self, InvalidPolynomial> {
        Self::parse_coefficients(text.split_whitespace())
    }
}

impl<T> Polynomial<T> {
    pub fn coefficients(&self) -> &Vec<T> {
        &self.coefficients
    }
    pub fn into_coefficients(self) -> Vec<T> {
        self.coefficients
    }
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.coefficients.iter()
    }
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
    /// returns `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }
    pub fn leading_coefficient(&self) -> Option<&T> {
        self.coefficients.first()
    }
    pub fn constant_term(&self) -> Option<&T> {
        self.coefficients.last()
    }
    /// returns greatest common divisor of all coefficients
    pub fn content(&self) -> T
    where
        T: GCD<Output = T> + Zero + Clone,
    {
        self.iter()
            .fold(None, |lhs: Option<T>, rhs| match lhs {
                None => Some(rhs.clone()),
                Some(lhs) => Some(lhs.gcd(rhs)),
            })
            .unwrap_or_else(zero)
    }
    /// divides every coefficient by [`content`](Self::content); the roots are unchanged
    pub fn primitive_part(&self) -> Self
    where
        T: GCD<Output = T> + Zero + Clone,
        for<'a> &'a T: Div<&'a T, Output = T>,
    {
        let content = self.content();
        if content.is_zero() {
            return Self::default();
        }
        Self {
            coefficients: self.iter().map(|v| v / &content).collect(),
        }
    }
    /// returns `true` if `self` evaluates to zero at `x`.
    ///
    /// Every value is a root of the zero polynomial.
    pub fn is_root<'a>(&'a self, x: &T) -> bool
    where
        &'a Self: PolynomialEval<T>,
        T: Zero,
    {
        PolynomialEval::eval(self, x).is_zero()
    }
}

impl<T> PolynomialEval<T> for Polynomial<T>
where
    T: Zero + AddAssign,
    for<'a> T: MulAssign<&'a T>,
{
    fn eval(self, x: &T) -> T {
        let mut iter = self.into_iter();
        if let Some(leading) = iter.next() {
            let mut retval = leading;
            for coefficient in iter {
                retval *= x;
                retval += coefficient;
            }
            retval
        } else {
            zero()
        }
    }
}

impl<'a, T> PolynomialEval<T> for &'a Polynomial<T>
where
    T: Zero + AddAssign<&'a T> + Clone,
    for<'b> T: MulAssign<&'b T>,
{
    fn eval(self, x: &T) -> T {
        let mut iter = self.iter();
        if let Some(leading) = iter.next() {
            let mut retval = leading.clone();
            for coefficient in iter {
                retval *= x;
                retval += coefficient;
            }
            retval
        } else {
            zero()
        }
    }
}

impl<'a, T> CheckedPolynomialEval<T> for &'a Polynomial<T>
where
    T: Zero + Clone + CheckedAdd + CheckedMul,
{
    fn checked_eval(self, x: &T) -> Option<T> {
        let mut iter = self.iter();
        let mut retval = match iter.next() {
            Some(leading) => leading.clone(),
            None => return Some(zero()),
        };
        for coefficient in iter {
            retval = retval.checked_mul(x)?.checked_add(coefficient)?;
        }
        Some(retval)
    }
}

impl<T> IntoIterator for Polynomial<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.coefficients.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Polynomial<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.coefficients.is_empty() {
            return write!(f, "0");
        }
        for (index, coefficient) in self.coefficients.iter().enumerate() {
            if index != 0 {
                write!(f, " + ")?;
            }
            match self.len() - 1 - index {
                0 => write!(f, "{}", coefficient)?,
                1 => write!(f, "{}*x", coefficient)?,
                power => write!(f, "{}*x^{}", coefficient, power)?,
            }
        }
        Ok(())
    }
}

/// the coefficient list doesn't describe a valid polynomial
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum InvalidPolynomial {
    /// the leading coefficient is zero
    ZeroLeadingCoefficient,
    /// a coefficient isn't an integer
    MalformedCoefficient { index: usize, token: String },
    /// the operation needs a polynomial of degree at least one
    ConstantPolynomial,
}

impl fmt::Display for InvalidPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidPolynomial::ZeroLeadingCoefficient => {
                write!(f, "invalid polynomial: leading coefficient is zero")
            }
            InvalidPolynomial::MalformedCoefficient { index, token } => write!(
                f,
                "invalid polynomial: coefficient {} is not an integer: {:?}",
                index, token
            ),
            InvalidPolynomial::ConstantPolynomial => {
                write!(f, "invalid polynomial: degree must be at least one")
            }
        }
    }
}

impl Error for InvalidPolynomial {}

impl From<InvalidPolynomial> for std::io::Error {
    fn from(err: InvalidPolynomial) -> Self {
        Self::new(std::io::ErrorKind::InvalidInput, err)
    }
}

/// dividing by `x - r` left a non-zero remainder
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NotARoot<T> {
    pub remainder: T,
}

impl<T: fmt::Display> fmt::Display for NotARoot<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "value is not a root: remainder is {}", self.remainder)
    }
}

impl<T: fmt::Debug + fmt::Display> Error for NotARoot<T> {}

impl<T: fmt::Debug + fmt::Display + Send + Sync + 'static> From<NotARoot<T>> for std::io::Error {
    fn from(err: NotARoot<T>) -> Self {
        Self::new(std::io::ErrorKind::InvalidInput, err)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeflateError<T> {
    InvalidPolynomial(InvalidPolynomial),
    NotARoot(NotARoot<T>),
}

impl<T> From<InvalidPolynomial> for DeflateError<T> {
    fn from(err: InvalidPolynomial) -> Self {
        DeflateError::InvalidPolynomial(err)
    }
}

impl<T> From<NotARoot<T>> for DeflateError<T> {
    fn from(err: NotARoot<T>) -> Self {
        DeflateError::NotARoot(err)
    }
}

impl<T: fmt::Display> fmt::Display for DeflateError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DeflateError::InvalidPolynomial(err) => fmt::Display::fmt(err, f),
            DeflateError::NotARoot(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl<T: fmt::Debug + fmt::Display + 'static> Error for DeflateError<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DeflateError::InvalidPolynomial(err) => Some(err),
            DeflateError::NotARoot(err) => Some(err),
        }
    }
}

impl<T: fmt::Debug + fmt::Display + Send + Sync + 'static> From<DeflateError<T>>
    for std::io::Error
{
    fn from(err: DeflateError<T>) -> Self {
        Self::new(std::io::ErrorKind::InvalidInput, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn p(coefficients: Vec<i64>) -> Polynomial<i64> {
        Polynomial::new(coefficients).unwrap()
    }

    #[test]
    fn test_new() {
        assert_eq!(
            Polynomial::<i32>::new(vec![0]),
            Err(InvalidPolynomial::ZeroLeadingCoefficient)
        );
        assert_eq!(
            Polynomial::<i32>::new(vec![0, 1, 2]),
            Err(InvalidPolynomial::ZeroLeadingCoefficient)
        );
        assert!(Polynomial::<i32>::new(vec![]).unwrap().is_empty());
        assert_eq!(p(vec![1, 0, 0]).degree(), Some(2));
        assert_eq!(Polynomial::<i64>::default().degree(), None);
        let poly = p(vec![3, 0, -7]);
        assert_eq!(poly.leading_coefficient(), Some(&3));
        assert_eq!(poly.constant_term(), Some(&-7));
        assert_eq!(
            Polynomial::try_from(&[0i32, 5][..]),
            Err(InvalidPolynomial::ZeroLeadingCoefficient)
        );
    }

    #[test]
    fn test_eval() {
        let poly = p(vec![]);
        assert_eq!(poly.eval(&10), 0);
        let poly = p(vec![1]);
        assert_eq!(poly.eval(&10), 1);
        let poly = p(vec![1, 2]);
        assert_eq!(poly.eval(&10), 12);
        let poly = p(vec![1, 2, 3]);
        assert_eq!(poly.eval(&10), 123);
        let poly = p(vec![1, 2, 3, 4]);
        assert_eq!((&poly).eval(&10), 1234);
        assert_eq!(p(vec![1, 2, 1]).eval(&4), 25);
        assert_eq!(p(vec![1, 2, 1]).eval(&3), 16);
        assert_eq!(p(vec![1, 2]).eval(&3), 5);
    }

    #[test]
    fn test_eval_big() {
        let poly = Polynomial::new(vec![BigInt::from(1), BigInt::from(0), BigInt::from(1)]).unwrap();
        let x = BigInt::from(u64::MAX);
        assert_eq!(poly.eval(&x), &x * &x + 1);
    }

    #[test]
    fn test_checked_eval() {
        let poly = Polynomial::new(vec![1i8, 0, 1]).unwrap();
        assert_eq!(poly.checked_eval(&10), Some(101));
        assert_eq!(poly.checked_eval(&12), None);
        assert_eq!(Polynomial::<i8>::default().checked_eval(&100), Some(0));
    }

    #[test]
    fn test_is_root() {
        assert!(p(vec![]).is_root(&1));
        assert!(p(vec![]).is_root(&-12345));
        assert!(!p(vec![1]).is_root(&1));
        assert!(!p(vec![1, 1]).is_root(&1));
        assert!(p(vec![1, 1]).is_root(&-1));
        assert!(p(vec![1, -1]).is_root(&1));
        assert!(!p(vec![1, -1]).is_root(&-1));
        assert!(p(vec![1, -5, 6]).is_root(&2));
        assert!(p(vec![1, -5, 6]).is_root(&3));
        assert!(!p(vec![1, -5, 6]).is_root(&4));
        assert!(!p(vec![1, 2, 1]).is_root(&3));
        assert!(p(vec![1, 2, 1]).is_root(&-1));
    }

    #[test]
    fn test_content() {
        assert_eq!(p(vec![]).content(), 0);
        assert_eq!(p(vec![6, -4, 10]).content(), 2);
        assert_eq!(p(vec![6, -4, 10]).iter().min(), Some(&-4));
        assert_eq!(p(vec![6, -4, 10]).primitive_part(), p(vec![3, -2, 5]));
        assert_eq!(p(vec![-3, 9]).primitive_part(), p(vec![-1, 3]));
    }

    #[test]
    fn test_display() {
        let mut poly = p(vec![]);
        assert_eq!(format!("{}", poly), "0");
        poly = p(vec![1]);
        assert_eq!(format!("{}", poly), "1");
        poly = p(vec![1, 2]);
        assert_eq!(format!("{}", poly), "1*x + 2");
        poly = p(vec![1, 2, 3]);
        assert_eq!(format!("{}", poly), "1*x^2 + 2*x + 3");
        poly = p(vec![1, -3, -75, 475, -750]);
        assert_eq!(
            format!("{}", poly),
            "1*x^4 + -3*x^3 + -75*x^2 + 475*x + -750"
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("1 -5 6".parse::<Polynomial<i64>>(), Ok(p(vec![1, -5, 6])));
        assert_eq!("".parse::<Polynomial<i64>>(), Ok(p(vec![])));
        assert_eq!(
            "0 1".parse::<Polynomial<i64>>(),
            Err(InvalidPolynomial::ZeroLeadingCoefficient)
        );
        assert_eq!(
            Polynomial::<BigInt>::parse_coefficients(&["1", "2.5"]),
            Err(InvalidPolynomial::MalformedCoefficient {
                index: 1,
                token: "2.5".into()
            })
        );
        assert_eq!(
            Polynomial::<BigInt>::parse_coefficients(&["-12345678901234567890123", "7"])
                .map(|poly| poly.to_string()),
            Ok("-12345678901234567890123*x + 7".to_string())
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            InvalidPolynomial::ZeroLeadingCoefficient.to_string(),
            "invalid polynomial: leading coefficient is zero"
        );
        let err: DeflateError<i32> = NotARoot { remainder: 3 }.into();
        assert_eq!(err.to_string(), "value is not a root: remainder is 3");
        let err = std::io::Error::from(InvalidPolynomial::ConstantPolynomial);
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
