use std::fmt;
use std::str::FromStr;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::errors::ParseComplexError;

/// A complex number with real part `re` and imaginary part `im`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

impl<T> Complex<T> {
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl From<Complex32> for Complex64 {
    fn from(c: Complex32) -> Self {
        Complex::new(f64::from(c.re), f64::from(c.im))
    }
}

impl<T: Float + fmt::Display> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_sign_negative() && !self.im.is_nan() {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

/// Accepts `a+bi`, `a-bi`, `bi`, `i`, `-i` and a bare real `a`.
/// Whitespace anywhere in the literal is ignored.
impl<T: Float + FromStr> FromStr for Complex<T> {
    type Err = ParseComplexError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let err = || ParseComplexError(src.to_string());
        let s: String = src.chars().filter(|c| !c.is_whitespace()).collect();
        if s.is_empty() {
            return Err(err());
        }

        let Some(body) = s.strip_suffix('i') else {
            let re = s.parse::<T>().map_err(|_| err())?;
            return Ok(Complex::new(re, T::zero()));
        };

        // Sign that starts the imaginary part; an exponent sign (`1e-3`) does not count.
        let split = body
            .char_indices()
            .rev()
            .filter(|&(i, c)| (c == '+' || c == '-') && i > 0)
            .find(|&(i, _)| !body[..i].ends_with(|c: char| c == 'e' || c == 'E'))
            .map(|(i, _)| i);
        let (re_part, im_part) = match split {
            Some(i) => body.split_at(i),
            None => ("", body),
        };

        let re = if re_part.is_empty() {
            T::zero()
        } else {
            re_part.parse::<T>().map_err(|_| err())?
        };
        let im = match im_part {
            "" | "+" => T::one(),
            "-" => -T::one(),
            digits => digits.parse::<T>().map_err(|_| err())?,
        };
        Ok(Complex::new(re, im))
    }
}
