use crate::complex::Complex;
use crate::mode::CmpMode;

/// Applies the native operator for `mode` to `a` and `b`.
///
/// Floats keep IEEE behavior: a NaN operand makes every mode false.
pub fn cmp<T>(a: &T, b: &T, mode: CmpMode) -> bool
where
    T: PartialOrd + ?Sized,
{
    match mode {
        CmpMode::Less => a < b,
        CmpMode::LessOrEqual => a <= b,
        CmpMode::Equal => a == b,
        CmpMode::Greater => a > b,
        CmpMode::GreaterOrEqual => a >= b,
    }
}

/// Like [`cmp`], with the mode given as its integer code. Unknown codes yield `false`.
pub fn cmp_code<T>(a: &T, b: &T, code: i32) -> bool
where
    T: PartialOrd + ?Sized,
{
    CmpMode::from_code(code).is_some_and(|mode| cmp(a, b, mode))
}

/// Orders complex numbers by real part, then by imaginary part.
pub fn cmp_complex<T>(a: &Complex<T>, b: &Complex<T>, mode: CmpMode) -> bool
where
    T: PartialOrd,
{
    let equal = a.re == b.re && a.im == b.im;
    let less = a.re < b.re || (a.re == b.re && a.im < b.im);
    let greater = a.re > b.re || (a.re == b.re && a.im > b.im);
    match mode {
        CmpMode::Less => less,
        CmpMode::LessOrEqual => less || equal,
        CmpMode::Equal => equal,
        CmpMode::Greater => greater,
        CmpMode::GreaterOrEqual => greater || equal,
    }
}
