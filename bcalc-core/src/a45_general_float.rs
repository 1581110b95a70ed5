use std::fmt;

/// Significant digits shown.
const PRECISION: usize = 6;

/// Displays a number in the compact "general" style of C's `%g`:
/// six significant digits, no trailing zeros, and scientific notation only
/// for very large or very small magnitudes.
#[derive(Clone, Copy, Debug)]
pub struct GeneralFloat(pub f64);

impl fmt::Display for GeneralFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if x.is_nan() {
            return write!(f, "nan");
        }
        if x.is_infinite() {
            return write!(f, "{}", if x < 0.0 { "-inf" } else { "inf" });
        }
        if x == 0.0 {
            return write!(f, "{}", if x.is_sign_negative() { "-0" } else { "0" });
        }
        // The exponent after rounding to PRECISION digits picks the style.
        let sci = format!("{:.*e}", PRECISION - 1, x);
        let Some((mantissa, exponent)) = sci.split_once('e') else {
            return Err(fmt::Error);
        };
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
        if exponent < -4 || exponent >= PRECISION as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{}{:02}",
                trim_zeros(mantissa),
                sign,
                exponent.unsigned_abs()
            )
        } else {
            let decimals = (PRECISION as i32 - 1 - exponent) as usize;
            write!(f, "{}", trim_zeros(&format!("{:.*}", decimals, x)))
        }
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
