//! Display formatting for computed results.
//!
//! A result is first rounded to a fixed number of fractional digits and
//! then rendered with the fewest digits that read back as the same value.
//! The rendering follows the conventions of a browser number display:
//! `NaN`, `Infinity`, no `-0`, and exponential notation only for very
//! large or very small magnitudes (`1e-7`, `1.5e+21`).

/// Fractional digits kept when a result is displayed.
pub const DEFAULT_PRECISION: u32 = 7;

/// Upper bound for a configurable precision; beyond this an `f64` has no
/// meaningful fractional digits left.
pub const MAX_PRECISION: u32 = 15;

/// Magnitude from which results are displayed without rounding.
const FIXED_LIMIT: f64 = 1e21;

/// Fractional digits of a mantissa that spell out any `f64` exactly.
const EXACT_DIGITS: usize = 767;

/// Round `value` to `precision` fractional digits and render it.
///
/// Insignificant trailing zeros disappear, so `0.1 + 0.2` shows as `0.3`
/// and `6 / 2` as `3`.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::format_result;
///
/// assert_eq!(format_result(0.1 + 0.2, 7), "0.3");
/// assert_eq!(format_result(2.0 / 3.0, 7), "0.6666667");
/// assert_eq!(format_result(5.0 / 0.0, 7), "Infinity");
/// ```
pub fn format_result(value: f64, precision: u32) -> String {
    if !value.is_finite() || value.abs() >= FIXED_LIMIT {
        return number_to_string(value);
    }

    let fixed = to_fixed(value, precision);
    let rounded = fixed.parse::<f64>().unwrap_or(value);
    number_to_string(rounded)
}

/// Parse display text as an operand. Text that is not a number yields NaN.
pub fn parse_operand(display: &str) -> f64 {
    display.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Render `value` with the shortest digits that round-trip.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{value}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{value}");
    };

    let shortest: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = nearest_shortest(value.abs(), shortest, exponent);
    let k = digits.len() as i32;
    // decimal point sits after the first `n` digits
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let exp_sign = if n - 1 >= 0 { '+' } else { '-' };
        let exp = (n - 1).abs();
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{exp_sign}{exp}")
        } else {
            format!("{lead}.{rest}e{exp_sign}{exp}")
        }
    };

    format!("{sign}{body}")
}

/// Among the shortest digit strings that read back as `magnitude`, pick the
/// one nearest its exact binary value, with an even last digit on a tie.
///
/// `shortest` holds the significant digits of a shortest rendering whose
/// leading digit sits at `10^exponent`.
fn nearest_shortest(magnitude: f64, shortest: String, exponent: i32) -> String {
    let exact = format!("{:.*e}", EXACT_DIGITS, magnitude);
    let Some((mantissa, exact_exponent)) = exact.split_once('e') else {
        return shortest;
    };
    let Ok(exact_exponent) = exact_exponent.parse::<i32>() else {
        return shortest;
    };
    // the shortest digits may have carried into the next power of ten
    let shift = exponent - exact_exponent;
    if !(0..=1).contains(&shift) {
        return shortest;
    }

    let aligned: Vec<u8> = std::iter::repeat(b'0')
        .take(shift as usize)
        .chain(mantissa.bytes().filter(u8::is_ascii_digit))
        .collect();
    let k = shortest.len();
    if aligned.len() <= k {
        return shortest;
    }
    let (head, tail) = aligned.split_at(k);

    let round_up = match tail[0] {
        b'6'..=b'9' => true,
        b'5' => tail[1..].iter().any(|&d| d != b'0') || (head[k - 1] - b'0') % 2 == 1,
        _ => false,
    };
    let mut nearest = head.to_vec();
    if round_up && !increment(&mut nearest) {
        return shortest;
    }
    if nearest[0] == b'0' {
        return shortest;
    }
    let Ok(nearest) = String::from_utf8(nearest) else {
        return shortest;
    };
    if nearest == shortest {
        return shortest;
    }

    let scale = exponent - (k as i32 - 1);
    match format!("{nearest}e{scale}").parse::<f64>() {
        Ok(read_back) if read_back == magnitude => nearest.trim_end_matches('0').to_string(),
        _ => shortest,
    }
}

/// Add one to a string of decimal digits. Returns false if it carries out.
fn increment(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return true;
        }
    }
    false
}

/// Fixed-point text with exactly `precision` fractional digits.
///
/// Exact binary ties round away from zero.
fn to_fixed(value: f64, precision: u32) -> String {
    let magnitude = value.abs();
    let digits = precision as usize;

    let body = if is_exact_tie(magnitude, precision) {
        round_half_up(&format!("{:.*}", digits + 1, magnitude))
    } else {
        format!("{:.*}", digits, magnitude)
    };

    if value < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

/// A magnitude lies exactly halfway between two `precision`-digit decimals
/// iff it is an odd multiple of `2^-(precision + 1)`.
fn is_exact_tie(magnitude: f64, precision: u32) -> bool {
    let scaled = magnitude * 2f64.powi(precision as i32 + 1);
    scaled.is_finite() && scaled.fract() == 0.0 && scaled % 2.0 == 1.0
}

/// Drop the trailing `5` of an exact decimal and carry one into the
/// remaining last digit.
fn round_half_up(exact: &str) -> String {
    let mut chars: Vec<char> = exact.chars().collect();
    chars.pop();
    if chars.last() == Some(&'.') {
        chars.pop();
    }

    let mut i = chars.len();
    loop {
        if i == 0 {
            chars.insert(0, '1');
            break;
        }
        i -= 1;
        match chars[i] {
            '.' => continue,
            '9' => chars[i] = '0',
            d => {
                chars[i] = char::from(d as u8 + 1);
                break;
            }
        }
    }

    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_lose_fraction() {
        assert_eq!(format_result(3.0, DEFAULT_PRECISION), "3");
        assert_eq!(format_result(-12.0, DEFAULT_PRECISION), "-12");
        assert_eq!(format_result(1e20, DEFAULT_PRECISION), "100000000000000000000");
    }

    #[test]
    fn float_noise_is_rounded_away() {
        assert_eq!(format_result(0.1 + 0.2, DEFAULT_PRECISION), "0.3");
        assert_eq!(format_result(1.1 * 1.1, DEFAULT_PRECISION), "1.21");
        assert_eq!(format_result(0.3 - 0.1, DEFAULT_PRECISION), "0.2");
    }

    #[test]
    fn long_fractions_keep_seven_digits() {
        assert_eq!(format_result(1.0 / 3.0, DEFAULT_PRECISION), "0.3333333");
        assert_eq!(format_result(-2.0 / 3.0, DEFAULT_PRECISION), "-0.6666667");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        // 2^-8 = 0.00390625 sits halfway between 0.0039062 and 0.0039063
        assert_eq!(format_result(0.00390625, DEFAULT_PRECISION), "0.0039063");
        assert_eq!(format_result(-0.00390625, DEFAULT_PRECISION), "-0.0039063");
        assert_eq!(format_result(2.5, 0), "3");
        assert_eq!(format_result(0.5, 0), "1");
        assert_eq!(format_result(9.5, 0), "10");
    }

    #[test]
    fn tiny_values_collapse_to_zero() {
        assert_eq!(format_result(0.00000001, DEFAULT_PRECISION), "0");
        assert_eq!(format_result(-0.00000001, DEFAULT_PRECISION), "0");
        assert_eq!(format_result(-0.0, DEFAULT_PRECISION), "0");
    }

    #[test]
    fn small_results_use_exponential_notation() {
        assert_eq!(format_result(0.0000001, DEFAULT_PRECISION), "1e-7");
        assert_eq!(format_result(0.0000015, DEFAULT_PRECISION), "0.0000015");
    }

    #[test]
    fn huge_results_skip_rounding() {
        assert_eq!(format_result(1e21, DEFAULT_PRECISION), "1e+21");
        assert_eq!(format_result(-1.5e22, DEFAULT_PRECISION), "-1.5e+22");
    }

    #[test]
    fn non_finite_values_render_by_name() {
        assert_eq!(format_result(f64::INFINITY, DEFAULT_PRECISION), "Infinity");
        assert_eq!(format_result(f64::NEG_INFINITY, DEFAULT_PRECISION), "-Infinity");
        assert_eq!(format_result(f64::NAN, DEFAULT_PRECISION), "NaN");
    }

    #[test]
    fn number_to_string_picks_notation_by_exponent() {
        assert_eq!(number_to_string(123.456), "123.456");
        assert_eq!(number_to_string(0.000001), "0.000001");
        assert_eq!(number_to_string(1.25e-7), "1.25e-7");
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(123e18), "123000000000000000000");
    }

    #[test]
    fn equally_short_renderings_prefer_even_last_digit() {
        // each value lies exactly halfway between two shortest renderings
        assert_eq!(number_to_string(1143989562988.28125), "1143989562988.2812");
        assert_eq!(number_to_string(-22456741333007.8125), "-22456741333007.812");
        assert_eq!(number_to_string(873078107833862.25), "873078107833862.2");
        assert_eq!(
            format_result(1143989562988.28125, DEFAULT_PRECISION),
            "1143989562988.2812"
        );
    }

    #[test]
    fn nearest_shortest_keeps_unambiguous_digits() {
        assert_eq!(nearest_shortest(0.3, "3".to_string(), -1), "3");
        assert_eq!(nearest_shortest(1e23, "1".to_string(), 23), "1");
        assert_eq!(nearest_shortest(123.456, "123456".to_string(), 2), "123456");
    }

    #[test]
    fn increment_carries_through_nines() {
        let mut digits = b"129".to_vec();
        assert!(increment(&mut digits));
        assert_eq!(digits, b"130");

        let mut nines = b"99".to_vec();
        assert!(!increment(&mut nines));
    }

    #[test]
    fn parse_operand_reads_partial_numerals() {
        assert_eq!(parse_operand("0."), 0.0);
        assert_eq!(parse_operand("12.5"), 12.5);
        assert_eq!(parse_operand("1e-7"), 1e-7);
        assert_eq!(parse_operand("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_operand("NaN").is_nan());
        assert!(parse_operand("abc").is_nan());
    }
}
