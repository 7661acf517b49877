//! Literal forms of numeric scalars.
//!
//! Floats use the shortest representation that parses back to the same value
//! at the float's own width, laid out like a `%g` conversion: plain decimal
//! notation while the decimal exponent is in `-4..6`, scientific notation
//! with a signed, at least two-digit exponent otherwise.

/// Formats an `f64` in shortest general form.
#[must_use]
pub fn format_f64(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    general(&format!("{:e}", v))
}

/// Formats an `f32` in shortest general form, at 32-bit precision.
#[must_use]
pub fn format_f32(v: f32) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    general(&format!("{:e}", v))
}

/// Re-lays a shortest `{:e}` rendering (`-1.25e-7`) in general form.
fn general(sci: &str) -> String {
    let (negative, sci) = match sci.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, sci),
    };
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();

    let digit_at = |i: i32| -> char {
        usize::try_from(i)
            .ok()
            .and_then(|i| digits.get(i))
            .map_or('0', |&d| char::from(d))
    };

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }

    if !(-4..6).contains(&exponent) {
        out.push(digit_at(0));
        if digits.len() > 1 {
            out.push('.');
            out.extend(digits[1..].iter().map(|&d| char::from(d)));
        }
        out.push('e');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&format!("{:02}", exponent.unsigned_abs()));
        return out;
    }

    // Position of the decimal point relative to the first digit.
    let point = exponent + 1;
    if point > 0 {
        for i in 0..point {
            out.push(digit_at(i));
        }
    } else {
        out.push('0');
    }

    let fraction = digits.len() as i32 - point;
    if fraction > 0 {
        out.push('.');
        for i in 0..fraction {
            out.push(digit_at(point + i));
        }
    }
    out
}
