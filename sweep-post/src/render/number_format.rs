/// formats `value` with `significant` significant digits the way printf's `%g`
/// does: fixed notation for moderate exponents, scientific otherwise, trailing
/// zeros removed. `format_general(0.0567, 2)` is `"0.057"`, `format_general(123.0, 2)`
/// is `"1.2e+02"`.
pub fn format_general(value: f64, significant: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    if value == 0.0 {
        return String::from("0");
    }
    let significant = significant.max(1);
    // exponent after rounding, so 9.96 at 2 digits becomes 10 rather than 9.96
    let rounded = format!("{:.*e}", significant - 1, value);
    let (mantissa, exponent) = match rounded.split_once('e') {
        Some((m, e)) => (m.to_string(), e.parse::<i32>().unwrap_or(0)),
        None => (rounded.clone(), 0),
    };
    if exponent < -4 || exponent >= significant as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_zeros(&mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (significant as i32 - 1 - exponent).max(0) as usize;
        trim_zeros(&format!("{value:.decimals$}"))
    }
}

fn trim_zeros(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}
