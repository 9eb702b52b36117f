//! Numeric code decoders
//!
//! Small, independent pure functions for the encoded numeric formats that
//! appear inside MPNs: EIA capacitance codes, R-notation, electrolytic
//! voltage characters, frequency tokens, and imperial case-size codes.
//! Handlers compose these; none of them is folded into the regex layer.
//!
//! All decoders return `Option` - an unparseable token is "absent", never an
//! error.

/// Decode a 3-digit EIA code into its numeric value: two significant digits
/// times ten to the third digit (`"475"` -> 4_700_000.0).
///
/// The unit depends on the component family (pF for ceramics, uF numerators
/// for electrolytic ordering codes); callers attach it.
pub fn eia_code(code: &str) -> Option<f64> {
    let code = code.trim();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let digits: Vec<u32> = code.chars().filter_map(|c| c.to_digit(10)).collect();
    let mantissa = (digits[0] * 10 + digits[1]) as f64;
    let exponent = digits[2] as i32;
    Some(mantissa * 10f64.powi(exponent))
}

/// Decode R-notation, where `R` marks the decimal point: `"4R7"` -> 4.7,
/// `"R47"` -> 0.47, `"47R"` -> 47.0.
pub fn r_notation(code: &str) -> Option<f64> {
    let code = code.trim().to_ascii_uppercase();
    let r_count = code.chars().filter(|&c| c == 'R').count();
    if r_count != 1 || code.len() < 2 {
        return None;
    }
    let replaced = code.replace('R', ".");
    // ".47" and "47." both parse; "R" alone does not reach here.
    let rest_ok = replaced
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.');
    if !rest_ok {
        return None;
    }
    replaced.parse::<f64>().ok()
}

/// EIA voltage characters used in electrolytic capacitor ordering codes.
const VOLTAGE_CODES: &[(&str, f64)] = &[
    ("0E", 2.5),
    ("0G", 4.0),
    ("0J", 6.3),
    ("1A", 10.0),
    ("1C", 16.0),
    ("1E", 25.0),
    ("1V", 35.0),
    ("1H", 50.0),
    ("1J", 63.0),
    ("1K", 80.0),
    ("2A", 100.0),
    ("2C", 160.0),
    ("2D", 200.0),
    ("2E", 250.0),
    ("2G", 400.0),
    ("2H", 500.0),
];

/// Decode a two-character EIA voltage code (`"1H"` -> 50.0 volts).
pub fn voltage_code(code: &str) -> Option<f64> {
    let code = code.trim().to_ascii_uppercase();
    VOLTAGE_CODES
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, volts)| *volts)
}

/// Decode a frequency token with an HZ/KHZ/MHZ/GHZ suffix into Hertz
/// (`"12.000MHZ"` -> 12_000_000.0). Case-insensitive.
pub fn frequency_hz(token: &str) -> Option<f64> {
    let token = token.trim().to_ascii_uppercase();

    let (number, multiplier) = if let Some(stripped) = token.strip_suffix("GHZ") {
        (stripped, 1e9)
    } else if let Some(stripped) = token.strip_suffix("MHZ") {
        (stripped, 1e6)
    } else if let Some(stripped) = token.strip_suffix("KHZ") {
        (stripped, 1e3)
    } else if let Some(stripped) = token.strip_suffix("HZ") {
        (stripped, 1.0)
    } else {
        return None;
    };

    let value = number.trim().parse::<f64>().ok()?;
    if value <= 0.0 {
        return None;
    }
    Some(value * multiplier)
}

/// Decode a 4-digit imperial case-size code into (length, width) in mm
/// (`"0805"` -> (2.03, 1.27)).
pub fn eia_case_code(code: &str) -> Option<(f64, f64)> {
    let code = code.trim();
    if code.len() != 4 || !code.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let length_in = code[0..2].parse::<f64>().ok()? / 100.0;
    let width_in = code[2..4].parse::<f64>().ok()? / 100.0;
    if length_in == 0.0 || width_in == 0.0 {
        return None;
    }
    // Hundredths of an inch to mm, rounded to hundredths of a mm.
    let to_mm = |inches: f64| (inches * 25.4 * 100.0).round() / 100.0;
    Some((to_mm(length_in), to_mm(width_in)))
}
