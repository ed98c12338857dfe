//! Delay argument parsing: plain seconds or a number with a unit suffix

/// Parse `2`, `0.5s`, `2ms`, `150us`, `800ns` into seconds
pub fn parse_seconds(text: &str) -> Result<f64, String> {
    let text = text.trim();
    let split = text.trim_end_matches(|c: char| c.is_ascii_alphabetic()).len();
    let (number, unit) = text.split_at(split);

    let scale = match unit {
        "" | "s" => 1.0,
        "ms" => 1e-3,
        "us" => 1e-6,
        "ns" => 1e-9,
        other => return Err(format!("unknown unit '{}' (expected s, ms, us or ns)", other)),
    };

    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| format!("invalid number '{}'", number.trim()))?;

    Ok(value * scale)
}
