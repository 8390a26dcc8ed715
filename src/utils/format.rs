pub const CURRENCY_GLYPH: &str = "₦";

/// Groups the integer digits in threes with `,`, e.g. `1234567` -> `1,234,567`.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_currency(amount: i64) -> String {
    format!("{}{}", CURRENCY_GLYPH, group_thousands(amount))
}

// Date strings read like "Mon, Jan 01 2024".
#[cfg(all(feature = "web"))]
pub fn format_order_date(rfc3339: &str) -> String {
    use js_sys::Date;
    let d = Date::new(&wasm_bindgen::JsValue::from_str(rfc3339));
    if d.get_time().is_nan() {
        return rfc3339.to_string();
    }
    String::from(d.to_date_string()).replacen(' ', ", ", 1)
}

#[cfg(not(all(feature = "web")))]
pub fn format_order_date(rfc3339: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(rfc3339) {
        Ok(dt) => dt
            .format("%a %b %d %Y")
            .to_string()
            .replacen(' ', ", ", 1),
        Err(_) => rfc3339.to_string(),
    }
}
