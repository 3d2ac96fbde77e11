//! Money rounding and display
//!
//! Amounts are carried as full-precision `f64` and only rounded when reported.

/// Round to 2 decimal places, halves away from zero. Never returns `-0.0`.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0 + 0.0
}

/// Format as US dollars with thousands separators, e.g. `-$1,234.50`
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{:02}", sign, grouped, cents % 100)
}
