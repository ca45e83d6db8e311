//! Display helpers shared by cards and tables.

use chrono::NaiveTime;

/// `14:05` becomes `2:05 PM`. Unparsable input is returned unchanged.
pub fn time_12h(time: &str) -> String {
    let trimmed = time.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map(|t| t.format("%-I:%M %p").to_string())
        .unwrap_or_else(|_| trimmed.to_string())
}

pub fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// First two perks plus a `+N` marker for the rest.
pub fn perk_preview(perks: &[String]) -> (Vec<&str>, Option<String>) {
    let shown = perks.iter().take(2).map(String::as_str).collect();
    let hidden = perks.len().saturating_sub(2);

    (shown, (hidden > 0).then(|| format!("+{hidden}")))
}

/// Initial used by the avatar placeholder.
pub fn initial(name: Option<&str>, email: &str) -> String {
    name.and_then(|n| n.trim().chars().next())
        .or_else(|| email.chars().next())
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}
