//! Formatting helpers shared by the terminal renderers

use crate::models::Money;

/// Format a percentage with precision that suits its size
pub fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Horizontal bar scaled against `max`
pub fn format_bar(value: Money, max: Money, width: usize) -> String {
    if !max.is_positive() || !value.is_positive() {
        return "░".repeat(width);
    }

    let filled = ((value.cents() as f64 / max.cents() as f64) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Section heading with an underline
pub fn heading(title: &str, width: usize) -> String {
    format!("{}\n{}\n", title, "─".repeat(width))
}

/// Truncate to at most `max_chars` characters, marking the cut with "..."
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        ".".repeat(max_chars)
    } else {
        let kept: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", kept)
    }
}
