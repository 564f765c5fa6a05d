//! Text for file-level complexity indicators.
//!
//! Used for the status bar entry, the top-of-file lens and the short badge
//! shown next to a file name.

/// Unit suffix of complexity totals.
pub const COMPLEXITY_UNIT: &str = "Ω";

/// `12.35Ω`
pub fn format_total_complexity(total: f64) -> String {
    format!("{:.2}{}", total, COMPLEXITY_UNIT)
}

/// Title of the top-of-file lens, `File Complexity: 12.35Ω`.
///
/// `None` for a zero total, which is not worth a lens.
pub fn lens_title(total: f64) -> Option<String> {
    if total == 0.0 {
        None
    } else {
        Some(format!("File Complexity: {}", format_total_complexity(total)))
    }
}

/// `Total file complexity: 12.35Ω (main.rs)`
pub fn status_tooltip(total: f64, file_name: &str) -> String {
    format!(
        "Total file complexity: {} ({})",
        format_total_complexity(total),
        file_name
    )
}

/// Short badge for file explorers: `3m`, `12k`, `482`, `7`.
pub fn complexity_badge(total: f64) -> String {
    if total >= 1_000_000.0 {
        format!("{}m", (total / 1_000_000.0).round())
    } else if total >= 1_000.0 {
        format!("{}k", (total / 1_000.0).round())
    } else {
        format!("{:.0}", total.round())
    }
}
