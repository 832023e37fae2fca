//! Bar and size formatting for telemetry and listings.

use crate::screen::{Span, Style, Tone};

/// Default bar width in cells.
pub const BAR_WIDTH: usize = 15;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Tone for a utilization percentage: green, yellow above 60, red above 85.
pub fn load_tone(percent: f64) -> Tone {
    if percent > 85.0 {
        Tone::Red
    } else if percent > 60.0 {
        Tone::Yellow
    } else {
        Tone::Green
    }
}

/// Renders `percent` (clamped to 0..=100) as a `width`-cell bar.
pub fn bar(percent: f64, width: usize) -> Span {
    let percent = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    };
    let filled = ((percent / 100.0) * width as f64).floor() as usize;
    let filled = filled.min(width);
    let text = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
    Span::styled(text, Style::new().fg(load_tone(percent)))
}

/// Coarse human-readable size: bytes, then KB and MB with one decimal.
pub fn format_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_fills_proportionally() {
        let span = bar(40.0, 15);
        assert_eq!(span.text, format!("{}{}", "█".repeat(6), "░".repeat(9)));
        assert_eq!(span.style.fg, Some(Tone::Green));
    }

    #[test]
    fn test_bar_clamps_out_of_range() {
        assert_eq!(bar(140.0, 10).text, "█".repeat(10));
        assert_eq!(bar(-5.0, 10).text, "░".repeat(10));
        assert_eq!(bar(f64::NAN, 4).text, "░".repeat(4));
    }

    #[test]
    fn test_load_tone_thresholds() {
        assert_eq!(load_tone(60.0), Tone::Green);
        assert_eq!(load_tone(60.5), Tone::Yellow);
        assert_eq!(load_tone(85.0), Tone::Yellow);
        assert_eq!(load_tone(85.1), Tone::Red);
    }

    #[test]
    fn test_format_size_classes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1024 * 1024 - 1), "1024.0 KB");
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MB");
    }
}
