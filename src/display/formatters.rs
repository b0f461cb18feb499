// Display formatting utilities

use crate::colour::HexColour;
use crate::config::PatternConfig;
use crate::renderer::RenderReport;

/// Grid shape as shown in headers, e.g. `2x4 (8 squares)`
pub fn format_shape(rows: usize, cols: usize) -> String {
    format!("{}x{} ({} squares)", rows, cols, rows * cols)
}

/// One-line config summary
pub fn format_config_summary(config: &PatternConfig) -> String {
    let colours: Vec<&str> = config.colours.iter().map(HexColour::as_str).collect();
    format!(
        "Canvas {}x{} px, squares {} px, speed {}, colours [{}]",
        config.width,
        config.height,
        config.side_length,
        config.speed,
        colours.join(", ")
    )
}

pub fn format_render_report(report: &RenderReport) -> String {
    format!(
        "Drew {} squares over {} rows, held for {}s",
        report.squares,
        report.row_advances,
        report.hold.as_secs()
    )
}

/// Percentage bar for the colour histogram
pub fn format_share_bar(count: usize, total: usize, width: usize) -> String {
    if total == 0 {
        return " ".repeat(width);
    }
    let filled = (count * width + total / 2) / total;
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled.min(width)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_shape() {
        assert_eq!(format_shape(2, 4), "2x4 (8 squares)");
        assert_eq!(format_shape(0, 9), "0x9 (0 squares)");
    }

    #[test]
    fn test_format_config_summary() {
        let summary = format_config_summary(&PatternConfig::default());
        assert_eq!(
            summary,
            "Canvas 400x400 px, squares 50 px, speed 0, colours [#ff0000, #00ff00, #0000ff, #ffff00]"
        );
    }

    #[test]
    fn test_share_bar() {
        assert_eq!(format_share_bar(5, 10, 10), "#####.....");
        assert_eq!(format_share_bar(10, 10, 4), "####");
        assert_eq!(format_share_bar(0, 0, 3), "   ");
    }
}
