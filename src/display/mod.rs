// Display module - text previews of configs and generated patterns
pub mod formatters;

pub use formatters::{format_config_summary, format_render_report, format_shape, format_share_bar};

use crate::config::PatternConfig;
use crate::grid::Pattern;
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use std::io::{self, Write};

const PREVIEW_MAX_COLS: usize = 40;
const PREVIEW_MAX_ROWS: usize = 20;
const SHARE_BAR_WIDTH: usize = 20;

/// Print a config summary with a swatch per palette colour
pub fn write_config_summary<W: Write>(out: &mut W, config: &PatternConfig) -> io::Result<()> {
    queue!(out, Print(format_config_summary(config)), Print("\n"))?;
    for colour in &config.colours {
        let (r, g, b) = colour.rgb();
        queue!(
            out,
            Print("  "),
            SetBackgroundColor(Color::Rgb { r, g, b }),
            Print("    "),
            ResetColor,
            Print(format!(" {}\n", colour))
        )?;
    }
    out.flush()
}

/// Print the pattern as coloured cells with row/column headers, clipped to a
/// preview size, followed by a colour histogram
pub fn write_pattern_preview<W: Write>(
    out: &mut W,
    pattern: &Pattern,
    config: &PatternConfig,
) -> io::Result<()> {
    queue!(
        out,
        Print(format!(
            "Pattern {}\n",
            format_shape(pattern.rows(), pattern.cols())
        ))
    )?;

    if pattern.is_empty() {
        queue!(out, Print("  (nothing to draw)\n"))?;
        return out.flush();
    }

    // Column headers
    queue!(out, Print("    "))?;
    for col in 0..pattern.cols().min(PREVIEW_MAX_COLS) {
        queue!(out, Print(format!("{:2}", col % 100)))?;
    }
    queue!(out, Print("\n"))?;

    for (row, cells) in pattern.iter_rows().take(PREVIEW_MAX_ROWS).enumerate() {
        queue!(out, Print(format!("{:2}: ", row)))?;
        for colour in cells.iter().take(PREVIEW_MAX_COLS) {
            let (r, g, b) = colour.rgb();
            queue!(out, SetBackgroundColor(Color::Rgb { r, g, b }), Print("  "))?;
        }
        queue!(out, ResetColor, Print("\n"))?;
    }

    if pattern.rows() > PREVIEW_MAX_ROWS || pattern.cols() > PREVIEW_MAX_COLS {
        queue!(
            out,
            SetForegroundColor(Color::DarkGrey),
            Print(format!(
                "  (preview clipped to {}x{})\n",
                PREVIEW_MAX_ROWS, PREVIEW_MAX_COLS
            )),
            ResetColor
        )?;
    }

    let counts = pattern.colour_counts();
    let total = pattern.cell_count();
    for colour in &config.colours {
        let count = counts.get(colour).copied().unwrap_or(0);
        queue!(
            out,
            Print(format!(
                "  {:<8} {} {}\n",
                colour.as_str(),
                format_share_bar(count, total, SHARE_BAR_WIDTH),
                count
            ))
        )?;
    }
    out.flush()
}

pub fn print_config_summary(config: &PatternConfig) -> io::Result<()> {
    write_config_summary(&mut io::stdout(), config)
}

pub fn print_pattern_preview(pattern: &Pattern, config: &PatternConfig) -> io::Result<()> {
    write_pattern_preview(&mut io::stdout(), pattern, config)
}
