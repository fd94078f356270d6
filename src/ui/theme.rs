use ratatui::style::{Color, Modifier, Style};

use crate::attestation::ScoreTier;

pub const PRIMARY: Color = Color::Cyan;
pub const ACCENT: Color = Color::Green;
pub const WARNING: Color = Color::Yellow;
pub const ERROR: Color = Color::Red;
pub const DIM: Color = Color::DarkGray;
pub const TEXT: Color = Color::White;

fn fg(color: Color) -> Style {
    Style::default().fg(color)
}

fn bold(color: Color) -> Style {
    fg(color).add_modifier(Modifier::BOLD)
}

pub fn title_style() -> Style {
    bold(PRIMARY)
}

pub fn heading_style() -> Style {
    bold(TEXT)
}

pub fn selected_style() -> Style {
    bold(PRIMARY)
}

pub fn unselected_style() -> Style {
    fg(DIM)
}

pub fn success_style() -> Style {
    fg(ACCENT)
}

pub fn error_style() -> Style {
    fg(ERROR)
}

pub fn warning_style() -> Style {
    fg(WARNING)
}

pub fn dim_style() -> Style {
    fg(DIM)
}

pub fn input_style() -> Style {
    fg(TEXT)
}

pub fn cursor_style() -> Style {
    fg(Color::Black).bg(TEXT)
}

pub fn step_done_style() -> Style {
    fg(ACCENT)
}

pub fn step_current_style() -> Style {
    bold(PRIMARY)
}

pub fn step_pending_style() -> Style {
    fg(DIM)
}

pub fn keybinding_style() -> Style {
    fg(DIM)
}

/// Score-tier colors for the review bars: cyan for high, green for mid,
/// amber for low, mirroring the 85/70 thresholds.
pub fn score_style(tier: ScoreTier) -> Style {
    match tier {
        ScoreTier::High => bold(PRIMARY),
        ScoreTier::Medium => bold(ACCENT),
        ScoreTier::Low => bold(WARNING),
    }
}
