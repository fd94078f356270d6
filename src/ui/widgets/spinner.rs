use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use super::super::theme;

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// An animated spinner, ticked on each idle pass of the event loop.
#[derive(Debug, Clone)]
pub struct Spinner {
    pub tick: usize,
}

impl Spinner {
    pub fn new() -> Self {
        Self { tick: 0 }
    }

    pub fn advance(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn frame(&self) -> &'static str {
        FRAMES[self.tick % FRAMES.len()]
    }

    /// Index into a rotating message list, changing every `every` ticks.
    /// At the 100ms poll cadence, `every = 15` is a 1.5s rotation.
    pub fn phase(&self, every: usize, len: usize) -> usize {
        if len == 0 { 0 } else { (self.tick / every) % len }
    }
}

/// Renders a spinner with a message.
pub struct SpinnerWidget<'a> {
    pub spinner: &'a Spinner,
    pub message: &'a str,
}

impl<'a> SpinnerWidget<'a> {
    pub fn new(spinner: &'a Spinner, message: &'a str) -> Self {
        Self { spinner, message }
    }
}

impl Widget for SpinnerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 6 {
            return;
        }

        let line = Line::from(vec![
            Span::styled(format!("  {} ", self.spinner.frame()), theme::title_style()),
            Span::styled(self.message, theme::input_style()),
        ]);
        line.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_rotates_and_wraps() {
        let mut spinner = Spinner::new();
        assert_eq!(spinner.phase(15, 5), 0);
        for _ in 0..15 {
            spinner.advance();
        }
        assert_eq!(spinner.phase(15, 5), 1);
        spinner.tick = 15 * 5;
        assert_eq!(spinner.phase(15, 5), 0);
    }

    #[test]
    fn phase_handles_empty_list() {
        let spinner = Spinner::new();
        assert_eq!(spinner.phase(15, 0), 0);
    }
}
