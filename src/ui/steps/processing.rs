use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use super::super::theme;
use super::super::widgets::{Spinner, SpinnerWidget};

/// Rotation cadence in event-loop ticks; 15 × 100ms = 1.5s per message.
const MESSAGE_TICKS: usize = 15;

pub const STATUS_MESSAGES: [&str; 5] = [
    "Establishing secure connection to oracle...",
    "Encrypting and transmitting your evidence...",
    "Running multi-model LLM analysis...",
    "Aggregating scores and generating proofs...",
    "Finalizing your cryptographic attestation...",
];

/// Cosmetic progress display while the one oracle call is in flight: a
/// spinner and a rotating status line. Has no effect on the outcome.
pub struct ProcessingStep<'a> {
    pub spinner: &'a Spinner,
}

impl Widget for ProcessingStep<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 4 {
            return;
        }

        let y = area.y + area.height / 3;
        let message =
            STATUS_MESSAGES[self.spinner.phase(MESSAGE_TICKS, STATUS_MESSAGES.len())];

        SpinnerWidget::new(self.spinner, "Processing Securely")
            .render(Rect::new(area.x, y, area.width, 1), buf);
        Line::from(Span::styled(format!("    {message}"), theme::dim_style()))
            .render(Rect::new(area.x, y + 2, area.width, 1), buf);
    }
}
