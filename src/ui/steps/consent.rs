use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::evidence::EvidenceKind;

use super::super::state::WizardState;
use super::super::theme;

/// Read-only display of the accumulated evidence, the privacy commitment,
/// and the last error if the previous attempt failed. Holds no state.
pub struct ConsentStep<'a> {
    pub state: &'a WizardState,
}

impl Widget for ConsentStep<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 8 {
            return;
        }

        let wizard = self.state;
        let mut y = area.y;
        let row = |y| Rect::new(area.x, y, area.width, 1);
        let bottom = area.y + area.height;

        Line::from(Span::styled(
            "  You are about to submit the following evidence for analysis.",
            theme::dim_style(),
        ))
        .render(row(y), buf);
        y += 2;

        Line::from(Span::styled("  Evidence to be analyzed:", theme::heading_style()))
            .render(row(y), buf);
        y += 1;

        for item in wizard.evidence() {
            if y >= bottom {
                return;
            }
            let glyph = match item.kind {
                EvidenceKind::GitHubRepository => "⎇",
                EvidenceKind::LocalFile => "🗎",
            };
            Line::from(vec![
                Span::styled(format!("   {glyph} "), theme::dim_style()),
                Span::styled(item.identifier.clone(), theme::input_style()),
                Span::styled(format!("  ({})", item.kind), theme::dim_style()),
            ])
            .render(row(y), buf);
            y += 1;
        }
        y += 1;

        if y + 1 < bottom {
            Line::from(vec![
                Span::styled("  ⛨ ", theme::title_style()),
                Span::styled("Our Commitment to Privacy", theme::heading_style()),
            ])
            .render(row(y), buf);
            Line::from(Span::styled(
                "    Your documents are processed in a confidential environment. No raw data is stored.",
                theme::dim_style(),
            ))
            .render(row(y + 1), buf);
            y += 3;
        }

        if let Some(error) = &wizard.error {
            if y < bottom {
                Line::from(Span::styled(format!("  {error}"), theme::error_style()))
                    .render(row(y), buf);
            }
        }
    }
}
