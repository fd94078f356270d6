use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::attestation::Attestation;

use super::super::theme;
use super::super::widgets::ScoreBarWidget;

/// The generated attestation: summary paragraph, then one score bar per
/// skill in the order the model returned them.
pub struct ReviewStep<'a> {
    pub attestation: &'a Attestation,
}

impl Widget for ReviewStep<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 8 {
            return;
        }

        let mut y = area.y;
        let bottom = area.y + area.height;
        let row = |y| Rect::new(area.x, y, area.width, 1);

        Line::from(vec![
            Span::styled("  ✓ ", theme::success_style()),
            Span::styled("Review your AI-generated skill summary.", theme::dim_style()),
        ])
        .render(row(y), buf);
        y += 2;

        Line::from(Span::styled("  AI Summary", theme::heading_style())).render(row(y), buf);
        y += 1;
        let summary_height = 4u16;
        Paragraph::new(self.attestation.summary.as_str())
            .style(theme::input_style())
            .wrap(Wrap { trim: true })
            .render(
                Rect::new(area.x + 2, y, area.width.saturating_sub(4), summary_height),
                buf,
            );
        y += summary_height + 1;

        if y >= bottom {
            return;
        }
        Line::from(Span::styled("  Verified Skills", theme::heading_style())).render(row(y), buf);
        y += 1;

        for skill in &self.attestation.skills {
            if y + 3 > bottom {
                break;
            }
            ScoreBarWidget::new(skill).render(
                Rect::new(area.x, y, area.width, ScoreBarWidget::HEIGHT),
                buf,
            );
            y += ScoreBarWidget::HEIGHT;
        }
    }
}
