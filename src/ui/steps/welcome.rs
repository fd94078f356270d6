use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use super::super::theme;

const PITCH: &str = "Prove your skills with verifiable evidence from your work. Your data is \
processed securely and is never shared without your consent.";

const FEATURES: [(&str, &str); 2] = [
    (
        "Connect Your Evidence",
        "Link a repository, or add code samples and performance reviews.",
    ),
    (
        "AI-Powered Analysis",
        "An AI oracle analyzes your evidence to generate a skills attestation.",
    ),
];

/// Static welcome pitch; the footer's Get Started is the only action.
pub struct WelcomeStep;

impl Widget for WelcomeStep {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 6 {
            return;
        }

        let mut y = area.y;
        Paragraph::new(PITCH)
            .style(theme::input_style())
            .wrap(Wrap { trim: true })
            .render(Rect::new(area.x + 2, y, area.width.saturating_sub(4), 3), buf);
        y += 4;

        for (title, blurb) in FEATURES {
            if y + 1 >= area.y + area.height {
                break;
            }
            Line::from(vec![
                Span::styled("  ◆ ", theme::title_style()),
                Span::styled(title, theme::heading_style()),
            ])
            .render(Rect::new(area.x, y, area.width, 1), buf);
            Line::from(Span::styled(format!("    {blurb}"), theme::dim_style()))
                .render(Rect::new(area.x, y + 1, area.width, 1), buf);
            y += 3;
        }
    }
}
