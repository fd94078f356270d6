use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::attestation::Attestation;

use super::super::theme;

const JOB_TITLE: &str = "Senior Golang Engineer";
const JOB_COMPANY: &str = "NovaScale — Remote (US)";
const JOB_DESCRIPTION: &str = "We are seeking an experienced Senior Golang Engineer to join our \
core infrastructure team. You will be responsible for designing, developing, and maintaining \
high-performance microservices that power our data platform. The ideal candidate has a strong \
background in distributed systems, API design, and a passion for writing clean, efficient, and \
testable code.";
const RESPONSIBILITIES: [&str; 5] = [
    "Architect and build scalable backend services in Go.",
    "Design and implement robust REST and gRPC APIs.",
    "Write comprehensive unit and integration tests.",
    "Collaborate with product managers and other engineers to deliver features.",
    "Mentor junior engineers and contribute to best practices.",
];

/// The simulated job-posting page embedding the wizard. Shows a
/// call-to-action until an attestation has been handed back, then an
/// application-submitted panel quoting its summary.
pub struct HostPage<'a> {
    pub attestation_result: Option<&'a Attestation>,
}

impl Widget for HostPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 8 {
            return;
        }

        let mut y = area.y;
        let row = |y| Rect::new(area.x, y, area.width, 1);

        Line::from(Span::styled(format!("  {JOB_TITLE}"), theme::heading_style()))
            .render(row(y), buf);
        y += 1;
        Line::from(Span::styled(format!("  {JOB_COMPANY}"), theme::dim_style())).render(row(y), buf);
        y += 2;

        let desc_height = 4u16;
        Paragraph::new(JOB_DESCRIPTION)
            .style(theme::input_style())
            .wrap(Wrap { trim: true })
            .render(
                Rect::new(area.x + 2, y, area.width.saturating_sub(4), desc_height),
                buf,
            );
        y += desc_height + 1;

        Line::from(Span::styled("  Responsibilities:", theme::heading_style())).render(row(y), buf);
        y += 1;
        for item in RESPONSIBILITIES {
            if y >= area.y + area.height {
                return;
            }
            Line::from(Span::styled(format!("   • {item}"), theme::input_style()))
                .render(row(y), buf);
            y += 1;
        }
        y += 1;
        if y + 3 >= area.y + area.height {
            return;
        }

        match self.attestation_result {
            None => {
                Line::from(Span::styled("  Ready to Apply?", theme::heading_style()))
                    .render(row(y), buf);
                y += 1;
                Line::from(Span::styled(
                    "  Prove your skills confidentially using your own evidence.",
                    theme::dim_style(),
                ))
                .render(row(y), buf);
                y += 2;
                Line::from(vec![
                    Span::styled("  ▶ ", theme::title_style()),
                    Span::styled("Apply with CVWallet", theme::title_style()),
                    Span::styled("  (press Enter)", theme::dim_style()),
                ])
                .render(row(y), buf);
            }
            Some(attestation) => {
                Line::from(vec![
                    Span::styled("  ✓ ", theme::success_style()),
                    Span::styled("Application Submitted", theme::success_style()),
                ])
                .render(row(y), buf);
                y += 1;
                Line::from(Span::styled(
                    "  Your skills attestation has been attached to your application.",
                    theme::dim_style(),
                ))
                .render(row(y), buf);
                y += 2;
                Line::from(Span::styled(
                    "  Attached Attestation Summary:",
                    theme::heading_style(),
                ))
                .render(row(y), buf);
                y += 1;
                Paragraph::new(format!("“{}”", attestation.summary))
                    .style(theme::input_style())
                    .wrap(Wrap { trim: true })
                    .render(
                        Rect::new(
                            area.x + 2,
                            y,
                            area.width.saturating_sub(4),
                            (area.y + area.height).saturating_sub(y),
                        ),
                        buf,
                    );
            }
        }
    }
}
