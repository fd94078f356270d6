use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use super::super::state::{ConnectField, WizardState};
use super::super::theme;
use super::super::widgets::{SelectListWidget, TextInputWidget};

/// Evidence capture: a repository URL field, a file-name entry field, and
/// the removable list of added files.
pub struct ConnectStep<'a> {
    pub state: &'a WizardState,
}

impl Widget for ConnectStep<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 8 {
            return;
        }

        let wizard = self.state;
        let mut y = area.y;
        let row = |y| Rect::new(area.x, y, area.width, 1);

        Line::from(Span::styled(
            "  Add sources for the AI to analyze. At least one is required.",
            theme::dim_style(),
        ))
        .render(row(y), buf);
        y += 2;

        TextInputWidget::new(
            &wizard.repo_url,
            "GitHub repository URL",
            wizard.connect_field == ConnectField::RepoUrl,
        )
        .render(row(y), buf);
        y += 2;

        TextInputWidget::new(
            &wizard.file_entry,
            "Add document by name",
            wizard.connect_field == ConnectField::FileEntry,
        )
        .render(row(y), buf);
        y += 1;
        Line::from(Span::styled(
            "    PDF, DOCX, or TXT — only the name is used, contents stay local.",
            theme::dim_style(),
        ))
        .render(row(y), buf);
        y += 2;

        if !wizard.files.is_empty() {
            Line::from(Span::styled("  Added documents:", theme::heading_style())).render(row(y), buf);
            y += 1;

            let list_height = (area.y + area.height)
                .saturating_sub(y)
                .saturating_sub(2)
                .min(6);
            SelectListWidget::new(&wizard.files, wizard.connect_field == ConnectField::FileList)
                .render(Rect::new(area.x, y, area.width, list_height), buf);
            y += list_height.max(1);
        }

        if let Some(notice) = &wizard.notice {
            if y < area.y + area.height {
                Line::from(Span::styled(format!("  {notice}"), theme::warning_style()))
                    .render(row(y), buf);
            }
        }
    }
}
