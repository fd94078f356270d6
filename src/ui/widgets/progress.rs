use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use super::super::state::WizardStep;
use super::super::theme;

/// The three user-visible milestones shown in the wizard header.
const MILESTONES: [(WizardStep, &str); 3] = [
    (WizardStep::Connect, "Connect"),
    (WizardStep::Consent, "Consent"),
    (WizardStep::Review, "Review"),
];

/// Horizontal step indicator: `● Connect ── ◉ Consent ── ○ Review`.
/// Milestones before the current step render as done, the current one as
/// active, the rest as pending.
pub struct StepIndicatorWidget {
    pub current: WizardStep,
}

impl StepIndicatorWidget {
    pub fn new(current: WizardStep) -> Self {
        Self { current }
    }
}

impl Widget for StepIndicatorWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 20 {
            return;
        }

        let mut spans = vec![Span::raw("  ")];
        for (i, (step, name)) in MILESTONES.iter().enumerate() {
            let (marker, style) = if self.current.index() > step.index() {
                ("●", theme::step_done_style())
            } else if self.current == *step {
                ("◉", theme::step_current_style())
            } else {
                ("○", theme::step_pending_style())
            };
            spans.push(Span::styled(format!("{marker} {name}"), style));
            if i + 1 < MILESTONES.len() {
                spans.push(Span::styled(" ── ", theme::dim_style()));
            }
        }

        Line::from(spans).render(area, buf);
    }
}
