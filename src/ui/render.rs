use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use super::handlers::is_text_input_active;
use super::state::{AppState, ConnectField, Screen, WizardStep};
use super::steps;
use super::theme;
use super::widgets::{Spinner, StepIndicatorWidget};

pub(super) fn draw_ui(area: Rect, buf: &mut Buffer, state: &AppState, spinner: &Spinner) {
    let title = match state.screen {
        Screen::Host => "  NovaScale Careers".to_string(),
        Screen::Wizard => {
            let step = state.wizard.as_ref().map_or(WizardStep::Welcome, |w| w.step);
            format!("  ⛨ CVWallet — {}", step.label())
        }
    };

    let vertical = Layout::vertical([
        Constraint::Length(2), // Title
        Constraint::Min(4),    // Body
        Constraint::Length(2), // Keybindings
    ])
    .split(area);

    Line::from(Span::styled(title, theme::title_style())).render(
        Rect::new(vertical[0].x, vertical[0].y, vertical[0].width, 1),
        buf,
    );
    Line::from(Span::styled(
        format!("  {}", "─".repeat(area.width.saturating_sub(4) as usize)),
        theme::dim_style(),
    ))
    .render(
        Rect::new(vertical[0].x, vertical[0].y + 1, vertical[0].width, 1),
        buf,
    );

    render_body(vertical[1], buf, state, spinner);

    let keys_line = Line::from(Span::styled(
        format!("  {}", keybinding_text(state)),
        theme::keybinding_style(),
    ));
    keys_line.render(vertical[2], buf);
}

fn render_body(area: Rect, buf: &mut Buffer, state: &AppState, spinner: &Spinner) {
    match state.screen {
        Screen::Host => {
            steps::HostPage {
                attestation_result: state.attestation_result.as_ref(),
            }
            .render(area, buf);
        }
        Screen::Wizard => {
            let Some(wizard) = state.wizard.as_ref() else {
                return;
            };

            // Milestone dots only appear between Welcome and Processing.
            let body = if matches!(wizard.step, WizardStep::Connect | WizardStep::Consent) {
                StepIndicatorWidget::new(wizard.step)
                    .render(Rect::new(area.x, area.y, area.width, 1), buf);
                Rect::new(
                    area.x,
                    area.y + 2,
                    area.width,
                    area.height.saturating_sub(2),
                )
            } else {
                area
            };

            match wizard.step {
                WizardStep::Welcome => steps::WelcomeStep.render(body, buf),
                WizardStep::Connect => steps::ConnectStep { state: wizard }.render(body, buf),
                WizardStep::Consent => steps::ConsentStep { state: wizard }.render(body, buf),
                WizardStep::Processing => {
                    steps::ProcessingStep { spinner }.render(body, buf);
                }
                WizardStep::Review => {
                    if let Some(attestation) = wizard.attestation.as_ref() {
                        steps::ReviewStep { attestation }.render(body, buf);
                    }
                }
            }
        }
    }
}

fn keybinding_text(state: &AppState) -> String {
    let keys: &[&str] = match state.screen {
        Screen::Host => &["Enter Apply with CVWallet", "q Quit"],
        Screen::Wizard => match state.wizard.as_ref().map(|w| w.step) {
            Some(WizardStep::Welcome) => &["Enter Get Started", "Esc Close"],
            Some(WizardStep::Connect) => {
                match state.wizard.as_ref().map(|w| w.connect_field) {
                    Some(ConnectField::FileList) => {
                        &["↑↓ Select", "Del Remove", "Enter Continue", "Tab Field", "Esc Back"]
                    }
                    _ if is_text_input_active(state) => {
                        &["Enter Confirm", "Tab Field", "Esc Back"]
                    }
                    _ => &["Enter Confirm", "Tab Field"],
                }
            }
            Some(WizardStep::Consent) => &["Enter Consent & Analyze", "Esc Back"],
            Some(WizardStep::Processing) => &["Analyzing — please wait"],
            Some(WizardStep::Review) => &["Enter Share with Employer & Finish", "Esc Discard"],
            None => &[],
        },
    };
    keys.join("  ")
}
