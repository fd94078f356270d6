use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::attestation::{ScoreTier, Skill};

use super::super::theme;

const BAR_WIDTH: usize = 30;

/// One verified skill: name + score on the first row, a filled bar colored
/// by tier on the second, the quoted evidence on the third.
pub struct ScoreBarWidget<'a> {
    pub skill: &'a Skill,
}

impl<'a> ScoreBarWidget<'a> {
    pub fn new(skill: &'a Skill) -> Self {
        Self { skill }
    }

    /// Rows consumed per skill (three content rows plus a blank spacer).
    pub const HEIGHT: u16 = 4;
}

impl Widget for ScoreBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 10 {
            return;
        }

        let tier = ScoreTier::of(self.skill.score);
        let style = theme::score_style(tier);

        let header = Line::from(vec![
            Span::styled(format!("  {}", self.skill.skill), theme::heading_style()),
            Span::raw("  "),
            Span::styled(self.skill.score.to_string(), style),
        ]);
        header.render(Rect::new(area.x, area.y, area.width, 1), buf);

        let filled = bar_cells(self.skill.score);
        let bar = Line::from(vec![
            Span::raw("  "),
            Span::styled("█".repeat(filled), style),
            Span::styled("░".repeat(BAR_WIDTH - filled), theme::dim_style()),
        ]);
        bar.render(Rect::new(area.x, area.y + 1, area.width, 1), buf);

        let evidence = Line::from(Span::styled(
            format!("  “{}”", self.skill.evidence),
            theme::dim_style(),
        ));
        evidence.render(Rect::new(area.x, area.y + 2, area.width, 1), buf);
    }
}

fn bar_cells(score: u8) -> usize {
    (usize::from(score.min(100)) * BAR_WIDTH) / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_scales_with_score() {
        assert_eq!(bar_cells(0), 0);
        assert_eq!(bar_cells(50), BAR_WIDTH / 2);
        assert_eq!(bar_cells(100), BAR_WIDTH);
    }

    #[test]
    fn bar_clamps_out_of_range_scores() {
        assert_eq!(bar_cells(250), BAR_WIDTH);
    }
}
