//! Narration pane: what the current sort step means

use super::style::border_style;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub struct NarrationRenderData<'a> {
    pub narration: Option<&'a str>,
    /// Short tag for the step kind ("compare", "swap", ...)
    pub step_label: Option<&'static str>,
    /// (position, total) in the step history
    pub position: Option<(usize, usize)>,
    pub theme: &'a Theme,
}

pub fn render_narration_pane(frame: &mut Frame, area: Rect, data: NarrationRenderData) {
    let theme = data.theme;
    let title = match data.position {
        Some((position, total)) => format!(" Narration · step {}/{} ", position + 1, total),
        None => " Narration ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(false, theme))
        .padding(Padding::new(1, 1, 0, 0));

    let line = match (data.narration, data.step_label) {
        (Some(text), Some(label)) => Line::from(vec![
            Span::styled(
                format!("[{}] ", label),
                Style::default()
                    .fg(theme.compare)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(text.to_string(), Style::default().fg(theme.fg)),
        ]),
        (Some(text), None) => Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(theme.fg),
        )),
        (None, _) => Line::from(Span::styled(
            "Start a sort to see each step explained here",
            Style::default().fg(theme.comment),
        )),
    };

    let paragraph = Paragraph::new(line)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
