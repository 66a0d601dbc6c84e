//! Information pane: structure facts, speed, and the value input

use super::style::border_style;
use crate::narrator::AnimationSpeed;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
    Frame,
};
use std::time::Duration;

pub struct InfoRenderData<'a> {
    pub title: &'a str,
    pub rows: Vec<(&'static str, String)>,
    pub speed: AnimationSpeed,
    pub delay: Duration,
    pub input: &'a str,
    /// Whether `input` parses as a value (actions needing it are enabled)
    pub input_valid: bool,
    pub theme: &'a Theme,
}

pub fn render_info_pane(frame: &mut Frame, area: Rect, data: InfoRenderData) {
    let theme = data.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    // Facts
    let mut lines = Vec::with_capacity(data.rows.len() * 2);
    for (label, value) in &data.rows {
        lines.push(Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(theme.comment),
        )));
        lines.push(Line::from(Span::styled(
            value.clone(),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )));
    }
    let facts = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} Information ", data.title))
            .borders(Borders::ALL)
            .border_style(border_style(false, theme))
            .padding(Padding::new(1, 1, 0, 0)),
    );
    frame.render_widget(facts, chunks[0]);

    // Speed
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" Speed · {} ms/step ", data.delay.as_millis()))
                .borders(Borders::ALL)
                .border_style(border_style(false, theme)),
        )
        .gauge_style(Style::default().fg(theme.primary).bg(theme.bar_bg))
        .percent(data.speed.get() as u16)
        .label(data.speed.to_string());
    frame.render_widget(gauge, chunks[1]);

    // Input
    let (text, style) = if data.input.is_empty() {
        (
            "type a number".to_string(),
            Style::default().fg(theme.comment),
        )
    } else if data.input_valid {
        (data.input.to_string(), Style::default().fg(theme.fg))
    } else {
        (data.input.to_string(), Style::default().fg(theme.error))
    };
    let input = Paragraph::new(Line::from(vec![
        Span::styled("› ", Style::default().fg(theme.secondary)),
        Span::styled(text, style),
    ]))
    .block(
        Block::default()
            .title(" Value ")
            .borders(Borders::ALL)
            .border_style(border_style(data.input_valid, theme)),
    );
    frame.render_widget(input, chunks[2]);
}
