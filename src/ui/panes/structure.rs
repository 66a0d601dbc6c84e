//! Structure pane rendering
//!
//! Draws a [`FrameView`] in the shape of the active structure:
//!
//! - Array: vertical bars scaled to the largest value, indices underneath
//! - Stack: boxes stacked bottom to top with the top marked
//! - Queue: boxes left to right between the front and rear markers
//! - Linked list: nodes joined by arrows from head to `null`, with each
//!   node's identity token underneath

use super::style::{border_style, cell_style, role_color};
use crate::ops::StructureKind;
use crate::ui::theme::Theme;
use crate::ui::view::FrameView;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Data needed to render the structure pane
pub struct StructureRenderData<'a> {
    pub kind: StructureKind,
    pub view: &'a FrameView,
    pub theme: &'a Theme,
    /// Extra title text, e.g. the running algorithm
    pub subtitle: Option<String>,
}

pub fn render_structure_pane(frame: &mut Frame, area: Rect, data: StructureRenderData) {
    let title = match &data.subtitle {
        Some(subtitle) => format!(" {} · {} ", data.kind.title(), subtitle),
        None => format!(" {} ", data.kind.title()),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(true, data.theme));

    if data.view.cells.is_empty() {
        let paragraph = Paragraph::new(format!("(empty {})", data.kind.noun().to_lowercase()))
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(data.theme.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    match data.kind {
        StructureKind::Array => render_bars(frame, area, block, &data),
        StructureKind::Stack => {
            let paragraph = Paragraph::new(stack_lines(&data))
                .block(block)
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, area);
        }
        StructureKind::Queue => {
            let paragraph = Paragraph::new(queue_lines(&data))
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, area);
        }
        StructureKind::LinkedList => {
            let paragraph = Paragraph::new(list_lines(&data))
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, area);
        }
    }
}

fn render_bars(frame: &mut Frame, area: Rect, block: Block, data: &StructureRenderData) {
    let count = data.view.cells.len();
    let inner_width = area.width.saturating_sub(2) as usize;
    let bar_width = (inner_width.saturating_sub(count) / count.max(1)).clamp(3, 9) as u16;

    let bars: Vec<Bar> = data
        .view
        .cells
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            let color = role_color(cell.role, data.theme);
            // Keep a sliver visible for zero and negative values
            let height = ((cell.height * 100.0).round() as u64).max(1);
            Bar::default()
                .value(height)
                .text_value(cell.value.to_string())
                .label(Line::from(index.to_string()))
                .style(Style::default().fg(color))
                .value_style(cell_style(cell, data.theme))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(100);
    frame.render_widget(chart, area);
}

fn stack_lines(data: &StructureRenderData) -> Vec<Line<'static>> {
    let theme = data.theme;
    let cells = &data.view.cells;
    let width = box_width(data.view);
    let mut lines = Vec::with_capacity(cells.len() + 1);

    for (index, cell) in cells.iter().enumerate().rev() {
        let mut spans = vec![Span::styled(
            format!(" {:^width$} ", cell.value, width = width),
            cell_style(cell, theme),
        )];
        if index + 1 == cells.len() {
            spans.push(Span::styled(" ← Top", Style::default().fg(theme.secondary)));
        } else {
            spans.push(Span::raw("      "));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(
        format!("└{}┘      ", "─".repeat(width + 2)),
        Style::default().fg(theme.comment),
    )));
    lines
}

fn queue_lines(data: &StructureRenderData) -> Vec<Line<'static>> {
    let theme = data.theme;
    let muted = Style::default().fg(theme.comment);
    let mut spans = vec![Span::styled("Front ▸ ", Style::default().fg(theme.secondary))];
    for (index, cell) in data.view.cells.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" ← ", muted));
        }
        spans.push(Span::styled(format!(" {} ", cell.value), cell_style(cell, theme)));
    }
    spans.push(Span::styled(" ◂ Rear", Style::default().fg(theme.secondary)));

    vec![
        Line::from(""),
        Line::from(spans),
        Line::from(""),
        Line::from(Span::styled("dequeue ◂ front        rear ◂ enqueue", muted)),
    ]
}

fn list_lines(data: &StructureRenderData) -> Vec<Line<'static>> {
    let theme = data.theme;
    let muted = Style::default().fg(theme.comment);
    let label = Style::default().fg(theme.secondary);

    let mut nodes = vec![Span::styled("head → ", label)];
    let mut ids = vec![Span::raw("       ")];
    for cell in &data.view.cells {
        let text = format!(" {} ", cell.value);
        let width = text.chars().count();
        ids.push(Span::styled(
            format!("{:^width$}", cell.id.to_string(), width = width),
            muted,
        ));
        ids.push(Span::raw("   "));
        nodes.push(Span::styled(text, cell_style(cell, theme)));
        nodes.push(Span::styled(" → ", muted));
    }
    nodes.push(Span::styled("null", Style::default().fg(Color::DarkGray)));

    vec![Line::from(""), Line::from(nodes), Line::from(ids)]
}

fn box_width(view: &FrameView) -> usize {
    view.cells
        .iter()
        .map(|c| c.value.to_string().len())
        .max()
        .unwrap_or(1)
        .max(8)
}
