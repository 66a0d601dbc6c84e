//! Status bar rendering with keybindings and state indicators

use crate::ops::StructureKind;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What the app is doing, for the right-hand indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
    Paused,
    Reviewing,
}

pub struct StatusRenderData<'a> {
    pub structure: StructureKind,
    pub message: Option<&'a str>,
    pub is_error: bool,
    pub playback: PlaybackState,
    /// Whether the value input currently parses
    pub input_valid: bool,
    pub theme: &'a Theme,
}

/// (key, description, needs a valid value)
fn keybinds(
    structure: StructureKind,
    playback: PlaybackState,
) -> Vec<(&'static str, &'static str, bool)> {
    match playback {
        PlaybackState::Playing | PlaybackState::Paused => vec![
            ("⎵", "pause", false),
            ("esc", "cancel", false),
            ("[ ]", "speed", false),
        ],
        PlaybackState::Reviewing => vec![
            ("←/→", "step", false),
            ("home/end", "start/end", false),
            ("esc", "done", false),
        ],
        PlaybackState::Idle => {
            let mut binds = match structure {
                StructureKind::Array => vec![
                    ("↵", "add", true),
                    ("r", "remove", false),
                    ("/", "search", true),
                    ("s", "shuffle", false),
                    ("b", "bubble", false),
                    ("k", "quick", false),
                ],
                StructureKind::Stack => vec![
                    ("↵", "push", true),
                    ("r", "pop", false),
                    ("p", "peek", false),
                ],
                StructureKind::Queue => vec![
                    ("↵", "enqueue", true),
                    ("r", "dequeue", false),
                    ("p", "peek", false),
                ],
                StructureKind::LinkedList => vec![
                    ("↵", "add tail", true),
                    ("h", "add head", true),
                    ("r", "rm head", false),
                    ("R", "rm tail", false),
                    ("/", "search", true),
                ],
            };
            binds.extend([("x", "reset", false), ("⇥", "switch", false), ("q", "quit", false)]);
            binds
        }
    }
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let theme = data.theme;
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // Left side: structure badge and message
    let left_spans = vec![
        Span::styled(
            format!(" {} ", data.structure.title()),
            Style::default()
                .bg(if data.is_error {
                    theme.error
                } else {
                    theme.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().bg(theme.bar_bg).fg(theme.comment)),
        Span::styled(
            format!(" {} ", data.message.unwrap_or("Ready!")),
            Style::default().bg(theme.bar_bg).fg(if data.is_error {
                theme.error
            } else {
                theme.fg
            }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(theme.bar_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds, dimmed when they need a value and none is typed
    let key_style = Style::default().bg(theme.comment).fg(Color::Black);
    let disabled_key_style = Style::default().bg(theme.bar_bg).fg(theme.comment);
    let desc_style = Style::default().bg(theme.bar_bg).fg(theme.fg);
    let disabled_desc_style = Style::default()
        .bg(theme.bar_bg)
        .fg(theme.comment)
        .add_modifier(Modifier::CROSSED_OUT);
    let sep_style = Style::default().bg(theme.bar_bg).fg(theme.comment);

    let mut right_spans = Vec::new();
    for (i, (key, desc, needs_value)) in keybinds(data.structure, data.playback)
        .into_iter()
        .enumerate()
    {
        let enabled = !needs_value || data.input_valid;
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
        }
        right_spans.push(Span::styled(
            format!(" {} ", key),
            if enabled { key_style } else { disabled_key_style },
        ));
        right_spans.push(Span::styled(
            format!(" {} ", desc),
            if enabled { desc_style } else { disabled_desc_style },
        ));
    }

    let indicator = match data.playback {
        PlaybackState::Playing => Some((" ▶ PLAYING ", theme.secondary)),
        PlaybackState::Paused => Some((" ⏸ PAUSED ", theme.compare)),
        PlaybackState::Reviewing => Some((" ⟲ REVIEW ", theme.pivot)),
        PlaybackState::Idle => None,
    };
    if let Some((text, color)) = indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(theme.bar_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
