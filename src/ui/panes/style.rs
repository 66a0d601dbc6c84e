//! Shared styling helpers for panes

use crate::ui::theme::Theme;
use crate::ui::view::{Cell, Role, Transition};
use ratatui::style::{Color, Modifier, Style};

/// Fill color for a highlight role
pub fn role_color(role: Role, theme: &Theme) -> Color {
    match role {
        Role::Swapped => theme.swap,
        Role::Compared => theme.compare,
        Role::Pivot => theme.pivot,
        Role::Found | Role::Peeked => theme.secondary,
        Role::Settled => theme.success,
        Role::Normal => theme.primary,
    }
}

/// Filled box style for a node or bar label
pub fn cell_style(cell: &Cell, theme: &Theme) -> Style {
    let style = Style::default()
        .bg(role_color(cell.role, theme))
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);
    match cell.transition {
        Transition::Inserted => style.add_modifier(Modifier::UNDERLINED),
        Transition::Moved { .. } => style.add_modifier(Modifier::ITALIC),
        Transition::Unchanged => style,
    }
}

pub fn border_style(is_focused: bool, theme: &Theme) -> Style {
    if is_focused {
        Style::default()
            .fg(theme.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border_normal)
    }
}
