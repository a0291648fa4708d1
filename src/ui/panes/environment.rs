//! Environment pane rendering
//!
//! Shows the active Java session: bound variables with their kind and value,
//! declared classes, and active imports. In command mode the pane only shows
//! a hint for starting a session.

use crate::memory::environment::Environment;
use crate::memory::value::Value;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Scroll state for the environment pane
pub struct EnvironmentScrollState {
    pub offset: usize,
}

fn value_style(value: &Value) -> Style {
    match value {
        Value::Str(_) => Style::default().fg(DEFAULT_THEME.string),
        Value::Int(_) | Value::Float(_) => Style::default().fg(DEFAULT_THEME.number),
        Value::Bool(_) => Style::default().fg(DEFAULT_THEME.secondary),
        Value::Object(_) => Style::default().fg(DEFAULT_THEME.type_name),
    }
}

fn section_header(title: &str, count: usize) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled("▸ ", Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(
            title.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ({})", count),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]))
}

fn build_items(env: &Environment) -> Vec<ListItem<'_>> {
    let mut items = Vec::new();

    let variables = env.variables_sorted();
    items.push(section_header("Variables", variables.len()));
    for (name, value) in variables {
        let display = match value {
            Value::Str(s) => format!("\"{}\"", s),
            other => other.to_string(),
        };
        items.push(ListItem::new(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{:<7} ", value.kind_name()),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(name, Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(display, value_style(value)),
        ])));
    }

    items.push(ListItem::new(""));
    let classes = env.class_names_sorted();
    items.push(section_header("Classes", classes.len()));
    for name in classes {
        items.push(ListItem::new(Line::from(vec![
            Span::raw("  "),
            Span::styled(name, Style::default().fg(DEFAULT_THEME.type_name)),
        ])));
    }

    items.push(ListItem::new(""));
    let imports = env.imports_sorted();
    items.push(section_header("Imports", imports.len()));
    for path in imports {
        items.push(
            ListItem::new(format!("  {}", path)).style(Style::default().fg(DEFAULT_THEME.comment)),
        );
    }

    items
}

/// Render the environment pane
pub fn render_environment_pane(
    frame: &mut Frame,
    area: Rect,
    session: Option<&Environment>,
    is_focused: bool,
    scroll_state: &mut EnvironmentScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Environment ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let Some(env) = session else {
        let hint = ListItem::new("(no session, type `java`)")
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(List::new(vec![hint]).block(block), area);
        return;
    };

    let all_items = build_items(env);
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let max_scroll = all_items.len().saturating_sub(visible_height);
    scroll_state.offset = scroll_state.offset.min(max_scroll);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(scroll_state.offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
