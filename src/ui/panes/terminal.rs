//! Terminal pane: transcript plus the live input line

use crate::transcript::{LineStyle, Transcript};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Data needed to render the terminal pane
pub struct TerminalRenderData<'a> {
    pub transcript: &'a Transcript,
    pub prompt: &'a str,
    pub input: &'a str,
}

/// Scroll offset measured in lines up from the bottom
pub struct TerminalScrollState {
    pub offset_from_bottom: usize,
}

fn line_style(style: LineStyle) -> Style {
    match style {
        LineStyle::Input => Style::default().fg(DEFAULT_THEME.primary),
        LineStyle::Output => Style::default().fg(DEFAULT_THEME.fg),
        LineStyle::Error => Style::default().fg(DEFAULT_THEME.error),
        LineStyle::Info => Style::default()
            .fg(DEFAULT_THEME.comment)
            .add_modifier(Modifier::ITALIC),
    }
}

/// Render the terminal pane
pub fn render_terminal_pane(
    frame: &mut Frame,
    area: Rect,
    data: TerminalRenderData,
    is_focused: bool,
    scroll_state: &mut TerminalScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Terminal ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 0, 0, 0));

    let mut all_items: Vec<ListItem> = data
        .transcript
        .lines
        .iter()
        .map(|line| ListItem::new(line.text.as_str()).style(line_style(line.style)))
        .collect();

    // Input line with a block cursor
    all_items.push(ListItem::new(Line::from(vec![
        Span::styled(data.prompt, Style::default().fg(DEFAULT_THEME.success)),
        Span::styled(data.input, Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled(
            " ",
            Style::default().add_modifier(Modifier::REVERSED),
        ),
    ])));

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    let max_offset = total_items.saturating_sub(visible_height);
    scroll_state.offset_from_bottom = scroll_state.offset_from_bottom.min(max_offset);
    let skip = max_offset - scroll_state.offset_from_bottom;

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(skip)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
