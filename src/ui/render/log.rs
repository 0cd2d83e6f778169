use crate::state::State;
use crate::ui::widgets::styling;
use crate::ui::Frame;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render log widget according to state. Shows the newest lines that fit.
///
pub fn log(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let entries = state.get_log_entries();
    let visible = usize::from(size.height.saturating_sub(2));
    let skip = entries.len().saturating_sub(visible);

    let items: Vec<ListItem> = entries
        .iter()
        .skip(skip)
        .map(|entry| {
            let style = if entry.contains(" ERROR ") {
                styling::error_text_style(theme)
            } else if entry.contains(" WARN ") {
                styling::warning_text_style(theme)
            } else {
                styling::normal_text_style(theme)
            };
            ListItem::new(Line::from(vec![Span::styled(entry.clone(), style)]))
        })
        .collect();

    let block = Block::default()
        .title("Log")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    frame.render_widget(List::new(items).block(block), size);
}
