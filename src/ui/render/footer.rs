use crate::state::State;
use crate::ui::widgets::styling;
use crate::ui::Frame;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

const KEY_HINTS: &[(&str, &str)] = &[
    ("Tab/↓", "next field"),
    ("Shift+Tab/↑", "previous field"),
    ("Enter", "submit"),
    ("Ctrl+U", "clear"),
    ("F2", "switch form"),
    ("Esc", "quit"),
];

/// Render the key hints.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let mut spans = vec![];
    for (key, action) in KEY_HINTS {
        spans.push(Span::styled(format!(" {}", key), styling::active_tab_style(theme)));
        spans.push(Span::styled(format!(": {} ", action), styling::muted_text_style(theme)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), size);
}
