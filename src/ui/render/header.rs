use crate::forms::FormKind;
use crate::state::State;
use crate::ui::widgets::styling;
use crate::ui::Frame;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

/// Render the form tabs.
///
pub fn header(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let titles: Vec<Line> = FormKind::all()
        .iter()
        .map(|kind| Line::from(Span::raw(kind.title())))
        .collect();
    let selected = FormKind::all()
        .iter()
        .position(|kind| *kind == state.current_view().form_kind())
        .unwrap_or(0);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .title(Span::styled(" fieldcheck ", styling::banner_style(theme)));
    let tabs = Tabs::new(titles)
        .block(block)
        .select(selected)
        .style(styling::muted_text_style(theme))
        .highlight_style(styling::active_tab_style(theme))
        .divider("|");
    frame.render_widget(tabs, size);
}
