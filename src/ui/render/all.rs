use super::{footer, form, header, log};
use crate::state::State;
use crate::ui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

/// Render the whole screen according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Form tabs
            Constraint::Min(8),    // Form and log
            Constraint::Length(1), // Footer
        ])
        .split(frame.size());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    header(frame, rows[0], state);
    form(frame, columns[0], state);
    log(frame, columns[1], state);
    footer(frame, rows[2], state);
}
