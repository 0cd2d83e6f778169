use crate::field::FieldState;
use crate::forms::FieldDescriptor;
use crate::state::{State, SubmitStatus};
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use crate::ui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const FIELD_HEIGHT: u16 = 4; // Borders, value and error line
const STATUS_HEIGHT: u16 = 3;

/// Render the current form with every field's value and error message.
///
pub fn form(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let pane = state.current_pane();
    let descriptors = pane.kind().fields();

    let mut constraints: Vec<Constraint> = descriptors
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(STATUS_HEIGHT));
    constraints.push(Constraint::Min(0));

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme))
        .title(Span::styled(
            pane.kind().title(),
            styling::active_block_title_style(),
        ));
    let inner = outer.inner(size);
    frame.render_widget(outer, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (index, descriptor) in descriptors.iter().enumerate() {
        let Ok(field) = pane.form().field_state(descriptor.name) else {
            continue;
        };
        let focused = index == pane.focused_index();
        render_field(frame, chunks[index], theme, descriptor, field, focused);
    }

    render_status(frame, chunks[descriptors.len()], theme, pane.status());
}

fn render_field(
    frame: &mut Frame,
    size: Rect,
    theme: &Theme,
    descriptor: &FieldDescriptor,
    field: &FieldState,
    focused: bool,
) {
    let (border_style, title_style) = if focused {
        (
            styling::active_block_border_style(theme),
            styling::active_block_title_style(),
        )
    } else {
        (
            styling::normal_block_border_style(theme),
            styling::normal_text_style(theme),
        )
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(descriptor.label, title_style));

    let value = field.value().to_string();
    let value_line = match descriptor.placeholder {
        Some(placeholder) if value.is_empty() => {
            Line::from(Span::styled(placeholder, styling::muted_text_style(theme)))
        }
        _ => Line::from(Span::styled(value.clone(), styling::normal_text_style(theme))),
    };
    let message_line = match field.error_message() {
        Some(message) => Line::from(Span::styled(message, styling::error_text_style(theme))),
        None if field.is_touched() => {
            Line::from(Span::styled("ok", styling::success_text_style(theme)))
        }
        None => Line::default(),
    };

    if focused {
        let cursor_x = size.x + 1 + value.chars().count() as u16;
        frame.set_cursor(cursor_x.min(size.right().saturating_sub(2)), size.y + 1);
    }
    frame.render_widget(Paragraph::new(vec![value_line, message_line]).block(block), size);
}

fn render_status(frame: &mut Frame, size: Rect, theme: &Theme, status: &SubmitStatus) {
    let line = match status {
        SubmitStatus::NotSubmitted => Line::from(Span::styled(
            "Press Enter to submit",
            styling::muted_text_style(theme),
        )),
        SubmitStatus::Accepted => Line::from(Span::styled(
            "Form submitted",
            styling::success_text_style(theme),
        )),
        SubmitStatus::Rejected(fields) => Line::from(Span::styled(
            format!("Please correct: {}", fields.join(", ")),
            styling::error_text_style(theme),
        )),
    };
    let paragraph = Paragraph::new(line)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(paragraph, size);
}
