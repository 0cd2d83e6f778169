use crate::state::State;
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify default terminal event poll rate in milliseconds.
///
pub const DEFAULT_TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify what the application should do after an input.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Flow {
    Continue,
    Exit,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new(tick_rate_in_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        let tick_rate = Duration::from_millis(tick_rate_in_ms);
        thread::spawn(move || loop {
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => (),
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => (),
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(key, state)? == Flow::Continue),
            Event::Tick => Ok(true),
        }
    }
}

/// Apply a single key press to state.
///
pub fn handle_key(key: KeyEvent, state: &mut State) -> Result<Flow> {
    if key.kind != KeyEventKind::Press {
        return Ok(Flow::Continue);
    }
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return Ok(Flow::Exit);
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.clear_field()?;
        }
        (KeyCode::Char('n'), KeyModifiers::CONTROL) | (KeyCode::F(2), _) => {
            debug!("Processing switch form event '{:?}'...", key);
            state.next_view();
        }
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            state.type_char(c)?;
        }
        (KeyCode::Backspace, _) => {
            state.delete_char()?;
        }
        (KeyCode::Tab, _) | (KeyCode::Down, _) => {
            state.focus_next_field()?;
        }
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => {
            state.focus_previous_field()?;
        }
        (KeyCode::Enter, _) => {
            debug!("Processing submit event '{:?}'...", key);
            state.submit_current_form()?;
        }
        _ => (),
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldValue;
    use crate::forms::{AGE, NAME};
    use crate::state::{SubmitStatus, View};

    fn press(code: KeyCode, state: &mut State) -> Flow {
        handle_key(KeyEvent::new(code, KeyModifiers::NONE), state).unwrap()
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut state = State::default();
        handle_key(
            KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT),
            &mut state,
        )
        .unwrap();
        press(KeyCode::Char('d'), &mut state);
        press(KeyCode::Char('a'), &mut state);
        press(KeyCode::Backspace, &mut state);
        assert_eq!(
            state.current_pane().form().value(NAME).unwrap(),
            &FieldValue::from("Ad")
        );
    }

    #[test]
    fn test_tab_and_enter() {
        let mut state = State::default();
        press(KeyCode::Char('A'), &mut state);
        press(KeyCode::Char('d'), &mut state);
        press(KeyCode::Tab, &mut state);
        press(KeyCode::Char('4'), &mut state);
        press(KeyCode::Char('0'), &mut state);
        assert_eq!(
            state.current_pane().form().value(AGE).unwrap(),
            &FieldValue::from("40")
        );
        press(KeyCode::Enter, &mut state);
        assert_eq!(state.current_pane().status(), &SubmitStatus::Accepted);
    }

    #[test]
    fn test_ctrl_u_clears_field() {
        let mut state = State::default();
        press(KeyCode::Char('A'), &mut state);
        handle_key(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            &mut state,
        )
        .unwrap();
        assert!(state.current_pane().form().value(NAME).unwrap().is_blank());
    }

    #[test]
    fn test_f2_switches_form() {
        let mut state = State::default();
        press(KeyCode::F(2), &mut state);
        assert_eq!(*state.current_view(), View::ComplexForm);
    }

    #[test]
    fn test_exit_keys() {
        let mut state = State::default();
        assert_eq!(press(KeyCode::Esc, &mut state), Flow::Exit);
        let flow = handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut state,
        )
        .unwrap();
        assert_eq!(flow, Flow::Exit);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut state = State::default();
        let mut key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_key(key, &mut state).unwrap(), Flow::Continue);
        assert!(state.current_pane().form().value(NAME).unwrap().is_blank());
    }
}
