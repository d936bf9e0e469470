//! Translates raw terminal input into sandbox events.
//!
//! Keybindings live here and nowhere else. Each shortcut maps to a semantic
//! event, and the UI loop resolves that event to the same session command a
//! palette entry would trigger, so no binding can grow its own behavior.

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::{EventStream, MouseButton, MouseEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Event;

pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        EventsService {
            crossterm_events: EventStream::new(),
            events,
        }
    }

    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Paste(text) => Some(Event::Paste(text)),
            CrosstermEvent::Resize(width, height) => Some(Event::Resized { width, height }),
            CrosstermEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(Event::MouseDown {
                    column: mouse.column,
                    row: mouse.row,
                }),
                MouseEventKind::Drag(MouseButton::Left) => {
                    Some(Event::MouseDrag { row: mouse.row })
                }
                MouseEventKind::Up(MouseButton::Left) => Some(Event::MouseUp),
                MouseEventKind::ScrollUp => Some(Event::ScrollUp),
                MouseEventKind::ScrollDown => Some(Event::ScrollDown),
                _ => None,
            },
            CrosstermEvent::Key(keyevent) => {
                let key = match keyevent.code {
                    crossterm::event::KeyCode::Char(c) => Key::Char(c),
                    crossterm::event::KeyCode::Enter => Key::Enter,
                    crossterm::event::KeyCode::Left => Key::Left,
                    crossterm::event::KeyCode::Right => Key::Right,
                    crossterm::event::KeyCode::Up => Key::Up,
                    crossterm::event::KeyCode::Down => Key::Down,
                    crossterm::event::KeyCode::Home => Key::Home,
                    crossterm::event::KeyCode::End => Key::End,
                    crossterm::event::KeyCode::PageUp => Key::PageUp,
                    crossterm::event::KeyCode::PageDown => Key::PageDown,
                    crossterm::event::KeyCode::Tab => Key::Tab,
                    crossterm::event::KeyCode::Delete => Key::Delete,
                    crossterm::event::KeyCode::F(n) => Key::F(n),
                    crossterm::event::KeyCode::Backspace => Key::Backspace,
                    crossterm::event::KeyCode::Esc => Key::Esc,
                    _ => return None,
                };

                let input = Input {
                    key,
                    ctrl: keyevent
                        .modifiers
                        .contains(crossterm::event::KeyModifiers::CONTROL),
                    alt: keyevent
                        .modifiers
                        .contains(crossterm::event::KeyModifiers::ALT),
                    shift: keyevent
                        .modifiers
                        .contains(crossterm::event::KeyModifiers::SHIFT),
                };

                match input {
                    Input { key: Key::F(5), .. } => Some(Event::RunRequested),
                    Input {
                        key: Key::Char('r'),
                        ctrl: true,
                        ..
                    } => Some(Event::RunRequested),
                    Input {
                        key: Key::Char('j'),
                        ctrl: true,
                        ..
                    } => Some(Event::ToggleOutputPanel),
                    Input {
                        key: Key::Char('b'),
                        ctrl: true,
                        ..
                    } => Some(Event::PreviewRequested),
                    Input {
                        key: Key::F(11), ..
                    } => Some(Event::ToggleFullscreen),
                    Input {
                        key: Key::Char('f'),
                        ctrl: true,
                        ..
                    } => Some(Event::ToggleSearch),
                    Input {
                        key: Key::Char('k'),
                        ctrl: true,
                        ..
                    } => Some(Event::TogglePalette),
                    Input {
                        key: Key::Char('t'),
                        ctrl: true,
                        ..
                    } => Some(Event::NewTab),
                    Input {
                        key: Key::Char('w'),
                        ctrl: true,
                        ..
                    } => Some(Event::CloseTab),
                    Input {
                        key: Key::Right,
                        alt: true,
                        ..
                    } => Some(Event::NextTab),
                    Input {
                        key: Key::Left,
                        alt: true,
                        ..
                    } => Some(Event::PrevTab),
                    Input { key: Key::Esc, .. } => Some(Event::Escape),
                    Input {
                        key: Key::Char('c'),
                        ctrl: true,
                        ..
                    } => Some(Event::Quit),
                    input => Some(Event::EditorInput(input)),
                }
            }
            _ => None,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => event,
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => self.handle_crossterm(input),
                    Some(Err(_)) => None,
                    None => None
                },
                _ = time::sleep(time::Duration::from_millis(250)) => Some(Event::Tick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
