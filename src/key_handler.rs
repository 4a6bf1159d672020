use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::state::ScrollKey;

#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    Quit,
    Back,
    Help,
    Scroll(ScrollKey),
    Wheel(f64),
    SlidePrevious,
    SlideNext,
    GoToSection(usize),
    ToggleTheme,
    ToggleMenu,
    PointerDown { column: u16, row: u16 },
    PointerUp { column: u16, row: u16 },
    PointerMove { column: u16, row: u16 },
    Resize { columns: u16, rows: u16 },
    None,
}

#[derive(Debug, Default)]
pub struct KeyHandler;

impl KeyHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn on_event(&mut self, event: Event) -> PageAction {
        match event {
            // it's important to check KeyEventKind::Press to avoid handling key release events
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Mouse(mouse) => self.on_mouse_event(mouse),
            Event::Resize(columns, rows) => PageAction::Resize { columns, rows },
            _ => PageAction::None,
        }
    }

    pub fn on_key_event(&mut self, key: KeyEvent) -> PageAction {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Esc) => PageAction::Back,
            (_, KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => PageAction::Quit,
            (_, KeyCode::Char('?')) => PageAction::Help,
            (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => {
                PageAction::Scroll(ScrollKey::ArrowUp)
            }
            (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => {
                PageAction::Scroll(ScrollKey::ArrowDown)
            }
            (KeyModifiers::NONE, KeyCode::PageUp) => PageAction::Scroll(ScrollKey::PageUp),
            (KeyModifiers::NONE, KeyCode::PageDown) => PageAction::Scroll(ScrollKey::PageDown),
            (KeyModifiers::NONE, KeyCode::Left | KeyCode::Char('h')) => PageAction::SlidePrevious,
            (KeyModifiers::NONE, KeyCode::Right | KeyCode::Char('l')) => PageAction::SlideNext,
            (KeyModifiers::NONE, KeyCode::Char('t')) => PageAction::ToggleTheme,
            (KeyModifiers::NONE, KeyCode::Char('m')) => PageAction::ToggleMenu,
            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='9')) => {
                PageAction::GoToSection(c as usize - '1' as usize)
            }
            _ => PageAction::None,
        }
    }

    pub fn on_mouse_event(&mut self, mouse: MouseEvent) -> PageAction {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::ScrollDown => PageAction::Wheel(1.0),
            MouseEventKind::ScrollUp => PageAction::Wheel(-1.0),
            MouseEventKind::Down(MouseButton::Left) => PageAction::PointerDown { column, row },
            MouseEventKind::Up(MouseButton::Left) => PageAction::PointerUp { column, row },
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                PageAction::PointerMove { column, row }
            }
            _ => PageAction::None,
        }
    }
}
