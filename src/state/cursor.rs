//! Custom cursor follower.

/// Pointer position in terminal cells plus the hover flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorFollower {
    position: Option<(u16, u16)>,
    hover: bool,
}

impl CursorFollower {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, column: u16, row: u16) {
        self.position = Some((column, row));
    }

    /// Set while the pointer is over a link, button, card or skill item.
    pub fn set_hover(&mut self, hover: bool) {
        self.hover = hover;
    }

    /// `None` until the pointer has moved at least once.
    pub fn position(&self) -> Option<(u16, u16)> {
        self.position
    }

    pub fn is_hovering(&self) -> bool {
        self.hover
    }

    pub fn glyph(&self) -> &'static str {
        if self.hover {
            "◉"
        } else {
            "•"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_moved() {
        let cursor = CursorFollower::new();
        assert_eq!(cursor.position(), None);
        assert!(!cursor.is_hovering());
    }

    #[test]
    fn test_follows_pointer_and_hover() {
        let mut cursor = CursorFollower::new();
        cursor.move_to(10, 4);
        cursor.set_hover(true);
        assert_eq!(cursor.position(), Some((10, 4)));
        assert_eq!(cursor.glyph(), "◉");
        cursor.set_hover(false);
        assert_eq!(cursor.glyph(), "•");
    }
}
