use crate::content::PageContent;
use crate::gesture::NavIntent;
use crate::sheet::{sheet_count, Face};

/// Faces that currently play their entrance animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveFaces {
    /// Sheet whose front is showing on the right.
    pub front: Option<usize>,
    /// Sheet whose back is showing on the left.
    pub back: Option<usize>,
}

/// The pages lying open in front of the reader.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Spread<'a> {
    pub left: Option<&'a PageContent>,
    pub right: Option<&'a PageContent>,
}

/// Navigation state of the book: how many sheets have been turned.
///
/// `current` ranges over `0..=total`. Sheet `i` is flipped exactly when
/// `i < current`. Every transition moves `current` by one and saturates at
/// both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SheetStack {
    current: usize,
    total: usize,
    last_turned: Option<usize>,
}

impl SheetStack {
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total,
            last_turned: None,
        }
    }

    pub fn for_content(content: &[PageContent]) -> Self {
        Self::new(sheet_count(content.len()))
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn last_turned(&self) -> Option<usize> {
        self.last_turned
    }

    pub fn can_advance(&self) -> bool {
        self.current < self.total
    }

    pub fn can_retreat(&self) -> bool {
        self.current > 0
    }

    /// Both piles hold at least one sheet, so the book lies open.
    pub fn is_open(&self) -> bool {
        self.current > 0 && self.current < self.total
    }

    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.last_turned = Some(self.current);
        self.current += 1;
        true
    }

    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.current -= 1;
        self.last_turned = Some(self.current);
        true
    }

    /// Click on a sheet: only the two sheets on top of the piles react.
    pub fn flip_sheet_at(&mut self, index: usize) -> bool {
        if index == self.current {
            self.advance()
        } else if index + 1 == self.current {
            self.retreat()
        } else {
            false
        }
    }

    pub fn apply(&mut self, intent: NavIntent) -> bool {
        match intent {
            NavIntent::Forward => self.advance(),
            NavIntent::Backward => self.retreat(),
            NavIntent::FlipSheet(index) => self.flip_sheet_at(index),
        }
    }

    pub fn flip_state_of(&self, index: usize) -> bool {
        index < self.current
    }

    /// Stacking rank within a pile. Flipped sheets rise with their index so
    /// the latest one lies on top of the left pile; unflipped sheets fall
    /// with their index so the next one to turn lies on top of the right.
    pub fn z_order_of(&self, index: usize) -> usize {
        if index < self.current {
            index
        } else {
            self.total.saturating_sub(index)
        }
    }

    /// z-index handed to the renderer. The two piles reuse numbers, which is
    /// harmless at rest because they never overlap; the sheet that turned
    /// last crosses over the other pile, so it is lifted above every rank.
    pub fn render_z_of(&self, index: usize) -> usize {
        if self.last_turned == Some(index) {
            self.total + 1
        } else {
            self.z_order_of(index)
        }
    }

    pub fn active_faces(&self) -> ActiveFaces {
        ActiveFaces {
            front: (self.current < self.total).then_some(self.current),
            back: self.current.checked_sub(1),
        }
    }

    pub fn is_face_active(&self, index: usize, face: Face) -> bool {
        let active = self.active_faces();
        match face {
            Face::Front => active.front == Some(index),
            Face::Back => active.back == Some(index),
        }
    }

    pub fn open_spread<'a>(&self, content: &'a [PageContent]) -> Spread<'a> {
        let active = self.active_faces();
        Spread {
            left: active
                .back
                .and_then(|sheet| content.get(sheet * 2 + 1)),
            right: active.front.and_then(|sheet| content.get(sheet * 2)),
        }
    }

    /// Position readout: the two pages of the sheet turned last, or
    /// `COVER`/`END` while the book is closed.
    pub fn status_label(&self, content: &[PageContent]) -> String {
        if self.current == 0 {
            return "COVER".to_string();
        }
        if self.current >= self.total {
            return "END".to_string();
        }
        let turned = self.current - 1;
        pair_label(content.get(turned * 2), content.get(turned * 2 + 1))
    }

    /// Ids of the pages lying open, left then right.
    pub fn spread_label(&self, content: &[PageContent]) -> String {
        let spread = self.open_spread(content);
        pair_label(spread.left, spread.right)
    }

    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current, self.total)
    }
}

fn pair_label(first: Option<&PageContent>, second: Option<&PageContent>) -> String {
    match (first, second) {
        (Some(first), Some(second)) => format!("{} — {}", first.id(), second.id()),
        (Some(page), None) | (None, Some(page)) => page.id().to_string(),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stack_starts_closed() {
        let stack = SheetStack::new(4);
        assert_eq!(stack.current(), 0);
        assert!(!stack.is_open());
        assert!(stack.can_advance());
        assert!(!stack.can_retreat());
        assert_eq!(stack.last_turned(), None);
    }

    #[test]
    fn advance_records_the_turned_sheet() {
        let mut stack = SheetStack::new(3);
        assert!(stack.advance());
        assert_eq!(stack.last_turned(), Some(0));
        assert!(stack.advance());
        assert_eq!(stack.last_turned(), Some(1));
        assert!(stack.retreat());
        assert_eq!(stack.last_turned(), Some(1));
        assert!(stack.retreat());
        assert_eq!(stack.last_turned(), Some(0));
    }

    #[test]
    fn saturated_moves_keep_last_turned() {
        let mut stack = SheetStack::new(1);
        assert!(!stack.retreat());
        assert_eq!(stack.last_turned(), None);
        assert!(stack.advance());
        assert!(!stack.advance());
        assert_eq!(stack.last_turned(), Some(0));
    }

    #[test]
    fn empty_book_never_moves() {
        let mut stack = SheetStack::new(0);
        assert!(!stack.advance());
        assert!(!stack.retreat());
        assert!(!stack.flip_sheet_at(0));
        assert_eq!(stack.active_faces(), ActiveFaces::default());
        assert_eq!(stack.status_label(&[]), "COVER");
    }

    #[test]
    fn turning_sheet_is_lifted_above_both_piles() {
        let mut stack = SheetStack::new(4);
        stack.advance();
        stack.advance();
        let turned = stack.render_z_of(1);
        for index in [0, 2, 3] {
            assert!(turned > stack.render_z_of(index));
        }

        stack.retreat();
        let turned = stack.render_z_of(1);
        for index in [0, 2, 3] {
            assert!(turned > stack.render_z_of(index));
        }
    }

    #[test]
    fn position_label_counts_turned_sheets() {
        let mut stack = SheetStack::new(4);
        stack.advance();
        assert_eq!(stack.position_label(), "1 / 4");
    }
}
