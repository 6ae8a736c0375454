//! Leptos Slideshow Utilities
//!
//! Wrapping slide cursor for carousels, plus the signal bundle that
//! components share to read and move it.

use leptos::prelude::*;

/// Step direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Index into a fixed-length list of slides, wrapping at both ends
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlideCursor {
    index: usize,
    len: usize,
}

impl SlideCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move one slide; Next past the last slide lands on 0, Prev before 0
    /// lands on the last slide.
    pub fn step(self, direction: Direction) -> Self {
        if self.len == 0 {
            return self;
        }
        let index = match direction {
            Direction::Next => {
                if self.index + 1 >= self.len { 0 } else { self.index + 1 }
            }
            Direction::Prev => {
                if self.index == 0 { self.len - 1 } else { self.index - 1 }
            }
        };
        Self { index, len: self.len }
    }
}

/// Slide state signals
#[derive(Clone, Copy)]
pub struct SlideSignals {
    pub cursor_read: ReadSignal<SlideCursor>,
    pub cursor_write: WriteSignal<SlideCursor>,
}

pub fn create_slide_signals(len: usize) -> SlideSignals {
    let (cursor_read, cursor_write) = signal(SlideCursor::new(len));
    SlideSignals { cursor_read, cursor_write }
}

impl SlideSignals {
    /// Current index (tracked)
    pub fn index(&self) -> usize {
        self.cursor_read.get().index()
    }

    pub fn advance(&self, direction: Direction) {
        self.cursor_write.update(|cursor| *cursor = cursor.step(direction));
    }

    /// Start over at slide 0 with a new slide count
    pub fn reset(&self, len: usize) {
        self.cursor_write.set(SlideCursor::new(len));
    }
}

/// CSS class for a slide figure
pub fn slide_class(is_current: bool) -> &'static str {
    if is_current { "show" } else { "hide" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor_at(index: usize, len: usize) -> SlideCursor {
        let mut cursor = SlideCursor::new(len);
        for _ in 0..index {
            cursor = cursor.step(Direction::Next);
        }
        cursor
    }

    #[test]
    fn test_next_wraps_to_first() {
        let cursor = cursor_at(2, 3);
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.step(Direction::Next).index(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let cursor = SlideCursor::new(3);
        assert_eq!(cursor.step(Direction::Prev).index(), 2);
    }

    #[test]
    fn test_full_cycle_returns_home() {
        let mut forward = SlideCursor::new(3);
        let mut backward = SlideCursor::new(3);
        let mut seen = Vec::new();
        for _ in 0..3 {
            forward = forward.step(Direction::Next);
            backward = backward.step(Direction::Prev);
            seen.push(forward.index());
        }
        assert_eq!(seen, vec![1, 2, 0]);
        assert_eq!(forward.index(), 0);
        assert_eq!(backward.index(), 0);
    }

    #[test]
    fn test_single_slide_stays_put() {
        let cursor = SlideCursor::new(1);
        assert_eq!(cursor.step(Direction::Next).index(), 0);
        assert_eq!(cursor.step(Direction::Prev).index(), 0);
    }

    #[test]
    fn test_empty_cursor() {
        let cursor = SlideCursor::new(0);
        assert!(cursor.is_empty());
        assert_eq!(cursor.step(Direction::Next), cursor);
        assert_eq!(cursor.step(Direction::Prev).index(), 0);
    }

    #[test]
    fn test_slide_class() {
        assert_eq!(slide_class(true), "show");
        assert_eq!(slide_class(false), "hide");
    }
}
