//! Scrolling window over a listing.

/// The slice of a listing that fits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window<'a, T> {
    /// Index of `visible[0]` in the full listing.
    pub start: usize,
    pub visible: &'a [T],
}

impl<T> Window<'_, T> {
    /// Screen row of `cursor`, if it is inside the window.
    pub fn row_of(&self, cursor: usize) -> Option<usize> {
        cursor
            .checked_sub(self.start)
            .filter(|row| *row < self.visible.len())
    }
}

/// Computes the visible window of `items` for a display `height` rows tall.
///
/// While the cursor is on the first page the window starts at the top. Once
/// the cursor moves past it the window scrolls so the cursor sits on the
/// bottom row ("sticky bottom"); a window is only shorter than `height` when
/// it runs past the end of `items`.
pub fn window<T>(items: &[T], cursor: usize, height: usize) -> Window<'_, T> {
    if height == 0 || items.is_empty() {
        return Window {
            start: 0,
            visible: &[],
        };
    }

    let start = if cursor + 1 > height {
        cursor + 1 - height
    } else {
        0
    };
    let start = start.min(items.len());
    let end = (start + height).min(items.len());

    Window {
        start,
        visible: &items[start..end],
    }
}
