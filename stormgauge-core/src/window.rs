//! Fixed-Size Rolling Windows for Station History
//!
//! ## Overview
//!
//! Every rolling statistic the station reports is kept in a ring of slots,
//! one slot per second or per minute, with a cursor marking the slot being
//! filled. The ring never grows: when the cursor comes round again the
//! oldest slot is reused, which is exactly how the window "forgets" data that
//! has aged out.
//!
//! ## Two Ways to Move the Cursor
//!
//! Windows are filled in one of two styles, and [`CircularWindow`] supports
//! both:
//!
//! - **Sampled** (`push`): one complete value per slot. The value is written
//!   into the current slot and the cursor moves on. The per-second wind
//!   window works this way.
//! - **Accumulated** (`advance`): the current slot is built up over time
//!   (rain tips in this minute, the highest gust in this minute). Moving on
//!   to a new slot must first wipe what was left there from a full lap ago,
//!   so `advance` zeroes the new current slot before handing it out. The
//!   rain and gust windows work this way.
//!
//! ```text
//! CircularWindow<f32, 5>, cursor = 2, after advance():
//! ┌─────┬─────┬─────┬─────┬─────┐
//! │ 0.0 │ 0.1 │ 0.3 │ 0.0 │ 0.2 │   before
//! └─────┴─────┴─────┴─────┴─────┘
//!                ↑ cursor
//! ┌─────┬─────┬─────┬─────┬─────┐
//! │ 0.0 │ 0.1 │ 0.3 │ 0.0 │ 0.2 │   after: slot 3 expired (already zero)
//! └─────┴─────┴─────┴─────┴─────┘
//!                      ↑ cursor
//! ```
//!
//! Unwritten slots hold `T::default()` and take part in every reduction, so a
//! freshly booted station averages against zeros until the window has filled
//! once. That bias is accepted; it lasts two minutes at most.
//!
//! ## Memory Layout
//!
//! Storage is a plain `[T; N]` plus one `usize`, with no `Option` wrapper:
//! every slot always holds a value.

/// Fixed-capacity ring of slots with a wrapping write cursor
///
/// ## Type Parameters
///
/// - `T`: slot contents. `Default` is the "empty" value an expired slot is
///   reset to.
/// - `N`: number of slots, fixed at compile time. Must be non-zero.
///
/// ## Internal Invariants
///
/// - `cursor < N`
/// - Physical slot order never changes; only the cursor moves
#[derive(Debug, Clone, PartialEq)]
pub struct CircularWindow<T, const N: usize> {
    /// Slot storage, indexed physically
    slots: [T; N],

    /// Slot currently being written
    cursor: usize,
}

impl<T: Copy + Default, const N: usize> CircularWindow<T, N> {
    const NON_EMPTY: () = assert!(N > 0, "a window needs at least one slot");

    /// Creates a window with every slot empty and the cursor on slot 0
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;

        Self {
            slots: [T::default(); N],
            cursor: 0,
        }
    }

    /// Writes a complete sample into the current slot and moves on
    ///
    /// The previous contents of the slot are overwritten, not merged. After
    /// `N + 1` pushes the last one has replaced the very first:
    ///
    /// ```rust
    /// # use stormgauge_core::CircularWindow;
    /// let mut window = CircularWindow::<u16, 3>::new();
    /// for v in 1..=4 {
    ///     window.push(v);
    /// }
    /// assert_eq!(window.slots(), &[4, 2, 3]);
    /// assert_eq!(window.cursor(), 1);
    /// ```
    pub fn push(&mut self, value: T) {
        self.slots[self.cursor] = value;
        self.cursor = (self.cursor + 1) % N;
    }

    /// Moves to the next slot, expiring whatever it held
    ///
    /// Returns the freshly emptied slot so the caller can start filling it.
    pub fn advance(&mut self) -> &mut T {
        self.cursor = (self.cursor + 1) % N;
        self.slots[self.cursor] = T::default();
        &mut self.slots[self.cursor]
    }

    /// Puts the cursor back on slot 0 without touching the contents
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}

impl<T, const N: usize> CircularWindow<T, N> {
    /// Index of the slot being written
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Slot being written
    pub fn current(&self) -> &T {
        &self.slots[self.cursor]
    }

    /// Slot being written, for accumulation in place
    pub fn current_mut(&mut self) -> &mut T {
        &mut self.slots[self.cursor]
    }

    /// All slots in physical order
    pub fn slots(&self) -> &[T] {
        &self.slots
    }

    /// Iterate over slots in physical order (slot 0 first)
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.slots.iter()
    }
}

impl<T: Copy + Default, const N: usize> Default for CircularWindow<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_window_is_empty() {
        let window = CircularWindow::<f32, 5>::new();
        assert_eq!(window.slots().len(), 5);
        assert_eq!(window.cursor(), 0);
        assert!(window.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn push_wraps_and_overwrites_oldest() {
        let mut window = CircularWindow::<u16, 120>::new();

        for i in 0..121u16 {
            window.push(i + 1);
        }

        // 121st sample landed in slot 0, the other 119 are untouched
        assert_eq!(window.slots()[0], 121);
        assert_eq!(window.cursor(), 1);
        let rest: Vec<u16> = window.iter().skip(1).copied().collect();
        assert_eq!(rest, (2..=120).collect::<Vec<u16>>());
    }

    #[test]
    fn advance_expires_new_slot() {
        let mut window = CircularWindow::<f32, 3>::new();

        *window.current_mut() += 0.5;
        *window.advance() += 0.25;
        window.advance();

        assert_eq!(window.slots(), &[0.5, 0.25, 0.0]);

        // Coming back round clears the slot from a lap ago
        window.advance();
        assert_eq!(window.cursor(), 0);
        assert_eq!(*window.current(), 0.0);
        assert_eq!(window.slots(), &[0.0, 0.25, 0.0]);
    }

    #[test]
    fn rewind_keeps_contents() {
        let mut window = CircularWindow::<u16, 4>::new();
        window.push(7);
        window.push(8);

        window.rewind();
        assert_eq!(window.cursor(), 0);
        assert_eq!(window.slots(), &[7, 8, 0, 0]);
    }
}
