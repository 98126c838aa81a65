//! Selection cursors for the three scrollable lists.
//!
//! A cursor is `None` when nothing is highlighted (the `-1` of a classic list
//! view) or `Some(i)` with `i <= last index`.

/// Lists with an independent cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Results,
    Topics,
    History,
}

impl ListKind {
    /// Focus order used by the terminal UI
    pub fn next(self) -> Self {
        match self {
            ListKind::Topics => ListKind::Results,
            ListKind::Results => ListKind::History,
            ListKind::History => ListKind::Topics,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ListKind::Results => "Results",
            ListKind::Topics => "Topics",
            ListKind::History => "History",
        }
    }
}

/// Request for the view to bring a row into sight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub list: ListKind,
    pub index: usize,
    pub animated: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursors {
    pub results: Option<usize>,
    pub topics: Option<usize>,
    pub history: Option<usize>,
}

impl Cursors {
    pub fn get(&self, list: ListKind) -> Option<usize> {
        match list {
            ListKind::Results => self.results,
            ListKind::Topics => self.topics,
            ListKind::History => self.history,
        }
    }

    pub fn get_mut(&mut self, list: ListKind) -> &mut Option<usize> {
        match list {
            ListKind::Results => &mut self.results,
            ListKind::Topics => &mut self.topics,
            ListKind::History => &mut self.history,
        }
    }
}

/// Cursor after moving down one row, stopping at the last index
pub fn next_index(cursor: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match cursor {
        None => Some(0),
        Some(i) => Some((i + 1).min(len - 1)),
    }
}

/// Cursor after moving up one row; moving up from the first row clears it
pub fn previous_index(cursor: Option<usize>, len: usize) -> Option<usize> {
    match cursor {
        None | Some(0) => None,
        Some(_) if len == 0 => None,
        Some(i) => Some((i - 1).min(len - 1)),
    }
}

/// Keep a cursor in bounds after the list shrank to `new_len`
pub fn clamp_index(cursor: Option<usize>, new_len: usize) -> Option<usize> {
    match cursor {
        Some(i) if i >= new_len => new_len.checked_sub(1),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    fn in_bounds(cursor: Option<usize>, len: usize) -> bool {
        cursor.is_none_or(|i| i < len)
    }

    #[test]
    fn test_next_from_none_selects_first() {
        assert_eq!(next_index(None, 3), Some(0));
    }

    #[test]
    fn test_next_stops_at_last() {
        assert_eq!(next_index(Some(1), 3), Some(2));
        assert_eq!(next_index(Some(2), 3), Some(2));
    }

    #[test]
    fn test_next_on_empty_list() {
        assert_eq!(next_index(None, 0), None);
        assert_eq!(next_index(Some(4), 0), None);
    }

    #[test]
    fn test_previous_clears_at_top() {
        assert_eq!(previous_index(Some(2), 3), Some(1));
        assert_eq!(previous_index(Some(0), 3), None);
        assert_eq!(previous_index(None, 3), None);
    }

    #[test]
    fn test_previous_with_stale_cursor() {
        // list shrank underneath the cursor
        assert_eq!(previous_index(Some(9), 3), Some(2));
    }

    #[test]
    fn test_moves_never_leave_bounds() {
        for len in 0..6 {
            let mut cursor = None;
            for step in 0..20 {
                cursor = if step % 3 == 0 {
                    previous_index(cursor, len)
                } else {
                    next_index(cursor, len)
                };
                assert!(in_bounds(cursor, len), "len={len} step={step} cursor={cursor:?}");
            }
        }
    }

    #[test]
    fn test_clamp_after_removing_last() {
        // removed index 2 of 3, list now has 2 items
        assert_eq!(clamp_index(Some(2), 2), Some(1));
        // removed the only item
        assert_eq!(clamp_index(Some(0), 0), None);
        // removed from the middle, cursor still valid
        assert_eq!(clamp_index(Some(1), 2), Some(1));
        assert_eq!(clamp_index(None, 2), None);
    }

    #[test]
    fn test_focus_cycle() {
        let start = ListKind::Topics;
        assert_eq!(start.next().next().next(), start);
        assert_eq!(start.next(), ListKind::Results);
    }

    proptest! {
        #[test]
        fn prop_moves_stay_in_bounds(len in 0usize..50, moves in vec(any::<bool>(), 0..100)) {
            let mut cursor = None;
            for down in moves {
                cursor = if down {
                    next_index(cursor, len)
                } else {
                    previous_index(cursor, len)
                };
                prop_assert!(in_bounds(cursor, len));
            }
        }

        #[test]
        fn prop_stale_cursor_moves_back_in_bounds(cursor in 0usize..100, len in 0usize..50) {
            prop_assert!(in_bounds(next_index(Some(cursor), len), len));
            prop_assert!(in_bounds(previous_index(Some(cursor), len), len));
        }

        #[test]
        fn prop_clamp_after_shrink(cursor in proptest::option::of(0usize..100), new_len in 0usize..100) {
            let clamped = clamp_index(cursor, new_len);
            prop_assert!(in_bounds(clamped, new_len));
            if let Some(i) = cursor && i < new_len {
                prop_assert_eq!(clamped, Some(i));
            }
        }

        #[test]
        fn prop_removing_last_row_selects_new_last(len in 1usize..100) {
            prop_assert_eq!(clamp_index(Some(len - 1), len - 1), (len - 1).checked_sub(1));
        }
    }
}
