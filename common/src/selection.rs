//! Checked-row tracking

use std::collections::HashSet;

/// Header checkbox state relative to the visible rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheck {
    Unchecked,
    Indeterminate,
    Checked,
}

/// Set of checked record ids for one fetch cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    ids: HashSet<i64>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`; returns whether it is now selected
    pub fn toggle(&mut self, id: i64) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// `true` replaces the selection with exactly `visible`; `false` clears it
    pub fn select_all_visible<I>(&mut self, flag: bool, visible: I)
    where
        I: IntoIterator<Item = i64>,
    {
        self.ids.clear();
        if flag {
            self.ids.extend(visible);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Drop ids that are no longer addressable; returns how many were dropped
    pub fn retain(&mut self, addressable: &HashSet<i64>) -> usize {
        let before = self.ids.len();
        self.ids.retain(|id| addressable.contains(id));
        before - self.ids.len()
    }

    /// Selected ids in ascending order
    pub fn ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn header_state(&self, visible: &[i64]) -> HeaderCheck {
        let selected_visible = visible.iter().filter(|id| self.ids.contains(*id)).count();
        if visible.is_empty() || selected_visible == 0 {
            HeaderCheck::Unchecked
        } else if selected_visible == visible.len() {
            HeaderCheck::Checked
        } else {
            HeaderCheck::Indeterminate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_membership() {
        let mut selection = SelectionTracker::new();
        assert!(selection.toggle(7));
        assert!(selection.contains(7));
        assert_eq!(selection.count(), 1);

        assert!(!selection.toggle(7));
        assert!(!selection.contains(7));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_then_unselect_all() {
        let mut selection = SelectionTracker::new();
        selection.toggle(3);
        selection.toggle(7);

        selection.select_all_visible(true, [1, 2, 3]);
        assert_eq!(selection.ids(), vec![1, 2, 3]);

        selection.select_all_visible(false, [1, 2, 3]);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_unselect_all_ignores_visible_set() {
        let mut selection = SelectionTracker::new();
        selection.select_all_visible(true, [10, 11]);
        // visible rows changed before the second click
        selection.select_all_visible(false, [99]);
        assert_eq!(selection.count(), 0);
    }

    #[test]
    fn test_retain_prunes_unaddressable() {
        let mut selection = SelectionTracker::new();
        selection.select_all_visible(true, [1, 2, 3, 4]);
        let addressable: HashSet<i64> = [2, 4, 9].into_iter().collect();
        assert_eq!(selection.retain(&addressable), 2);
        assert_eq!(selection.ids(), vec![2, 4]);
    }

    #[test]
    fn test_header_state() {
        let mut selection = SelectionTracker::new();
        assert_eq!(selection.header_state(&[1, 2]), HeaderCheck::Unchecked);
        assert_eq!(selection.header_state(&[]), HeaderCheck::Unchecked);

        selection.toggle(1);
        assert_eq!(selection.header_state(&[1, 2]), HeaderCheck::Indeterminate);

        selection.toggle(2);
        assert_eq!(selection.header_state(&[1, 2]), HeaderCheck::Checked);

        // selected rows outside the page do not count
        assert_eq!(selection.header_state(&[5, 6]), HeaderCheck::Unchecked);
    }

    #[test]
    fn test_ids_sorted() {
        let mut selection = SelectionTracker::new();
        for id in [9, 2, 5] {
            selection.toggle(id);
        }
        assert_eq!(selection.ids(), vec![2, 5, 9]);
    }
}
