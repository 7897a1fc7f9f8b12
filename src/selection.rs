use std::collections::HashMap;

use crate::model::{DuplicateGroup, Scene};

/// Which scenes the operator has marked for deletion, keyed by scene id.
///
/// An absent id reads as unmarked. Keys are never removed once tracked;
/// resets flip them back to `false`, so a scene that scrolls off the page
/// and back keeps a stable entry. One instance belongs to one operator
/// session and is never shared across sessions.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    marked: HashMap<String, bool>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point update; setting the same value twice is a no-op.
    pub fn set(&mut self, scene_id: &str, value: bool) {
        self.marked.insert(scene_id.to_string(), value);
    }

    pub fn get(&self, scene_id: &str) -> bool {
        self.marked.get(scene_id).copied().unwrap_or(false)
    }

    /// Flip every tracked id in `known_ids` back to `false`.
    ///
    /// Ids outside the set keep their value; untracked ids stay untracked
    /// (they already read as `false`); nothing is removed.
    pub fn reset_all<I, S>(&mut self, known_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in known_ids {
            if let Some(slot) = self.marked.get_mut(id.as_ref()) {
                *slot = false;
            }
        }
    }

    /// Number of ids currently marked `true`.
    pub fn count_selected(&self) -> usize {
        self.marked.values().filter(|v| **v).count()
    }

    /// Number of ids ever tracked, marked or not.
    pub fn len(&self) -> usize {
        self.marked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    /// Scenes of `group` currently marked, in group order.
    pub fn selected_in<'g>(&self, group: &'g DuplicateGroup) -> Vec<&'g Scene> {
        group.scenes.iter().filter(|s| self.get(&s.id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_id_reads_false() {
        let state = SelectionState::new();
        assert!(!state.get("never-seen"));
        assert_eq!(state.count_selected(), 0);
    }

    #[test]
    fn set_and_count() {
        let mut state = SelectionState::new();
        state.set("a", true);
        state.set("b", true);
        state.set("c", false);
        assert_eq!(state.count_selected(), 2);
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn reset_all_flips_to_false_without_removing() {
        let mut state = SelectionState::new();
        state.set("a", true);
        state.set("b", true);
        state.reset_all(["a", "b"]);
        assert_eq!(state.count_selected(), 0);
        assert!(!state.get("a"));
        assert!(!state.get("b"));
        // Keys survive the reset
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn reset_all_ignores_ids_outside_the_set() {
        let mut state = SelectionState::new();
        state.set("kept", true);
        state.set("reset", true);
        state.reset_all(["reset", "untracked"]);
        assert!(state.get("kept"));
        assert!(!state.get("reset"));
        // "untracked" was not invented as a key
        assert_eq!(state.len(), 2);
    }
}
