//! Manager for multiple societies and the current selection
//!
//! Societies accumulate for the session lifetime; there is no deletion.
//! The current selection is an index, re-pointed by `select_society`.

use crate::being::Being;
use crate::society::{MicroSociety, SocietySummary};

#[derive(Debug, Default)]
pub struct SocietyManager {
    societies: Vec<MicroSociety>,
    current: Option<usize>,
}

impl SocietyManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a society and make it the current one
    pub fn create_society(
        &mut self,
        name: impl Into<String>,
        goal: impl Into<String>,
        beings: Vec<Being>,
        seed: u64,
    ) -> &mut MicroSociety {
        let index = self.societies.len();
        self.societies
            .push(MicroSociety::new(name, goal, beings, seed));
        self.current = Some(index);
        &mut self.societies[index]
    }

    /// Select by index. Out-of-range leaves the selection untouched and
    /// returns None rather than panicking.
    pub fn select_society(&mut self, index: usize) -> Option<&MicroSociety> {
        if index >= self.societies.len() {
            return None;
        }
        self.current = Some(index);
        Some(&self.societies[index])
    }

    pub fn current(&self) -> Option<&MicroSociety> {
        self.current.map(|i| &self.societies[i])
    }

    pub fn current_mut(&mut self) -> Option<&mut MicroSociety> {
        self.current.map(move |i| &mut self.societies[i])
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn get(&self, index: usize) -> Option<&MicroSociety> {
        self.societies.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut MicroSociety> {
        self.societies.get_mut(index)
    }

    /// Owned snapshots for list views; callers cannot reach internal state
    pub fn list_societies(&self) -> Vec<SocietySummary> {
        self.societies.iter().map(|s| s.summary()).collect()
    }

    pub fn len(&self) -> usize {
        self.societies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.societies.is_empty()
    }
}
