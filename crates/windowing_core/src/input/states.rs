//! Per-code clickable state storage

use std::collections::HashMap;
use std::hash::Hash;

/// State of a key or mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClickableState {
    /// Not touched, or released in an earlier frame
    #[default]
    None,
    /// Went down during the current frame
    Pressed,
    /// Held down since an earlier frame (or auto-repeated by the backend)
    Repeated,
    /// Went up during the current frame
    Released,
}

impl ClickableState {
    /// Pressed or held
    pub const fn is_down(self) -> bool {
        matches!(self, Self::Pressed | Self::Repeated)
    }
}

/// Lazily populated map of code -> state
///
/// Codes only get an entry once a transition has been observed for them;
/// lookups of unknown codes read as [`ClickableState::None`].
#[derive(Debug, Clone)]
pub struct ButtonStates<C> {
    states: HashMap<C, ClickableState>,
}

impl<C: Copy + Eq + Hash> ButtonStates<C> {
    /// Create an empty state map
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Overwrite the state of `code`
    pub fn set(&mut self, code: C, state: ClickableState) {
        self.states.insert(code, state);
    }

    /// Current state of `code`
    pub fn get(&self, code: C) -> ClickableState {
        self.states.get(&code).copied().unwrap_or_default()
    }

    /// Turn every `Pressed` into `Repeated`
    pub fn promote_pressed(&mut self) {
        self.replace_all(ClickableState::Pressed, ClickableState::Repeated);
    }

    /// Turn every `Released` into `None`
    pub fn clear_released(&mut self) {
        self.replace_all(ClickableState::Released, ClickableState::None);
    }

    /// Number of codes with an entry
    pub fn tracked(&self) -> usize {
        self.states.len()
    }

    fn replace_all(&mut self, from: ClickableState, to: ClickableState) {
        for state in self.states.values_mut().filter(|state| **state == from) {
            *state = to;
        }
    }
}

impl<C: Copy + Eq + Hash> Default for ButtonStates<C> {
    fn default() -> Self {
        Self::new()
    }
}
