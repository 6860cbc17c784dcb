//! Window registry
//!
//! Maps stable [`WindowId`] handles to the windows a device created. The
//! registry is an ordinary value owned by whoever creates windows, so its
//! lifetime is the owner's lifetime; there is no process-wide lookup table.

use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to a registered window
    pub struct WindowId;
}

/// Handle-based map of live windows
#[derive(Debug)]
pub struct WindowRegistry<W> {
    windows: SlotMap<WindowId, W>,
}

impl<W> WindowRegistry<W> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            windows: SlotMap::with_key(),
        }
    }

    /// Register a window and return its handle
    pub fn insert(&mut self, window: W) -> WindowId {
        self.windows.insert(window)
    }

    /// Look up a window
    pub fn get(&self, id: WindowId) -> Option<&W> {
        self.windows.get(id)
    }

    /// Look up a window mutably
    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut W> {
        self.windows.get_mut(id)
    }

    /// Unregister a window, handing it back to the caller
    pub fn remove(&mut self, id: WindowId) -> Option<W> {
        self.windows.remove(id)
    }

    /// Check whether `id` refers to a live window
    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(id)
    }

    /// Number of live windows
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// True when no window is registered
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Iterate over `(id, window)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (WindowId, &W)> {
        self.windows.iter()
    }

    /// Iterate mutably over `(id, window)` pairs
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (WindowId, &mut W)> {
        self.windows.iter_mut()
    }
}

impl<W> Default for WindowRegistry<W> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut registry = WindowRegistry::new();
        let main = registry.insert("main");
        let tools = registry.insert("tools");

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(main), Some(&"main"));
        assert_eq!(registry.get(tools), Some(&"tools"));
    }

    #[test]
    fn test_removed_id_is_dead() {
        let mut registry = WindowRegistry::new();
        let id = registry.insert(1);

        assert_eq!(registry.remove(id), Some(1));
        assert!(!registry.contains(id));
        assert!(registry.get(id).is_none());
        assert!(registry.is_empty());

        // The freed slot is reused with a new generation
        let next = registry.insert(2);
        assert_ne!(id, next);
        assert!(registry.get(id).is_none());
    }

    #[test]
    fn test_iter_mut_updates_in_place() {
        let mut registry = WindowRegistry::new();
        registry.insert(1);
        registry.insert(2);

        for (_, value) in registry.iter_mut() {
            *value *= 10;
        }

        let mut values: Vec<_> = registry.iter().map(|(_, value)| *value).collect();
        values.sort_unstable();
        assert_eq!(values, vec![10, 20]);
    }
}
