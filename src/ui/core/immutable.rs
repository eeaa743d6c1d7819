use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A shared snapshot of component state.
///
/// Cloning is cheap and shares the value. Updating goes through
/// copy-on-write: the value is cloned only while another snapshot still
/// refers to it, so a snapshot taken before an update never changes.
pub struct Immutable<T>(Arc<T>);

impl<T> Immutable<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Whether both snapshots are the same allocation
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<T: Clone> Immutable<T> {
    /// Apply `f` to a private copy and return the new snapshot
    #[must_use]
    pub fn update(mut self, f: impl FnOnce(&mut T)) -> Self {
        f(Arc::make_mut(&mut self.0));
        self
    }

    /// Mutable access for building a new snapshot in place
    pub fn make_mut(this: &mut Self) -> &mut T {
        Arc::make_mut(&mut this.0)
    }
}

impl<T> Clone for Immutable<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Deref for Immutable<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Immutable<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Immutable<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Default> Default for Immutable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: PartialEq> PartialEq for Immutable<T> {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other) || *self.0 == *other.0
    }
}

impl<T: Eq> Eq for Immutable<T> {}

impl<T: fmt::Debug> fmt::Debug for Immutable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_leaves_earlier_snapshot_untouched() {
        let before = Immutable::new(vec![1, 2, 3]);
        let after = before.clone().update(|v| v.push(4));
        assert_eq!(*before, vec![1, 2, 3]);
        assert_eq!(*after, vec![1, 2, 3, 4]);
        assert!(!Immutable::ptr_eq(&before, &after));
    }

    #[test]
    fn test_unshared_update_reuses_allocation() {
        let state = Immutable::new(String::from("a"));
        let address = Arc::as_ptr(&state.0);
        let state = state.update(|s| s.push('b'));
        assert_eq!(Arc::as_ptr(&state.0), address);
        assert_eq!(state.as_str(), "ab");
    }
}
