//! Extensions for building and pruning vectors in place.

/// Extension trait adding uniqueness-aware append and value-based removal
/// operations to `Vec<T>`.
///
/// "Already present" always means equality under `PartialEq`; no element is
/// ever duplicated with respect to that comparison by the `*_unique`
/// operations. Membership checks are linear scans, which is the right
/// trade-off for the short vectors these helpers are meant for.
pub trait VecExt<T> {
    /// Appends `el` unless an equal element is already present.
    ///
    /// Returns `true` if the element was appended.
    fn push_unique(&mut self, el: T) -> bool
    where
        T: PartialEq;

    /// Appends every element of `els`, in order.
    ///
    /// An empty `els` is a no-op; callers holding an `Option` of a
    /// collection can pass `els.unwrap_or_default()`.
    fn push_all<I>(&mut self, els: I)
    where
        I: IntoIterator<Item = T>;

    /// Appends each element of `els` that is not already present.
    ///
    /// Uniqueness is checked against the growing vector, so duplicates
    /// within `els` itself are suppressed as well. Returns the number of
    /// elements appended.
    fn push_all_unique<I>(&mut self, els: I) -> usize
    where
        I: IntoIterator<Item = T>,
        T: PartialEq;

    /// Removes the first element equal to `el`, preserving the order of the
    /// remaining elements.
    ///
    /// Returns `true` if a removal occurred.
    fn remove_first(&mut self, el: &T) -> bool
    where
        T: PartialEq;

    /// Removes every element equal to `el`.
    ///
    /// Returns the number of elements removed.
    fn remove_all(&mut self, el: &T) -> usize
    where
        T: PartialEq;
}

impl<T> VecExt<T> for Vec<T> {
    fn push_unique(&mut self, el: T) -> bool
    where
        T: PartialEq,
    {
        if self.contains(&el) {
            return false;
        }
        self.push(el);
        true
    }

    fn push_all<I>(&mut self, els: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(els);
    }

    fn push_all_unique<I>(&mut self, els: I) -> usize
    where
        I: IntoIterator<Item = T>,
        T: PartialEq,
    {
        let mut pushed = 0;
        for el in els {
            if self.push_unique(el) {
                pushed += 1;
            }
        }
        pushed
    }

    fn remove_first(&mut self, el: &T) -> bool
    where
        T: PartialEq,
    {
        match self.iter().position(|v| v == el) {
            Some(idx) => {
                self.remove(idx);
                true
            }
            None => false,
        }
    }

    fn remove_all(&mut self, el: &T) -> usize
    where
        T: PartialEq,
    {
        let before = self.len();
        self.retain(|v| v != el);
        before - self.len()
    }
}
