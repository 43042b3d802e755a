//! Uniform read-only access to sequences that may be absent.
//!
//! [`Sequence`] abstracts over slices, vectors and optional slices so the
//! derived helpers are written once and stay total: an absent sequence
//! reads as the empty slice, and no operation here can fail.

/// Read-only view of an ordered sequence, present or absent.
///
/// Implemented for `[T]`, `Vec<T>` and `Option<&S>` for any sequence `S`.
/// The `Option` implementation is what makes every provided method total
/// over absence:
///
/// ```
/// use seqops::Sequence;
///
/// let absent: Option<&[i32]> = None;
/// assert!(absent.pairs().is_empty());
/// assert_eq!(absent.first(), None);
/// ```
pub trait Sequence<T> {
    /// Returns the underlying elements; empty when the sequence is absent.
    fn as_seq(&self) -> &[T];

    /// Returns a new vector with `sep` inserted between each pair of
    /// adjacent elements.
    ///
    /// Empty and absent input produce an empty vector; a single element is
    /// returned alone. A separator is never inserted at the front or the
    /// back.
    fn interspersed(&self, sep: &T) -> Vec<T>
    where
        T: Clone,
    {
        let seq = self.as_seq();
        let mut res = Vec::with_capacity(seq.len().saturating_mul(2).saturating_sub(1));
        for (i, el) in seq.iter().enumerate() {
            if i > 0 {
                res.push(sep.clone());
            }
            res.push(el.clone());
        }
        res
    }

    /// Returns the consecutive element pairs `[(e0, e1), (e1, e2), ..]`.
    ///
    /// Absent input or fewer than two elements yield an empty vector.
    fn pairs(&self) -> Vec<(T, T)>
    where
        T: Clone,
    {
        self.as_seq()
            .windows(2)
            .map(|w| (w[0].clone(), w[1].clone()))
            .collect()
    }

    /// Like [`pairs`](Sequence::pairs), with a final `(last, first)` pair
    /// closing the cycle.
    ///
    /// A one-element sequence yields exactly the wrap pair, with the
    /// element paired with itself, since first and last coincide. Empty and
    /// absent input stay empty: there is no previous element to close
    /// against.
    fn pairs_wrapped(&self) -> Vec<(T, T)>
    where
        T: Clone,
    {
        let seq = self.as_seq();
        let mut res = self.pairs();
        if let (Some(last), Some(first)) = (seq.last(), seq.first()) {
            res.push((last.clone(), first.clone()));
        }
        res
    }

    /// Returns `None` when the sequence is absent or empty, the elements
    /// otherwise.
    fn non_empty(&self) -> Option<&[T]> {
        let seq = self.as_seq();
        if seq.is_empty() { None } else { Some(seq) }
    }

    /// Returns the first element, or `None` when absent or empty.
    ///
    /// On slices this mirrors the inherent method; it exists so that
    /// optional sequences can be queried uniformly.
    fn first(&self) -> Option<&T> {
        self.as_seq().first()
    }

    /// Returns the last element, or `None` when absent or empty.
    fn last(&self) -> Option<&T> {
        self.as_seq().last()
    }
}

impl<T> Sequence<T> for [T] {
    fn as_seq(&self) -> &[T] {
        self
    }
}

impl<T> Sequence<T> for Vec<T> {
    fn as_seq(&self) -> &[T] {
        self
    }
}

impl<T, S> Sequence<T> for Option<&S>
where
    S: Sequence<T> + ?Sized,
{
    fn as_seq(&self) -> &[T] {
        self.map_or(&[], |s| s.as_seq())
    }
}
