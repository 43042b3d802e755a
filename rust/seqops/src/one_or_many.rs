//! Normalization of loosely typed "one value or a list" inputs.
//!
//! [`OneOrMany`] models the union of a single scalar and a sequence, the
//! shape loosely typed configuration commonly takes (`"x"` or `["x"]`).
//! With the `serde` feature enabled it deserializes untagged, accepting
//! either form directly.

/// A value that is either a single bare element or a sequence of elements.
///
/// ```
/// use seqops::OneOrMany;
///
/// assert_eq!(OneOrMany::One("x").into_vec(), ["x"]);
/// assert_eq!(OneOrMany::Many(vec!["x", "y"]).into_vec(), ["x", "y"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum OneOrMany<T> {
    /// A single bare element.
    One(T),
    /// An already-sequential value.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Returns `true` iff the value is an actual sequence rather than a
    /// bare element.
    pub fn is_seq(&self) -> bool {
        matches!(self, OneOrMany::Many(_))
    }

    /// Normalizes the value into a vector.
    ///
    /// A sequence passes through unchanged. A bare element becomes a
    /// one-element vector unless it is falsy (see [`Truthy`]), in which
    /// case the result is empty: `0`, `""` and `false` normalize to no
    /// values at all, not to a sequence containing them. The "no value"
    /// family of the loosely typed sources this models is wider than
    /// absence alone, and that contract is preserved here.
    pub fn into_vec(self) -> Vec<T>
    where
        T: Truthy,
    {
        match self {
            OneOrMany::One(v) if v.is_truthy() => vec![v],
            OneOrMany::One(_) => Vec::new(),
            OneOrMany::Many(v) => v,
        }
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(v: Vec<T>) -> Self {
        OneOrMany::Many(v)
    }
}

/// Normalizes an optional loose value into a vector; absence yields the
/// empty vector.
pub fn to_vec<T: Truthy>(value: Option<OneOrMany<T>>) -> Vec<T> {
    value.map_or_else(Vec::new, OneOrMany::into_vec)
}

/// Falsiness for scalar values, after the manner of loosely typed
/// languages: zero, NaN, the empty string and `false` count as "no value".
///
/// Types without a falsy state can opt in with an always-true
/// implementation.
pub trait Truthy {
    /// Returns `false` when the value is one of the falsy states.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! int_truthy {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

int_truthy!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_truthy {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            // Both zeroes and NaN are falsy.
            fn is_truthy(&self) -> bool {
                *self != 0.0 && !self.is_nan()
            }
        })*
    };
}

float_truthy!(f32, f64);

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_vec_identity() {
        assert_eq!(OneOrMany::Many(vec![1, 2, 3]).into_vec(), [1, 2, 3]);
        assert_eq!(OneOrMany::One(1).into_vec(), [1]);
        assert_eq!(OneOrMany::Many(Vec::<i32>::new()).into_vec(), [] as [i32; 0]);
    }

    #[test]
    fn test_falsy_scalars() {
        assert_eq!(OneOrMany::One(0).into_vec(), Vec::<i32>::new());
        assert_eq!(OneOrMany::One("").into_vec(), Vec::<&str>::new());
        assert_eq!(OneOrMany::One(false).into_vec(), Vec::<bool>::new());
        assert_eq!(OneOrMany::One(0.0f64).into_vec(), Vec::<f64>::new());
        assert_eq!(OneOrMany::One(f64::NAN).into_vec(), Vec::<f64>::new());
    }

    #[test]
    fn test_falsy_inside_many_is_kept() {
        // Falsiness only affects bare elements, never sequence contents.
        assert_eq!(OneOrMany::Many(vec![0, 1]).into_vec(), [0, 1]);
    }

    #[test]
    fn test_to_vec_absent() {
        assert_eq!(to_vec::<i32>(None), [] as [i32; 0]);
    }

    #[test]
    fn test_to_vec_present() {
        assert_eq!(to_vec(Some(OneOrMany::One(1))), [1]);
        assert_eq!(to_vec(Some(OneOrMany::Many(vec![1, 2]))), [1, 2]);
    }

    #[test]
    fn test_is_seq() {
        assert!(OneOrMany::<i32>::Many(Vec::new()).is_seq());
        assert!(OneOrMany::Many(vec![1]).is_seq());
        assert!(!OneOrMany::One(1).is_seq());
    }

    #[test]
    fn test_from_vec() {
        let v: OneOrMany<i32> = vec![1, 2].into();
        assert!(v.is_seq());
        assert_eq!(v.into_vec(), [1, 2]);
    }

    #[test]
    fn test_truthy() {
        assert!(1.is_truthy());
        assert!((-1).is_truthy());
        assert!(!0.is_truthy());
        assert!(!false.is_truthy());
        assert!(true.is_truthy());
        assert!("x".is_truthy());
        assert!(!"".is_truthy());
        assert!(!String::new().is_truthy());
        assert!(0.5f32.is_truthy());
        assert!(!0.0f32.is_truthy());
        assert!(!(-0.0f64).is_truthy());
        assert!(!f32::NAN.is_truthy());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_untagged_deserialize() {
        let one: OneOrMany<String> = serde_json::from_str("\"solo\"").unwrap();
        assert_eq!(one, OneOrMany::One("solo".to_string()));

        let many: OneOrMany<String> = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(many.into_vec(), ["a", "b"]);

        let nums: OneOrMany<u32> = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(nums.into_vec(), [1, 2]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_untagged_serialize() {
        let one = OneOrMany::One("solo");
        assert_eq!(serde_json::to_string(&one).unwrap(), "\"solo\"");

        let many = OneOrMany::Many(vec![1, 2]);
        assert_eq!(serde_json::to_string(&many).unwrap(), "[1,2]");
    }
}
