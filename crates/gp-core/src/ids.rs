//! Strongly typed identifier wrappers.
//!
//! Agent ids are `Copy + Ord + Hash` so they can key ordered maps without
//! ceremony.  The inner integer is `pub` so the simulation can index its
//! per-agent `Vec`s via `.index()`.
//!
//! Team identity is the flag token text (`"F1"`, `"FA"`, …) carried by
//! [`FlagId`].

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a seeker, in map spawn order.
    pub struct SeekerId(u32);
}

typed_id! {
    /// Index of a chaser, in map spawn order.  Stable across ticks, so it
    /// keys each seeker's per-chaser heading memory.
    pub struct ChaserId(u32);
}

// ── FlagId ────────────────────────────────────────────────────────────────────

/// Team identifier: the exact text of the team's flag token.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlagId(pub String);

impl FlagId {
    pub fn new(id: impl Into<String>) -> Self {
        FlagId(id.into())
    }

    /// The flag owned by the seeker spawned from token `P<label>`.
    pub fn for_label(label: char) -> Self {
        FlagId(format!("F{label}"))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for FlagId {
    fn from(s: &str) -> Self {
        FlagId(s.to_owned())
    }
}
