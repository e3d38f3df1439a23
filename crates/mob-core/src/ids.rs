//! Typed identifiers for entities and groups.
//!
//! Both are plain indices into the flat scenario arena.  The inner integer is
//! `pub`; prefer `.index()` when indexing a `Vec`.

use std::fmt;

/// Generate a typed index wrapper around a primitive integer.
///
/// `$label` is the prefix used by `Display` (`entity#3`, `group#0`).
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) = $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel for "not assigned".
            pub const INVALID: $name = $name(<$inner>::MAX);

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", $label, self.0)
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
    /// Index of a generated entity in `Scenario::entities`.
    pub struct EntityId(u32) = "entity";
}

typed_id! {
    /// Index of a group in the Column model's reference-point arena.
    pub struct GroupId(u32) = "group";
}
