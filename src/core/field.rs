//! Field presence for partial updates

use serde::{Deserialize, Deserializer};

/// A field in a partial-update payload.
///
/// JSON only distinguishes "key missing" from "key present with null" by
/// presence, so this keeps all three states apart. Use it with
/// `#[serde(default)]` so that a missing key lands on [`Patch::Absent`]:
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct TitlePatch {
///     #[serde(default)]
///     title: Patch<String>,
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Patch<T> {
    /// The key was not in the payload
    #[default]
    Absent,
    /// The key was present with `null`
    Null,
    /// The key was present with a value
    Value(T),
}

impl<T> Patch<T> {
    /// Overwrite `target` when a value was supplied; leave it alone otherwise.
    ///
    /// Returns whether `target` was written.
    pub fn apply_to(self, target: &mut T) -> bool {
        match self {
            Patch::Value(v) => {
                *target = v;
                true
            }
            Patch::Absent | Patch::Null => false,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key exists; absence is handled by `#[serde(default)]`.
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        })
    }
}
