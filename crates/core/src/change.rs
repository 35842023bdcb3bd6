// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Deserializer};

/// An edit to an optional field.
///
/// Distinguishes a field that was left out of an edit from one that was
/// explicitly cleared. When deserialized with `#[serde(default)]`, an absent
/// key is [`Change::Unchanged`], `null` is [`Change::Cleared`] and any other
/// value is [`Change::Set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change<T> {
    /// Keep the current value.
    Unchanged,
    /// Remove the current value.
    Cleared,
    /// Replace the current value.
    Set(T),
}

impl<T> Change<T> {
    /// Returns the new value, if one is being set.
    #[must_use]
    pub const fn as_set(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unchanged | Self::Cleared => None,
        }
    }

    /// Converts the carried value with a fallible function.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `f`.
    pub fn try_map<U, E, F>(self, f: F) -> Result<Change<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Unchanged => Ok(Change::Unchanged),
            Self::Cleared => Ok(Change::Cleared),
            Self::Set(value) => f(value).map(Change::Set),
        }
    }

    /// Applies the change to the current value of a field.
    pub fn apply_to(self, field: &mut Option<T>) {
        match self {
            Self::Unchanged => {}
            Self::Cleared => *field = None,
            Self::Set(value) => *field = Some(value),
        }
    }
}

impl<T> Default for Change<T> {
    fn default() -> Self {
        Self::Unchanged
    }
}

impl<'de, T> Deserialize<'de> for Change<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| value.map_or(Self::Cleared, Self::Set))
    }
}
