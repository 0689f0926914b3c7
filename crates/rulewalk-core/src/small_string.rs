//! Inline fixed-capacity string.
//!
//! Compiled grammars keep symbol names in place instead of allocating one heap
//! string per node. Text that does not fit is rejected, never truncated.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Text does not fit into a [`SmallString`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{text}` is {len} bytes long, capacity is {capacity}")]
pub struct CapacityError {
    pub text: String,
    pub len: usize,
    pub capacity: usize,
}

/// String of at most `N` bytes stored inline.
#[derive(Clone, Copy)]
pub struct SmallString<const N: usize> {
    bytes: [u8; N],
    len: u8,
}

impl<const N: usize> SmallString<N> {
    /// Maximum length in bytes.
    pub const CAPACITY: usize = N;

    pub fn new(text: &str) -> Result<Self, CapacityError> {
        const { assert!(N <= u8::MAX as usize, "SmallString capacity must fit in u8") };

        let len = text.len();
        if len > N {
            return Err(CapacityError {
                text: text.to_owned(),
                len,
                capacity: N,
            });
        }
        let mut bytes = [0u8; N];
        bytes[..len].copy_from_slice(text.as_bytes());
        Ok(Self {
            bytes,
            len: len as u8,
        })
    }

    pub fn as_str(&self) -> &str {
        // Only ever filled from a whole `&str`.
        std::str::from_utf8(&self.bytes[..self.len as usize])
            .expect("SmallString always holds valid UTF-8")
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<const N: usize> Default for SmallString<N> {
    fn default() -> Self {
        Self {
            bytes: [0u8; N],
            len: 0,
        }
    }
}

impl<const N: usize> TryFrom<&str> for SmallString<N> {
    type Error = CapacityError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl<const N: usize> std::ops::Deref for SmallString<N> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> AsRef<str> for SmallString<N> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize, const M: usize> PartialEq<SmallString<M>> for SmallString<N> {
    fn eq(&self, other: &SmallString<M>) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<const N: usize> Eq for SmallString<N> {}

impl<const N: usize> PartialEq<str> for SmallString<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for SmallString<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<const N: usize> PartialOrd for SmallString<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Ord for SmallString<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl<const N: usize> Hash for SmallString<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl<const N: usize> fmt::Display for SmallString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> fmt::Debug for SmallString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> Serialize for SmallString<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, const N: usize> Deserialize<'de> for SmallString<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::new(&text).map_err(serde::de::Error::custom)
    }
}
