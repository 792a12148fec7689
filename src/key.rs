use std::fmt::{self, Display};
use std::num::TryFromIntError;

use crate::util::canonical_int;

/// The default key type of keyed collections: either an integer or a string.
///
/// Strings holding a canonical decimal integer become integer keys,
/// so `Key::from(1)` and `Key::from("1")` are the same key.
/// Anything else (`"01"`, `"+1"`, `"-0"`, `"1.5"`) stays a string key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(i) => Some(*i),
            Key::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(s) => Some(s),
        }
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{i}"),
            Key::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        match canonical_int(value) {
            Some(i) => Key::Int(i),
            None => Key::Str(value.to_owned()),
        }
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        match canonical_int(&value) {
            Some(i) => Key::Int(i),
            None => Key::Str(value),
        }
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::from(value.as_str())
    }
}

macro_rules! int_key {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Key {
                fn from(value: $t) -> Self {
                    Key::Int(i64::from(value))
                }
            }
        )*
    };
}

int_key!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! try_int_key {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Key {
                type Error = TryFromIntError;

                fn try_from(value: $t) -> Result<Self, Self::Error> {
                    i64::try_from(value).map(Key::Int)
                }
            }
        )*
    };
}

try_int_key!(u64, usize, u128, i128, isize);

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        match canonical_int(other) {
            Some(i) => self.as_int() == Some(i),
            None => self.as_str() == Some(other),
        }
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<i64> for Key {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}
