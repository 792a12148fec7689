use num_traits::ToPrimitive;

use crate::error::MalformedPosition;
use crate::util::canonical_int;

/// Anything which may be interpreted as a zero-based position in a collection.
///
/// Conversion never panics: negative numbers and strings which are not
/// canonical non-negative decimals (`"01"`, `"+1"`, `"potato"`)
/// are reported as [MalformedPosition].
pub trait Position {
    fn to_position(&self) -> Result<usize, MalformedPosition>;
}

macro_rules! int_position {
    ($($t:ty),*) => {
        $(
            impl Position for $t {
                fn to_position(&self) -> Result<usize, MalformedPosition> {
                    self.to_usize()
                        .ok_or_else(|| MalformedPosition(self.to_string()))
                }
            }
        )*
    };
}

int_position!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Position for str {
    fn to_position(&self) -> Result<usize, MalformedPosition> {
        canonical_int(self)
            .and_then(|i| i.to_usize())
            .ok_or_else(|| MalformedPosition(self.to_owned()))
    }
}

impl Position for String {
    fn to_position(&self) -> Result<usize, MalformedPosition> {
        self.as_str().to_position()
    }
}

impl<P: Position + ?Sized> Position for &P {
    fn to_position(&self) -> Result<usize, MalformedPosition> {
        (**self).to_position()
    }
}
