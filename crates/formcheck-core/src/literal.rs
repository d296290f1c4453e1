//! Text-or-number operands.
//!
//! Length bounds and comparison operands may arrive as text (`"6"`, from a
//! form field or config file) or as a number (`6`, from code). Both are
//! reduced to their literal text first, so a number is subject to the same
//! pattern check as the equivalent string: `-1` fails a length check just
//! like `"-1"` does.

use std::borrow::Cow;

use crate::patterns::FLOAT_PREFIX_PATTERN;

/// A value that can be viewed as a literal string.
pub trait Literal {
    /// The literal text of this value.
    fn literal(&self) -> Cow<'_, str>;
}

impl Literal for str {
    fn literal(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Literal for String {
    fn literal(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl<T: Literal + ?Sized> Literal for &T {
    fn literal(&self) -> Cow<'_, str> {
        (**self).literal()
    }
}

macro_rules! impl_literal_for_numbers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Literal for $ty {
                fn literal(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

// `Display` for floats prints `5.0` as `5`, which keeps whole-number floats
// valid as length bounds.
impl_literal_for_numbers!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/// Parse the leading float prefix of `text`, ignoring leading whitespace and
/// anything after the prefix. Returns NaN when there is no prefix.
pub(crate) fn parse_float_prefix(text: &str) -> f64 {
    FLOAT_PREFIX_PATTERN
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}
