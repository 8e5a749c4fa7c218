// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

/// Finiteness check by value.
///
/// Integers are always finite. Floats are finite unless they are `NaN` or
/// infinite.
///
/// # Examples
///
/// ```rust
/// # use sextant_core::num::ops::finite::IsFiniteVal;
///
/// assert!(42i32.is_finite_val());
/// assert!(1.5f64.is_finite_val());
/// assert!(!f64::NAN.is_finite_val());
/// assert!(!f32::NEG_INFINITY.is_finite_val());
/// ```
pub trait IsFiniteVal {
    /// Returns `true` if the value is neither `NaN` nor infinite.
    fn is_finite_val(self) -> bool;
}

macro_rules! impl_is_finite_for_integers {
    ($($t:ty),*) => {
        $(
            impl IsFiniteVal for $t {
                #[inline(always)]
                fn is_finite_val(self) -> bool {
                    true
                }
            }
        )*
    };
}

macro_rules! impl_is_finite_for_floats {
    ($($t:ty),*) => {
        $(
            impl IsFiniteVal for $t {
                #[inline(always)]
                fn is_finite_val(self) -> bool {
                    <$t>::is_finite(self)
                }
            }
        )*
    };
}

impl_is_finite_for_integers!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_is_finite_for_floats!(f32, f64);
