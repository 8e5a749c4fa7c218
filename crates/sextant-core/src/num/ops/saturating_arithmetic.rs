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

use core::ops::Add;

macro_rules! impl_saturating_add_val {
    (clamp: $($t:ty),*) => {
        $(impl SaturatingAddVal for $t {
            #[inline(always)]
            fn saturating_add_val(self, v: Self) -> Self {
                self.saturating_add(v)
            }
        })*
    };
    (ieee: $($t:ty),*) => {
        $(impl SaturatingAddVal for $t {
            #[inline(always)]
            fn saturating_add_val(self, v: Self) -> Self {
                self + v
            }
        })*
    };
}

/// Saturating addition by value (no references).
///
/// Integers clamp at their numeric bounds instead of overflowing. Floats
/// already saturate towards `±inf` under IEEE arithmetic, so their
/// implementation is plain addition.
///
/// # Examples
///
/// ```rust
/// # use sextant_core::num::ops::saturating_arithmetic::SaturatingAddVal;
///
/// let a: u8 = 250;
/// assert_eq!(a.saturating_add_val(10), 255); // Clamps at u8::MAX
///
/// let x: i64 = i64::MAX - 1;
/// assert_eq!(x.saturating_add_val(5), i64::MAX);
///
/// let f: f64 = f64::MAX;
/// assert!(f.saturating_add_val(f64::MAX).is_infinite());
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self) -> Self;
}

impl_saturating_add_val!(clamp: u8, u16, u32, u64, usize, u128);
impl_saturating_add_val!(clamp: i8, i16, i32, i64, isize, i128);
impl_saturating_add_val!(ieee: f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturating_add_val_clamps_integers() {
        assert_eq!(250u8.saturating_add_val(10), u8::MAX);
        assert_eq!(120i8.saturating_add_val(10), i8::MAX);
        assert_eq!((-120i8).saturating_add_val(-20), i8::MIN);
        assert_eq!(40i64.saturating_add_val(2), 42);
    }

    #[test]
    fn test_saturating_add_val_floats_follow_ieee() {
        assert_eq!(1.5f64.saturating_add_val(2.25), 3.75);
        assert_eq!(f64::MAX.saturating_add_val(f64::MAX), f64::INFINITY);
        assert_eq!(f32::INFINITY.saturating_add_val(1.0), f32::INFINITY);
    }
}
