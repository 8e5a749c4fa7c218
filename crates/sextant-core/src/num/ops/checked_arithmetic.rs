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

/// Checked addition by value (no references).
///
/// Integers return `None` on overflow, like the primitive `checked_add`.
/// Floats return `None` when the sum is no longer finite.
///
/// # Examples
///
/// ```rust
/// # use sextant_core::num::ops::checked_arithmetic::CheckedAddVal;
///
/// assert_eq!(200u8.checked_add_val(100), None);
/// assert_eq!(200u8.checked_add_val(50), Some(250));
/// assert_eq!(f64::MAX.checked_add_val(f64::MAX), None);
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` on overflow.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

macro_rules! impl_checked_add_val {
    (int: $($t:ty),*) => {
        $(impl CheckedAddVal for $t {
            #[inline(always)]
            fn checked_add_val(self, v: Self) -> Option<Self> {
                self.checked_add(v)
            }
        })*
    };
    (float: $($t:ty),*) => {
        $(impl CheckedAddVal for $t {
            #[inline(always)]
            fn checked_add_val(self, v: Self) -> Option<Self> {
                let sum = self + v;
                sum.is_finite().then_some(sum)
            }
        })*
    };
}

impl_checked_add_val!(int: u8, u16, u32, u64, usize, u128);
impl_checked_add_val!(int: i8, i16, i32, i64, isize, i128);
impl_checked_add_val!(float: f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_add_val_integers() {
        assert_eq!(250u8.checked_add_val(5), Some(255));
        assert_eq!(250u8.checked_add_val(6), None);
        assert_eq!(100i8.checked_add_val(27), Some(127));
        assert_eq!((-100i8).checked_add_val(-29), None);
    }

    #[test]
    fn test_checked_add_val_floats() {
        assert_eq!(1.5f64.checked_add_val(2.5), Some(4.0));
        assert_eq!(f32::MAX.checked_add_val(f32::MAX), None);
        assert_eq!(f64::INFINITY.checked_add_val(1.0), None);
    }
}
