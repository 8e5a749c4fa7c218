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

//! Total ordering by value.
//!
//! Priority structures need a comparison that never gives up. Integers
//! already have one (`Ord`); floats get `total_cmp`, which orders
//! `-0.0 < +0.0` and places `NaN` after `+inf`. Validated cost data never
//! contains `NaN`, so for solver inputs this coincides with `<`.

use std::cmp::Ordering;

/// A total order usable for both integer and floating point values.
///
/// # Examples
///
/// ```rust
/// # use sextant_core::num::ops::total_order::TotalOrdVal;
/// # use std::cmp::Ordering;
///
/// assert_eq!(3i64.total_cmp_val(&7), Ordering::Less);
/// assert_eq!(2.5f64.total_cmp_val(&2.5), Ordering::Equal);
/// assert_eq!(f64::INFINITY.total_cmp_val(&1.0), Ordering::Greater);
/// ```
pub trait TotalOrdVal {
    /// Compares `self` with `other` under a total order.
    fn total_cmp_val(&self, other: &Self) -> Ordering;
}

macro_rules! impl_total_ord_for_integers {
    ($($t:ty),*) => {
        $(
            impl TotalOrdVal for $t {
                #[inline(always)]
                fn total_cmp_val(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_total_ord_for_floats {
    ($($t:ty),*) => {
        $(
            impl TotalOrdVal for $t {
                #[inline(always)]
                fn total_cmp_val(&self, other: &Self) -> Ordering {
                    <$t>::total_cmp(self, other)
                }
            }
        )*
    };
}

impl_total_ord_for_integers!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_total_ord_for_floats!(f32, f64);
