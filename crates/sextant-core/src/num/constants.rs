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

//! Associated-constant traits for the primitive numeric types.
//!
//! `Zero` is the additive identity used to start cost sums. `Unbounded` is
//! the value a minimising search starts its best cost from: `MAX` for
//! integers and `+inf` for floats. Every finite cost compares below it.

/// A trait for numeric types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

/// A trait for numeric types that have a constant standing for "no value
/// reached yet" in a minimisation.
pub trait Unbounded {
    /// The largest representable value of the implementing type
    /// (`+inf` for floats).
    const UNBOUNDED: Self;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $t:ty) => {
        impl $trait_name for $t {
            const $const_name: Self = $value;
        }
    };
}

macro_rules! impl_integer_constants_for {
    ($($t:ty),*) => {
        $(
            impl_const_for!(Zero, ZERO, 0, $t);
            impl_const_for!(Unbounded, UNBOUNDED, <$t>::MAX, $t);
        )*
    };
}

macro_rules! impl_float_constants_for {
    ($($t:ty),*) => {
        $(
            impl_const_for!(Zero, ZERO, 0.0, $t);
            impl_const_for!(Unbounded, UNBOUNDED, <$t>::INFINITY, $t);
        )*
    };
}

impl_integer_constants_for!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float_constants_for!(f32, f64);
