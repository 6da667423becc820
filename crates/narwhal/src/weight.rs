//! Numeric edge weights and path distances.

use std::fmt;
use std::ops::Add;

/// A numeric edge weight.
///
/// Weights are only ever added and compared. Edges that carry no weight cost [`Weight::ONE`],
/// which makes the weighted algorithms count hops on unweighted graphs.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + fmt::Debug {
    const ZERO: Self;
    const ONE: Self;
}

macro_rules! impl_weight {
    ($zero:literal, $one:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = $zero;
                const ONE: Self = $one;
            }
        )+
    };
}

impl_weight!(0, 1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_weight!(0.0, 1.0 => f32, f64);

/// Length of a shortest path. `Unreachable` orders after every finite distance.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Distance<W> {
    Finite(W),
    Unreachable,
}

impl<W: Copy> Distance<W> {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Unreachable => None,
        }
    }
}

impl<W> From<Option<W>> for Distance<W> {
    fn from(value: Option<W>) -> Self {
        match value {
            Some(w) => Distance::Finite(w),
            None => Distance::Unreachable,
        }
    }
}

pub(crate) fn cmp_weights<W: PartialOrd>(a: &W, b: &W) -> std::cmp::Ordering {
    a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal)
}
