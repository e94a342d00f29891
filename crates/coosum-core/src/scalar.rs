//! Numeric field abstraction with per-type equality tolerance

use std::ops::AddAssign;

use num_traits::Zero;

/// Absolute tolerance for `f32` comparisons.
pub const F32_EPS: f32 = 1e-5;
/// Absolute tolerance for `f64` comparisons.
pub const F64_EPS: f64 = 1e-9;

/// Element type of a sparse matrix.
///
/// `approx_eq` is the per-type matching rule used by the equality oracle:
/// exact for integer types, absolute-difference-within-epsilon for floats.
/// Each float type carries its own tolerance constant; none is shared.
pub trait Scalar: Copy + PartialEq + Zero + AddAssign + Send + Sync + 'static {
    fn approx_eq(self, other: Self) -> bool;
}

macro_rules! exact_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn approx_eq(self, other: Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

exact_scalar!(i32, i64, u32, u64);

impl Scalar for f32 {
    #[inline]
    fn approx_eq(self, other: Self) -> bool {
        (self - other).abs() < F32_EPS
    }
}

impl Scalar for f64 {
    #[inline]
    fn approx_eq(self, other: Self) -> bool {
        (self - other).abs() < F64_EPS
    }
}
