use std::fmt::Debug;

use num_traits::{CheckedAdd, Float, Zero};
use ordered_float::OrderedFloat;

/// Edge weight and accumulated distance type.
///
/// Distances are summed in the same type as edge weights, so every weight type
/// has to say how two values add without leaving its representable range.
pub trait Weight: Copy + Ord + Debug + Zero {
    /// Adds two weights, returning `None` when the sum is not representable
    fn checked_sum(self, rhs: Self) -> Option<Self>;

    /// Returns true if the weight may be used on an edge
    fn is_valid(self) -> bool {
        self >= Self::zero()
    }
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &rhs)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<F> Weight for OrderedFloat<F>
where
    F: Float + Debug,
{
    fn checked_sum(self, rhs: Self) -> Option<Self> {
        let sum = self.0 + rhs.0;
        if sum.is_finite() {
            Some(OrderedFloat(sum))
        } else {
            None
        }
    }

    // NaN and infinity are rejected along with negative values
    fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= F::zero()
    }
}
