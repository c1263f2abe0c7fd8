//! Integer powers restricted to whole numbers.

use std::fmt::Debug;
use std::ops::Sub;

use tracing::debug;

use crate::error::PowError;

/// A primitive integer type usable with [`whole_pow`].
///
/// This is implemented for every signed and unsigned primitive integer, and cannot be implemented
/// outside this crate.
pub trait WholeNumber:
    sealed::WholeNumber + Copy + PartialOrd + Debug + Sub<Output = Self>
{
    /// Zero.
    const ZERO: Self;
    /// One.
    const ONE: Self;

    /// Multiplication returning `None` on overflow.
    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_whole_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl WholeNumber for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }
            }

            impl sealed::WholeNumber for $t {}
        )*
    };
}

impl_whole_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

mod sealed {
    pub trait WholeNumber {}
}

/// `base` raised to the power `power`, where both are whole numbers.
///
/// # Errors
///
/// - [`PowError::NegativeExponent`] if `power` is negative;
/// - [`PowError::NegativeBase`] if `base` is negative;
/// - [`PowError::Indeterminate`] if both are zero;
/// - [`PowError::Overflow`] if the result does not fit in `T`.
///
/// # Examples
///
/// ```
/// use mg::math::whole_pow;
/// use mg::error::PowError;
///
/// assert_eq!(whole_pow(2, 3), Ok(8));
/// assert_eq!(whole_pow(54, 0), Ok(1));
/// assert_eq!(whole_pow(0, 0), Err(PowError::Indeterminate));
/// assert_eq!(whole_pow(4, -1), Err(PowError::NegativeExponent));
/// assert_eq!(whole_pow(2u8, 8), Err(PowError::Overflow));
/// ```
pub fn whole_pow<T: WholeNumber>(base: T, power: T) -> Result<T, PowError> {
    if power < T::ZERO {
        debug!(?base, ?power, "rejected negative exponent");
        return Err(PowError::NegativeExponent);
    }
    if base < T::ZERO {
        debug!(?base, ?power, "rejected negative base");
        return Err(PowError::NegativeBase);
    }
    if base == T::ZERO {
        return if power == T::ZERO {
            debug!("rejected zero to the power of zero");
            Err(PowError::Indeterminate)
        } else {
            Ok(T::ZERO)
        };
    }

    if base == T::ONE {
        return Ok(T::ONE);
    }

    let mut result = T::ONE;
    let mut remaining = power;
    while remaining > T::ZERO {
        result = result.checked_mul(base).ok_or_else(|| {
            debug!(?base, ?power, "power overflows");
            PowError::Overflow
        })?;
        remaining = remaining - T::ONE;
    }
    Ok(result)
}
