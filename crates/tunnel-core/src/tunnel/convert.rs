use thiserror::Error;

// Exact f32 bounds of the i32 range. 2^31 is representable, 2^31 - 1 is not.
const I32_LO: f32 = -2_147_483_648.0;
const I32_HI: f32 = 2_147_483_648.0;

#[derive(Debug, Error, Copy, Clone, PartialEq)]
pub enum ConvertError {
    #[error("cannot truncate NaN to a color term")]
    NotANumber,

    #[error("value {0} out of i32 range")]
    OutOfRange(f32),
}

/// How the kernel turns the real-valued ring/sweep terms into integers.
///
/// The historical cartridges left this to the platform (a C cast in one,
/// an unchecked intrinsic in the other); here it is pinned explicitly and
/// applied uniformly to both truncations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConvertPolicy {
    /// Truncate toward zero, clamp out-of-range values to `i32::MIN`/`MAX`,
    /// map NaN to 0. Never fails.
    Saturate,
    /// Truncate toward zero; NaN or out-of-range input aborts the frame.
    Fault,
}

impl ConvertPolicy {
    /// Truncates `v` toward zero under this policy.
    #[inline]
    pub fn truncate(self, v: f32) -> Result<i32, ConvertError> {
        match self {
            ConvertPolicy::Saturate => Ok(truncate_saturating(v)),
            ConvertPolicy::Fault => truncate_checked(v),
        }
    }
}

#[inline]
fn truncate_saturating(v: f32) -> i32 {
    // `as` already saturates and zeroes NaN; spelled out so the policy is
    // a documented contract rather than a language default.
    if v.is_nan() { 0 } else { v as i32 }
}

#[inline]
fn truncate_checked(v: f32) -> Result<i32, ConvertError> {
    if v.is_nan() {
        log::warn!("conversion fault: NaN");
        return Err(ConvertError::NotANumber);
    }
    if !(I32_LO..I32_HI).contains(&v) {
        log::warn!("conversion fault: {v} out of i32 range");
        return Err(ConvertError::OutOfRange(v));
    }
    Ok(v as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturate_truncates_toward_zero() {
        assert_eq!(ConvertPolicy::Saturate.truncate(3.9), Ok(3));
        assert_eq!(ConvertPolicy::Saturate.truncate(-3.9), Ok(-3));
        assert_eq!(ConvertPolicy::Saturate.truncate(0.0), Ok(0));
    }

    #[test]
    fn saturate_clamps_and_zeroes_nan() {
        assert_eq!(ConvertPolicy::Saturate.truncate(f32::NAN), Ok(0));
        assert_eq!(
            ConvertPolicy::Saturate.truncate(f32::INFINITY),
            Ok(i32::MAX)
        );
        assert_eq!(
            ConvertPolicy::Saturate.truncate(f32::NEG_INFINITY),
            Ok(i32::MIN)
        );
        assert_eq!(ConvertPolicy::Saturate.truncate(1.0e10), Ok(i32::MAX));
        assert_eq!(ConvertPolicy::Saturate.truncate(-1.0e10), Ok(i32::MIN));
    }

    #[test]
    fn fault_truncates_in_range() {
        assert_eq!(ConvertPolicy::Fault.truncate(2.9), Ok(2));
        assert_eq!(ConvertPolicy::Fault.truncate(-2.9), Ok(-2));
        assert_eq!(
            ConvertPolicy::Fault.truncate(-2_147_483_648.0),
            Ok(i32::MIN)
        );
    }

    #[test]
    fn fault_rejects_nan_and_out_of_range() {
        assert_eq!(
            ConvertPolicy::Fault.truncate(f32::NAN),
            Err(ConvertError::NotANumber)
        );
        assert!(matches!(
            ConvertPolicy::Fault.truncate(f32::INFINITY),
            Err(ConvertError::OutOfRange(_))
        ));
        assert!(matches!(
            ConvertPolicy::Fault.truncate(2_147_483_648.0),
            Err(ConvertError::OutOfRange(_))
        ));
        assert!(matches!(
            ConvertPolicy::Fault.truncate(-1.0e12),
            Err(ConvertError::OutOfRange(_))
        ));
    }
}
