use std::time::Instant;

/// The two capabilities the surrounding runtime supplies to the kernel.
///
/// On the real platform these are wasm imports resolved at load time; in
/// tests they are mocks. `&mut self` so hosts may keep per-call state.
pub trait HostInterface {
    /// Two-argument arctangent in radians, range `(-π, π]`.
    /// `atan2(0, 0)` is defined as 0.
    fn atan2(&mut self, x: f32, y: f32) -> f32;

    /// Free-running clock in seconds. Monotonically non-decreasing; may
    /// wrap at an implementation-defined bound.
    fn time(&mut self) -> f32;
}

/// Std-backed host for native embedders: `f32::atan2` plus a monotonic
/// clock counting seconds since construction.
pub struct SystemHost {
    epoch: Instant,
}

impl SystemHost {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostInterface for SystemHost {
    #[inline]
    fn atan2(&mut self, x: f32, y: f32) -> f32 {
        x.atan2(y)
    }

    #[inline]
    fn time(&mut self) -> f32 {
        self.epoch.elapsed().as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn system_host_atan2_matches_the_contract() {
        let mut host = SystemHost::new();
        assert_eq!(host.atan2(0.0, 0.0), 0.0);
        assert!((host.atan2(1.0, 0.0) - FRAC_PI_2).abs() < 1e-6);
        assert!((host.atan2(0.0, 1.0)).abs() < 1e-6);
        assert!((host.atan2(0.0, -1.0) - PI).abs() < 1e-6);
    }

    #[test]
    fn system_host_time_is_non_decreasing() {
        let mut host = SystemHost::new();
        let a = host.time();
        let b = host.time();
        assert!(a >= 0.0);
        assert!(b >= a);
    }
}
