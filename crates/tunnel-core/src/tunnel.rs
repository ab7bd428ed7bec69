pub mod convert;
pub mod framebuffer;
pub mod host;


use convert::{ConvertError, ConvertPolicy};
use framebuffer::FramebufferView;
use host::HostInterface;

use std::f32::consts::PI;

pub const SCREEN_WIDTH: usize = 320;
pub const SCREEN_HEIGHT: usize = 240;
pub const FRAMEBUFFER_LEN: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

// Host time is in seconds; 63 units per second sets the animation speed.
const TIME_SCALE: f32 = 63.0;
// Radial term numerator: distance-to-ring-index scale.
const DEPTH_SCALE: f32 = 40000.0;
// Angular term scale: a full half-turn maps to 512 units.
const ANGLE_SCALE: f32 = 512.0;

/// Controls the `ε` added under the square root of the radial term.
///
/// `Bounded` (`ε = 1`) keeps the radial term finite everywhere and is the
/// safer choice. `Raw` (`ε = 0`) reproduces the historical variant that
/// divides by zero at the exact screen center; what happens to that pixel
/// is then decided by the [`ConvertPolicy`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SingularityGuard {
    Bounded,
    Raw,
}

impl SingularityGuard {
    #[inline]
    fn epsilon(self) -> f32 {
        match self {
            SingularityGuard::Bounded => 1.0,
            SingularityGuard::Raw => 0.0,
        }
    }
}

/// Kernel knobs. The two historical cartridge variants collapse into one
/// kernel parameterized by these two fields.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KernelConfig {
    pub guard: SingularityGuard,
    pub convert: ConvertPolicy,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            guard: SingularityGuard::Bounded,
            convert: ConvertPolicy::Saturate,
        }
    }
}

/// The per-frame effect kernel.
///
/// Stateless: every frame is a pure function of the pixel index and the
/// time sampled at the start of the call. The host owns scheduling and
/// display; this type only fills the framebuffer.
pub struct TunnelKernel {
    config: KernelConfig,
}

impl Default for TunnelKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl TunnelKernel {
    pub fn new() -> Self {
        Self::with_config(KernelConfig::default())
    }

    pub fn with_config(config: KernelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> KernelConfig {
        self.config
    }

    /// Renders one frame into `fb`.
    ///
    /// Samples the host clock once, then writes every index in
    /// `0..FRAMEBUFFER_LEN` exactly once, in increasing order. Each pixel
    /// combines a radial ring term and a time-rotated angular sweep by XOR
    /// of their truncated forms.
    ///
    /// # Errors
    ///
    /// Only under [`ConvertPolicy::Fault`], when a truncation input is NaN
    /// or out of `i32` range. The frame is then abandoned where it stands:
    /// pixels before the faulting index are already written, pixels at and
    /// after it keep their previous contents.
    pub fn render_frame<H: HostInterface>(
        &self,
        host: &mut H,
        fb: &mut FramebufferView,
    ) -> Result<(), ConvertError> {
        let t = host.time() * TIME_SCALE;
        let epsilon = self.config.guard.epsilon();

        for i in 0..FRAMEBUFFER_LEN {
            let x = (i % SCREEN_WIDTH) as f32 - (SCREEN_WIDTH / 2) as f32;
            let y = (i / SCREEN_WIDTH) as f32 - (SCREEN_HEIGHT / 2) as f32;

            let d = DEPTH_SCALE / (x * x + y * y + epsilon).sqrt();
            let u = host.atan2(x, y) * ANGLE_SCALE / PI;

            let rings = self.config.convert.truncate(d + 2.0 * t)?;
            let sweep = self.config.convert.truncate(u + t)?;

            fb.put(i, ((rings ^ sweep) >> 4) as u8);
        }

        Ok(())
    }
}
