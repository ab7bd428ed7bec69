//! Convenient imports for consumers of tunnel-core
//!
//! Pull in everything commonly needed in one line:
//! ```rust
//! use tunnel_core::prelude::*;
//! ```

// Main kernel API
pub use crate::tunnel::{KernelConfig, SingularityGuard, TunnelKernel};

// Host capabilities
pub use crate::tunnel::host::{HostInterface, SystemHost};

// Framebuffer view and conversion policy
pub use crate::tunnel::convert::{ConvertError, ConvertPolicy};
pub use crate::tunnel::framebuffer::{FramebufferError, FramebufferView};

// Constants
pub use crate::tunnel::{FRAMEBUFFER_LEN, SCREEN_HEIGHT, SCREEN_WIDTH};
