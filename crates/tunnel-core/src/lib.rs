// Tunnel effect core modules
pub mod tunnel;

pub mod prelude;

// Re-exports
pub use tunnel::TunnelKernel;

pub use tunnel::framebuffer::FramebufferView;
pub use tunnel::host::HostInterface;
