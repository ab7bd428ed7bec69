use crate::tunnel::FRAMEBUFFER_LEN;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FramebufferError {
    #[error("framebuffer region must be exactly {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Non-owning write view over the host's 320x240 indexed-color region.
///
/// The host owns the bytes and reads them for display between kernel
/// calls; the kernel only ever writes through this view. Row-major,
/// `index = y * 320 + x`, one palette index per byte.
pub struct FramebufferView<'a> {
    bytes: &'a mut [u8],
}

impl<'a> FramebufferView<'a> {
    /// Wraps a host-provided region, which must be exactly
    /// [`FRAMEBUFFER_LEN`] bytes.
    pub fn new(bytes: &'a mut [u8]) -> Result<Self, FramebufferError> {
        if bytes.len() != FRAMEBUFFER_LEN {
            return Err(FramebufferError::SizeMismatch {
                expected: FRAMEBUFFER_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    #[inline]
    pub fn put(&mut self, index: usize, color: u8) {
        self.bytes[index] = color;
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes
    }
}
