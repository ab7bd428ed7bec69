use tunnel_core::prelude::*;

// Start of the runtime's framebuffer region in linear memory.
const FRAMEBUFFER_BASE: usize = 120;

#[link(wasm_import_module = "env")]
unsafe extern "C" {
    #[link_name = "atan2"]
    fn env_atan2(x: f32, y: f32) -> f32;
    #[link_name = "time"]
    fn env_time() -> f32;
}

struct RuntimeHost;

impl HostInterface for RuntimeHost {
    #[inline]
    fn atan2(&mut self, x: f32, y: f32) -> f32 {
        unsafe { env_atan2(x, y) }
    }

    #[inline]
    fn time(&mut self) -> f32 {
        unsafe { env_time() }
    }
}

/// Entry point, invoked by the runtime once per display frame.
#[unsafe(no_mangle)]
pub extern "C" fn upd() {
    // SAFETY: the runtime guarantees a writable FRAMEBUFFER_LEN-byte
    // region at FRAMEBUFFER_BASE, and never touches it while upd() runs.
    let region =
        unsafe { core::slice::from_raw_parts_mut(FRAMEBUFFER_BASE as *mut u8, FRAMEBUFFER_LEN) };

    let Ok(mut fb) = FramebufferView::new(region) else {
        return;
    };

    // Default config: bounded guard + saturating conversion, so a frame
    // can never trap inside the sandbox.
    let kernel = TunnelKernel::new();
    let mut host = RuntimeHost;
    let _ = kernel.render_frame(&mut host, &mut fb);
}
