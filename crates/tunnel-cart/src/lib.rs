//! Cartridge binding for the tunnel effect.
//!
//! Wires tunnel-core to the fantasy-console runtime: resolves the `env`
//! imports, maps the framebuffer region, and exports the `upd` entry point
//! the runtime calls once per display frame. Only meaningful on wasm32;
//! the crate is empty on native targets.

#[cfg(target_arch = "wasm32")]
mod cart;
