pub mod deal_store;
#[cfg(not(target_arch = "wasm32"))]
pub mod file;
pub mod memory;
pub mod traits;
