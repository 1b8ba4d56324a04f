//! Screens the simulator drives outside the per-frame monitor loop.

mod boot;

pub use boot::run_boot_sequence;
