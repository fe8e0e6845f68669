// Application layer: wiring used by the binary.

#[cfg(feature = "cli")]
pub mod command;
