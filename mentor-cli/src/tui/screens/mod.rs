//! TUI screens

pub mod landing;

pub use landing::run_landing;
