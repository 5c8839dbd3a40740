//! Input processing module
//! Handles file detection, encoding sniffing, and document loading

pub mod file_detector;
pub mod encoding;
pub mod loader;

pub use loader::DocumentLoader;
