pub mod capture;

// Re-export commonly used items
pub use capture::{FailingSink, LineCapture};
