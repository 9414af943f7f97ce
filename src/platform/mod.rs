// Platform-specific code module

pub mod monitor;

// Re-exports for cleaner imports
pub use monitor::builtin_backends;
