//! Runtime orchestration: actor startup, scheduler tasks, graceful shutdown.

mod platform;

pub use platform::Platform;
