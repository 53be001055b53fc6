//! Application runtime: terminal lifecycle, API worker, and event loop.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::init::StartView;
pub use runtime::{HEADLESS_ENV, run};
