/// dirtally Console — interactive text frontend.
///
/// This crate contains the prompts and the session flow. Traversal and
/// report logic live in `dirtally-core`.
pub mod app;
pub mod input;
pub mod prompt;

pub use app::{AppError, AppOptions, ConsoleApp, SessionOutcome};
pub use prompt::CANCELLED_MESSAGE;
