//! Test harness for CLI integration tests.
//!
//! Provides isolated storage directories, programmatic seeding of note
//! documents, and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;
mod note;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::MemoCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
#[allow(unused_imports)]
pub use note::TestNote;
