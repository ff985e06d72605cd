//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the build pipeline and the host
//! (process launching, filesystem). Implementations live in `src/adapters/`.

pub mod filesystem;
pub mod shell;

pub use filesystem::FileSystem;
pub use shell::{CommandSpec, ShellExecutor, ShellOutput};
