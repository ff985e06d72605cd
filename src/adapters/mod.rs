//! Adapter implementations of the port traits.
//!
//! - `live` talks to the real host.
//! - `dry_run` prints what would happen and reports success.
//! - `recording` wraps another adapter and writes a cassette.
//! - `replaying` answers from a cassette without touching the host.

pub mod dry_run;
pub mod live;
pub mod recording;
pub mod replaying;
