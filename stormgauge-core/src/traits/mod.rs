//! Collaborator interfaces
//!
//! The engine talks to the outside world through two narrow traits:
//!
//! - [`TimeSource`] - the monotonic millisecond clock
//! - [`DirectionSource`] - the wind vane, read once per tick
//!
//! Both are trivially implemented by test doubles, so the whole engine runs
//! on the host without hardware.

pub mod direction;
pub mod time;

pub use direction::DirectionSource;
pub use time::TimeSource;
