pub mod clock;
pub mod color;
pub mod config;
pub mod dispatch;
pub mod edges;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod guard;
pub mod input;
pub mod log;
pub mod monitor;
pub mod platform;
pub mod popup;
pub mod rect;
pub mod session;
pub mod snap;
pub mod window;

#[cfg(test)]
#[path = "tests/fake.rs"]
pub(crate) mod fake;

pub use config::Config;
pub use error::{Error, Result};
pub use input::{Chord, ChordKind, Input, Key};
pub use monitor::Monitor;
pub use platform::{Desktop, Feedback, Platform, Preview};
pub use rect::{Point, Rect, Size};
pub use session::{SessionController, SessionOutcome};
pub use window::{Window, WindowInfo};
