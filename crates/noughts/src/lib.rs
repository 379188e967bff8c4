//! Noughts terminal front end.
//!
//! Rendering, input, pacing and status text for the `noughts` binary. The
//! game itself lives in [`noughts_core`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyze;
mod cli;
mod session;

pub use analyze::{infer_side, report};
pub use cli::{Cli, Command, Mode, Side};
pub use session::{Input, Session, SessionConfig};
