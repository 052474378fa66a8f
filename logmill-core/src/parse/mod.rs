//! Access-log line parsing.
//!
//! One raw log line goes in, a [`RequestRecord`] comes out, or a typed
//! [`ParseError`] explaining which field was unusable. Parse failures are
//! recoverable by design: the caller reports the line and moves on.

mod error;
mod line;
mod types;

pub use error::ParseError;
pub use line::parse_line;
pub use types::{RequestRecord, StatusClass};
