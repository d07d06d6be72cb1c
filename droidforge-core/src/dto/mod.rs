//! DTOs for the GitHub REST API
//!
//! Wire envelopes for the endpoints the build relay consumes. Request
//! bodies serialize exactly what the API expects; response envelopes
//! ignore the fields we never read.

pub mod artifacts;
pub mod contents;
pub mod dispatch;
pub mod runs;
