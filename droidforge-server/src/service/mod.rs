//! Service Module
//!
//! Business logic of the build relay: the staged pipeline that turns an
//! uploaded source archive into a compiled binary.

pub mod build;
pub mod poller;
pub mod unpack;
