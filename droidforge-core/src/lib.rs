//! Droidforge Core
//!
//! Core types for the droidforge build relay.
//!
//! This crate contains:
//! - Domain types: workflow runs, artifacts and their lifecycle enums
//! - DTOs: wire envelopes exchanged with the GitHub REST API

pub mod domain;
pub mod dto;
