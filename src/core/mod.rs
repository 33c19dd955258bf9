//! Core library components.
//!
//! This module contains the reusable business logic for credential
//! resolution, identity lookup, backend config rendering, and external
//! tool invocation.

pub mod backend;
pub mod config;
pub mod constants;
pub mod creds;
pub mod environment;
pub mod identity;
pub mod invoke;
pub mod proc;
