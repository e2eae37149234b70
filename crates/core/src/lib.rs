//! Ironrail Core - Shared types library.
//!
//! This crate provides common types used across all Ironrail components:
//! - `api` - HTTP server (auth, trains, bookings)
//! - `cli` - Command-line tools for seeding and account management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, roles, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
