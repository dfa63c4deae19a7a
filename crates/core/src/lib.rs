//! Hotelier Core - Shared types library.
//!
//! This crate provides common types used across the Hotelier components:
//! - `console` - The booking/administration console library
//! - `cli` - The command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and emails, plus the
//!   role and status enums (including the booking lifecycle table)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
