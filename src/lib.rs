//! Shortform - a terminal front-end for a link-shortening service
//!
//! This library provides the pieces behind the `shortform` binary: the pure
//! form cores, the HTTP client layer and the terminal interface.
//!
//! # Architecture
//! - `form`: pure state machines (masked duration editor, tri-state button,
//!   validation gate, request payload)
//! - `client`: HTTP access to the config and link-creation endpoints
//! - `interfaces`: the ratatui terminal interface
//! - `config`: configuration management
//! - `system`: logging and panic handling
//! - `utils`: URL and expiry-date helpers

pub mod client;
pub mod config;
pub mod errors;
pub mod form;
pub mod interfaces;
pub mod system;
pub mod utils;
