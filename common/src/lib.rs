//! Shared models for `sweepr`.
//!
//! Everything here is plain data or pure parsing: the scan engine in
//! `sweepr-core` and the terminal front-end both depend on it, never the
//! other way around.

pub mod config;
pub mod error;
pub mod network;
pub mod report;
