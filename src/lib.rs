//! Value Curve - Blue Ocean strategy canvas service
//!
//! This crate manages named strategy contours of IST/SOLL rated
//! touchpoints, persists them in a key-value store, derives chart views
//! and asks an AI provider for cached strategy advice.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
