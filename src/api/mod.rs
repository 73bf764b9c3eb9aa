//! HTTP API Client
//!
//! Typed call signatures for the KritPokeMap REST API, one module per
//! resource. Shared request plumbing (base URL, bearer credential, error
//! decoding) lives in [`client`].

pub mod admin;
pub mod auth;
pub mod chat;
pub mod client;
pub mod sightings;

pub use client::{get_api_base, set_api_base, ApiError};
