//! KritPokeMap Frontend
//!
//! Browser client for the KritPokeMap community, built with Leptos (WASM).
//!
//! # Features
//!
//! - Interactive sighting map for Kanchanaburi province
//! - Click-to-place sighting reports
//! - Shared live chat feed (30-second polling)
//! - Admin dashboard for accounts and moderation
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All business logic, persistence, and authentication live in a
//! remote JSON REST API; this crate is presentation, form handling, and
//! client-side routing over that contract.

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
pub mod state;
