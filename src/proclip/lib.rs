//! # Proclip Architecture
//!
//! Proclip saves files as reusable templates ("clips") and pastes them back,
//! substituting `{{ name = default }}` placeholders along the way. Like any
//! well-behaved tool it is a library first; the `proclip` binary is one client.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders messages, maps errors to exit  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade owning the resolved clip directory           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - new / paste / list / config over explicit directories    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model.rs, variables.rs, format.rs)                   │
//! │  - The Clip entity, placeholder engine and .clip codec      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//! Diagnostics go through `tracing`; installing a subscriber is the client's
//! call.
//!
//! ## Module Overview
//!
//! - [`model`]: the [`model::Clip`] entity with `read`, `write` and `paste`
//! - [`variables`]: placeholder discovery, parsing and substitution
//! - [`format`]: the `.clip` binary layout
//! - [`api`]: the facade clients talk to
//! - [`commands`]: business logic per command
//! - [`config`]: clip directory resolution and `config.json`
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod variables;
