//! Release synchronization layer for the Go toolchain version map
//!
//! This module provides the pieces that turn the upstream release index into
//! the persisted map of source digests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ ReleaseIndex│────▶│   Merger    │────▶│    Store    │
//! │  (fetch)    │     │  (fold)     │◀────│ (json files)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │   go.dev    │     │   Digest    │
//! │ (/dl?json)  │     │ (hex → SRI) │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`index`]: `ReleaseIndex` trait for fetching the release list
//! - [`go_dev`]: go.dev implementation of `ReleaseIndex`
//! - [`digest`]: Hex digest to SRI conversion
//! - [`version`]: Release label parsing and the latest stable version
//! - [`merger`]: Folds releases into the version map
//! - [`store`]: JSON persistence for the version map and latest version
//! - [`error`]: Error types for fetching, digests and persistence
//! - [`types`]: Wire types of the release index

pub mod digest;
pub mod error;
pub mod go_dev;
pub mod index;
pub mod merger;
pub mod store;
pub mod types;
pub mod version;
