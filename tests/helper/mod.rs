//! Shared test utilities

#![allow(dead_code)]

mod index;

pub use index::{FailingIndex, StaticIndex, release, release_without_source};
