//! Release extraction and ordering
//!
//! Turns free-form text such as filenames, tag names or release titles into a
//! [`Release`] and orders the results.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Normalizer  │────▶│  Extractor  │────▶│   Release   │
//! │  (cleanup)  │     │ (heuristic) │     │  (compare)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            ▲                   │
//!                            │                   ▼
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │    Feed     │     │   Dotted    │
//!                     │  (entries)  │     │(version cmp)│
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`normalizer`]: strips program names, prefixes and noise words
//! - [`extractor`]: detects the stability channel and the version number
//! - [`channel`]: the closed set of stability channels
//! - [`types`]: the `Release` value and its comparison rules
//! - [`dotted`]: three-way comparison of dotted version strings
//! - [`feed`]: release-listing entries and stable/prerelease summaries
//! - [`error`]: error types for extraction and feed loading

pub mod channel;
pub mod dotted;
pub mod error;
pub mod extractor;
pub mod feed;
pub mod normalizer;
pub mod types;

pub use channel::Channel;
pub use error::{ExtractError, FeedError};
pub use extractor::extract;
pub use types::Release;
