//! # logo-search
//!
//! A search-and-select widget for brand logos. The user types a query, the
//! widget looks up matching brands on a remote service, shows them as a list,
//! and lets the user pick one to display and download. Working state is
//! mirrored into key-value storage so it survives reloads.
//!
//! This crate holds the widget *model*: state transitions, the lookup and
//! storage ports, design tokens and settings. It builds for
//! `wasm32-unknown-unknown` with `default-features = false`; the browser
//! binding lives in the `logo-search-ui` workspace member.
//!
//! ## Quick Start
//!
//! ```rust
//! use logo_search::domain::Suggestion;
//! use logo_search::widget::Autocomplete;
//!
//! let mut widget = Autocomplete::default();
//! let request = widget.input("nike").expect("non-empty text issues a lookup");
//! let nike = Suggestion::new("Nike, Inc.", "nike.com", "https://logo/nike.png");
//! widget.apply_lookup(&request, Ok(vec![nike]));
//!
//! let (submission, _follow_up) = widget.submit();
//! assert_eq!(submission.value, "nike.com");
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: suggestion records, input state, snapshot, submission
//! - **Widget**: pure transitions over the domain types
//! - **Ports**: [`lookup::BrandLookup`] and [`storage::KeyValueStore`]
//! - **Session**: a widget bound to a snapshot store
//! - **Config**: settings with defaults, file/env loading on native targets

pub mod config;
pub mod domain;
pub mod download;
pub mod error;
pub mod lookup;
pub mod session;
pub mod storage;
pub mod tokens;
pub mod widget;

#[cfg(feature = "native")]
pub mod cli;

pub use error::{Error, Result};
