//! XPath Builder: fluent locators for UI automation trees
//!
//! Builds XPath-like strings such as
//! `/Window[@Name="Calculator"]/Pane/Button[@AutomationId="Equals"]` from
//! chainable calls instead of hand-written path text.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  PathBuilder  (path + remembered root, long-lived)         │
//! │     │  add_segment_with(ty, |c| ...)                       │
//! │     ▼                                                      │
//! │  PathComponent  (clauses of one segment, single use)       │
//! │     │  render()                                            │
//! │     ▼                                                      │
//! │  "/Type[@Attr=\"Value\"][starts-with(@Attr,\"V\")]"        │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! The library produces strings only. Evaluating them against a UI tree is
//! the job of whatever driver consumes the path.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod builder;
mod component;
mod component_type;
mod config;
mod grammar;
mod result;
mod shorthands;

pub use builder::{ChainOptions, PathBuilder};
pub use component::PathComponent;
pub use component_type::{ComponentType, SegmentType};
pub use config::{BuilderConfig, RemovalStrategy};
pub use result::{XPathError, XPathResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::builder::{ChainOptions, PathBuilder};
    pub use super::component::PathComponent;
    pub use super::component_type::{ComponentType, SegmentType};
    pub use super::config::{BuilderConfig, RemovalStrategy};
    pub use super::result::{XPathError, XPathResult};
}
