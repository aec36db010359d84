//! Fluent path assembly.
//!
//! [`PathBuilder`] owns the growing path and an optional remembered root.
//! Segments are appended in call order; predicates for a segment are
//! configured through a [`PathComponent`] handed to a closure.
//!
//! # Example
//!
//! ```rust
//! use xpath_builder::prelude::*;
//!
//! let mut builder = PathBuilder::new();
//! builder
//!     .add_segment_with(ComponentType::Window, |w| {
//!         w.with_name("Calculator");
//!     })
//!     .add_segment(ComponentType::Pane)
//!     .add_segment_with("Text", |t| {
//!         t.with_automation_id("Display");
//!     });
//!
//! assert_eq!(
//!     builder.build(),
//!     r#"/Window[@Name="Calculator"]/Pane/Text[@AutomationId="Display"]"#
//! );
//! ```
//!
//! Two ways of reusing builder syntax exist and they are kept apart:
//! [`PathBuilder::chain`] runs more calls against the *same* builder, while
//! [`PathBuilder::set_root_with`] and [`PathBuilder::chain_with_root_builder`]
//! run a closure against a *fresh* builder and copy its text.

use std::fmt;

use tracing::{debug, trace};

use crate::component::PathComponent;
use crate::component_type::SegmentType;
use crate::config::BuilderConfig;
use crate::grammar;
use crate::result::{XPathError, XPathResult};

/// Options for [`PathBuilder::chain`] and its root-appending variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainOptions {
    /// Clear the path before running the chain
    pub clear_on_new_chain: bool,
    /// Re-seed the cleared path with the root. Only used when clearing.
    pub keep_root: bool,
}

impl Default for ChainOptions {
    fn default() -> Self {
        Self {
            clear_on_new_chain: true,
            keep_root: true,
        }
    }
}

impl ChainOptions {
    /// Default options: clear and keep the root
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the path is cleared first
    #[must_use]
    pub const fn clear_on_new_chain(mut self, clear: bool) -> Self {
        self.clear_on_new_chain = clear;
        self
    }

    /// Set whether the root survives the clear
    #[must_use]
    pub const fn keep_root(mut self, keep: bool) -> Self {
        self.keep_root = keep;
        self
    }
}

/// Builder for XPath-style UI automation locators.
///
/// Not synchronized: every mutating call takes `&mut self`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathBuilder {
    path: String,
    root: String,
    config: BuilderConfig,
}

impl PathBuilder {
    /// Create an empty builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with the given configuration
    #[must_use]
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            path: String::new(),
            root: String::new(),
            config,
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Remembered root, empty if none was set
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Path built so far
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Check if the path is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Path built so far. Does not consume or reset the builder.
    #[must_use]
    pub fn build(&self) -> String {
        self.path.clone()
    }

    /// Set the root and append it to the path.
    ///
    /// Replaces any previous root.
    pub fn set_root(&mut self, path_root: &str) -> &mut Self {
        self.path.push_str(path_root);
        self.root = path_root.to_string();
        if self.config.trace_operations {
            trace!(root = %self.root, path = %self.path, "root set");
        }
        self
    }

    /// Set the root from the output of a fresh builder.
    ///
    /// `build` runs against a new, independent builder sharing only this
    /// builder's configuration; its text is then passed to
    /// [`set_root`](Self::set_root).
    pub fn set_root_with<F>(&mut self, build: F) -> &mut Self
    where
        F: FnOnce(&mut PathBuilder),
    {
        let root = self.render_fresh(build);
        self.set_root(&root)
    }

    /// Append a bare `/<type>` segment
    pub fn add_segment(&mut self, ty: impl Into<SegmentType>) -> &mut Self {
        let ty = ty.into();
        grammar::push_segment(&mut self.path, ty.name());
        if self.config.trace_operations {
            trace!(segment = %ty, path = %self.path, "segment appended");
        }
        self
    }

    /// Append `/<type>` followed by the clauses `configure` adds
    pub fn add_segment_with<F>(&mut self, ty: impl Into<SegmentType>, configure: F) -> &mut Self
    where
        F: FnOnce(&mut PathComponent),
    {
        let ty = ty.into();
        grammar::push_segment(&mut self.path, ty.name());

        let mut component = PathComponent::new();
        configure(&mut component);
        self.path.push_str(component.render());

        if self.config.trace_operations {
            trace!(
                segment = %ty,
                clauses = component.clause_count(),
                path = %self.path,
                "segment appended"
            );
        }
        self
    }

    /// Empty the path, optionally re-seeding it with the root.
    ///
    /// The remembered root itself is never cleared, so a later
    /// `clear(true)` restores it even after `clear(false)`.
    pub fn clear(&mut self, keep_root: bool) -> &mut Self {
        self.path.clear();
        if keep_root && !self.root.is_empty() {
            self.path.push_str(&self.root);
        }
        if self.config.trace_operations {
            trace!(keep_root, path = %self.path, "path cleared");
        }
        self
    }

    /// Run `configure` against this builder, clearing first if requested
    pub fn chain<F>(&mut self, configure: F, options: ChainOptions) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        if options.clear_on_new_chain {
            self.clear(options.keep_root);
        }
        configure(self);
        self
    }

    /// Extend the root with `append_root`, then [`chain`](Self::chain).
    ///
    /// The root grows by concatenation across calls. The updated root is
    /// appended to the path before `chain` applies its own clear, so with
    /// `keep_root` off and clearing on, the chain starts from an empty path.
    pub fn chain_with_root<F>(
        &mut self,
        append_root: &str,
        configure: F,
        options: ChainOptions,
    ) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        if options.clear_on_new_chain {
            self.clear(options.keep_root);
        }
        self.extend_root(append_root);
        self.chain(configure, options)
    }

    /// Extend the root with the output of a fresh builder, then
    /// [`chain`](Self::chain)
    pub fn chain_with_root_builder<R, F>(
        &mut self,
        append_root: R,
        configure: F,
        options: ChainOptions,
    ) -> &mut Self
    where
        R: FnOnce(&mut PathBuilder),
        F: FnOnce(&mut Self),
    {
        if options.clear_on_new_chain {
            self.clear(options.keep_root);
        }
        let fragment = self.render_fresh(append_root);
        self.extend_root(&fragment);
        self.chain(configure, options)
    }

    /// Remove the last segment that carries at least one predicate clause.
    ///
    /// Bare segments such as `/Pane` are never removed. When the path holds
    /// no segment with clauses the call fails and the path is unchanged.
    pub fn back(&mut self) -> XPathResult<&mut Self> {
        let Some(range) =
            grammar::last_removable_segment(&self.path, self.config.removal_strategy)
        else {
            if self.config.trace_operations {
                debug!(path = %self.path, "back() found no segment with predicates");
            }
            return Err(XPathError::NoRemovableSegment {
                path: self.path.clone(),
            });
        };

        if self.config.trace_operations {
            debug!(
                removed = &self.path[range.clone()],
                strategy = %self.config.removal_strategy,
                "segment removed"
            );
        }
        self.path.replace_range(range, "");
        Ok(self)
    }

    /// Alias for [`back`](Self::back)
    pub fn up(&mut self) -> XPathResult<&mut Self> {
        self.back()
    }

    fn extend_root(&mut self, fragment: &str) {
        self.root.push_str(fragment);
        self.path.push_str(&self.root);
        if self.config.trace_operations {
            trace!(root = %self.root, path = %self.path, "root extended");
        }
    }

    fn render_fresh<F>(&self, build: F) -> String
    where
        F: FnOnce(&mut PathBuilder),
    {
        let mut fresh = Self::with_config(self.config.clone());
        build(&mut fresh);
        fresh.path
    }
}

impl fmt::Display for PathBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl From<PathBuilder> for String {
    fn from(builder: PathBuilder) -> Self {
        builder.path
    }
}
