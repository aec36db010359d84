//! Segment type names.
//!
//! [`ComponentType`] is the fixed vocabulary of element kinds found in UI
//! automation trees. Anything outside it goes through [`SegmentType::Named`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::result::XPathError;

/// Commonly used path component types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    /// Top-level window
    Window,
    /// Pane container
    Pane,
    /// Push button
    Button,
    /// Custom control
    Custom,
    /// Row or cell of a data grid
    DataItem,
    /// Grouping container
    Group,
    /// Radio button
    RadioButton,
}

impl ComponentType {
    /// Every member of the vocabulary, in declaration order
    pub const ALL: [Self; 7] = [
        Self::Window,
        Self::Pane,
        Self::Button,
        Self::Custom,
        Self::DataItem,
        Self::Group,
        Self::RadioButton,
    ];

    /// Text used for the segment in a path
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Window => "Window",
            Self::Pane => "Pane",
            Self::Button => "Button",
            Self::Custom => "Custom",
            Self::DataItem => "DataItem",
            Self::Group => "Group",
            Self::RadioButton => "RadioButton",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = XPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| XPathError::UnknownComponentType {
                name: s.to_string(),
            })
    }
}

/// Type name of a single path segment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SegmentType {
    /// Member of the fixed vocabulary
    Known(ComponentType),
    /// Arbitrary element name
    Named(String),
}

impl SegmentType {
    /// Text used for the segment in a path
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Known(ty) => ty.as_str(),
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ComponentType> for SegmentType {
    fn from(ty: ComponentType) -> Self {
        Self::Known(ty)
    }
}

impl From<&str> for SegmentType {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for SegmentType {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}
