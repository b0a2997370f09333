//! View tree and layout for the keyboard toolbar.
//!
//! [`ViewNode`] is a lightweight description of the UI hierarchy in which
//! any node may override the toolbar style for its subtree.  The resolved
//! style is what [`ToolbarLayout`] turns into concrete metrics.

pub mod layout;
pub mod tree;

pub use layout::{surface_style, ItemFrame, ToolbarLayout};
pub use tree::ViewNode;
