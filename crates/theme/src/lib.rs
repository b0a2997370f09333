//! Keyboard toolbar styling.
//!
//! [`ToolbarStyle`] is the plain value a toolbar reads to size and shade
//! itself.  [`StyleEnv`] carries it down a view tree: any ancestor can
//! override the style for its subtree, and a lookup with no override in
//! scope yields [`ToolbarStyle::STANDARD`].

pub mod colors;
pub mod environment;
pub mod style;

pub use colors::Color;
pub use environment::StyleEnv;
pub use style::ToolbarStyle;
