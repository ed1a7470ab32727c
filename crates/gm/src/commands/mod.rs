//! CLI command implementations.

pub(crate) mod layout;
pub(crate) mod render;

pub(crate) use layout::LayoutCommand;
pub(crate) use render::{RenderArgs, RenderMode};
