//! CLI command implementations.

pub(crate) mod render;
pub(crate) mod source;
pub(crate) mod tree;

pub(crate) use render::RenderArgs;
pub(crate) use tree::TreeArgs;
