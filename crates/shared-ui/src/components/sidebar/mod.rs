mod component;
mod tree;
pub use component::*;
pub use tree::*;
