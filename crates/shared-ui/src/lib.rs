pub mod components;
pub mod outside_click;
pub mod theme;

pub use components::*;
pub use outside_click::*;
