pub mod avatar;
pub mod badge;
pub mod card;
pub mod input;
pub mod label;
pub mod page_header;
pub mod separator;
pub mod switch;

// Navigation & chrome
pub mod dropdown_menu;
pub mod navbar;
pub mod sidebar;

// Re-exports for convenience
pub use avatar::*;
pub use badge::*;
pub use card::*;
pub use dropdown_menu::*;
pub use input::*;
pub use label::*;
pub use navbar::*;
pub use page_header::*;
pub use separator::*;
pub use sidebar::*;
pub use switch::*;
