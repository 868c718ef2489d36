pub mod error;
pub mod expansion;
pub mod models;
pub mod nav;
pub mod requests;

pub use error::*;
pub use expansion::*;
pub use models::*;
pub use nav::*;
pub use requests::*;
