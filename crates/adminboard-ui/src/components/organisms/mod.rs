pub mod body;
pub mod controlbar;
pub mod footer;
pub mod navbar;
pub mod sidebar;

pub use body::*;
pub use controlbar::*;
pub use footer::*;
pub use navbar::*;
pub use sidebar::*;
