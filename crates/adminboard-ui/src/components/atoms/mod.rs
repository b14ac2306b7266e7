pub mod avatar;
pub mod icon;
pub mod status_badge;

pub use avatar::*;
pub use icon::*;
pub use status_badge::*;
