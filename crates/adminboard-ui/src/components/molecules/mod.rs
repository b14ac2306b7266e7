pub mod breadcrumb;
pub mod card_box;
pub mod info_box;
pub mod navbar_item;
pub mod sidebar_menu;
pub mod tabs;
pub mod user_menu;
pub mod value_box;

pub use breadcrumb::*;
pub use card_box::*;
pub use info_box::*;
pub use navbar_item::*;
pub use sidebar_menu::*;
pub use tabs::*;
pub use user_menu::*;
pub use value_box::*;
