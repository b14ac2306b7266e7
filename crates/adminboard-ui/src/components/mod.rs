#![doc(hidden)]

//! AdminLTE component wrappers organised with Atomic Design layers.

pub mod atoms;
pub mod molecules;
pub mod organisms;
pub mod templates;

pub use atoms::*;
pub use molecules::*;
pub use organisms::*;
pub use templates::*;
