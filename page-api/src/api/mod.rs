mod field;
mod form;
mod region;
mod tabs;

pub use field::*;
pub use form::*;
pub use region::*;
pub use tabs::*;
