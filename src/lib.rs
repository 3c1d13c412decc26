pub mod cli_commands;
pub mod core;
mod linestring;
mod points;
mod polygons;
pub mod serialization;
mod surface;

pub use self::core::*;
pub use self::linestring::*;
pub use self::points::*;
pub use self::polygons::*;
pub use self::surface::*;
