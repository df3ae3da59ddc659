mod admin;
mod common;
mod competition;
mod edition;
mod event;
mod photo;
mod podium;
mod rating;
mod weather;

pub use admin::*;
pub use common::*;
pub use competition::*;
pub use edition::*;
pub use event::*;
pub use photo::*;
pub use podium::*;
pub use rating::*;
pub use weather::*;
