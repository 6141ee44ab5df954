pub mod animation;
pub mod data;
pub mod utils;
