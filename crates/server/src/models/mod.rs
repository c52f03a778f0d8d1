pub mod resource;
pub mod seed;
