pub mod assets;
pub mod authz;
pub mod config;
pub mod entity;
pub mod error;
pub mod shaper;
pub mod validate;
