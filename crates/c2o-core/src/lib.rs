pub mod collection;
pub mod config;
pub mod convert;
pub mod error;
pub mod openapi;

pub use convert::convert;
