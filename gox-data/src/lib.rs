pub mod download;
pub mod error;
pub mod exchange;
pub mod model;
pub mod shared;
pub mod sink;
