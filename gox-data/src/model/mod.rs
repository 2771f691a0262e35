pub mod page;
pub mod trade;
