pub mod formatters;
pub mod session;
pub mod ticker;
