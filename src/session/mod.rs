//! Frame-loop driver for hosts.

pub mod driver;

pub use driver::{Input, Session};
