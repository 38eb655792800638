#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

mod common;
mod error;
pub mod storage;

pub use common::*;
pub use error::*;
