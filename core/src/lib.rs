#![no_std]

extern crate alloc;

pub use burst::*;
pub use countdown::*;
pub use error::*;
pub use ornament::*;
pub use surprise::*;
pub use types::*;

mod burst;
mod countdown;
mod error;
mod ornament;
mod surprise;
mod types;
