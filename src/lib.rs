#![cfg_attr(not(test), no_std)]

mod addition;
pub use addition::addition;
