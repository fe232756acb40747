#![allow(clippy::new_without_default)]
pub mod command;
pub mod error;
pub mod freq;
pub mod list;
pub mod numeric;
pub mod playground;
pub mod search;
pub mod sort;
pub mod stack;
pub mod subset;
