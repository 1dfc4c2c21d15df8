pub use board::*;
pub use catalog::*;
pub use controller::*;
pub use filter::*;
pub use slot_set::*;
pub use tooltip::*;
pub use view::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod bitset;
mod board;
mod catalog;
mod controller;
mod filter;
mod slot_set;
mod tooltip;
mod view;
mod visualization;
