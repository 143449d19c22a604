pub mod board;
#[allow(clippy::module_inception)]
pub mod gogame;
pub mod group;
pub mod resolver;
pub mod suggestion;
