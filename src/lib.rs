pub mod console;
pub mod core;
pub mod gogame;
