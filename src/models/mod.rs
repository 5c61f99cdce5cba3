pub mod common;
pub mod device;
pub mod health;
pub mod image;
pub mod knowledge;
pub mod motion;
pub mod persona;
pub mod shell;
pub mod text;

pub use common::*;
pub use device::*;
pub use health::*;
pub use image::*;
pub use knowledge::*;
pub use motion::*;
pub use persona::*;
pub use shell::*;
pub use text::*;
