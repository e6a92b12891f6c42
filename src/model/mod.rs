pub mod config;
pub mod document;
pub mod handle;
pub mod mru;
pub mod render;

pub use config::*;
pub use document::*;
pub use handle::*;
pub use mru::*;
pub use render::*;
