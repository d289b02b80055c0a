pub mod album;
mod config;
pub mod layout;
mod options;
pub mod pdf;
mod types;

pub use album::{AlbumOptions, generate_album};
pub use config::*;
pub use options::*;
pub use pdf::generate_catalog;
pub use types::*;
