//! Publishing is metadata capture only: a shot's frames and disk usage are
//! snapshotted into a record and appended to the tracker. Render files are
//! never moved, copied or deleted.

pub mod engine;
pub mod error;
pub mod manifest;
pub mod store;

pub use engine::*;
pub use error::*;
pub use manifest::*;
pub use store::*;
