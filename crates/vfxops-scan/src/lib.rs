//! Filesystem side of render validation: locating shot render directories,
//! reading frame numbers out of file names, and summing render disk usage.

pub mod disk;
pub mod pattern;
pub mod sequence;

pub use disk::*;
pub use pattern::*;
pub use sequence::*;
