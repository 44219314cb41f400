pub mod error;
pub mod gaps;
pub mod model;
pub mod naming;
pub mod time;

pub use error::*;
pub use gaps::*;
pub use model::*;
pub use naming::*;
pub use time::*;
