pub mod config;
pub mod demo;
pub mod logging;
pub mod report;
pub mod toolkit;

pub use config::*;
pub use demo::*;
pub use logging::*;
pub use report::*;
pub use toolkit::*;
