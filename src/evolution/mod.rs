pub mod log;
pub mod options;
pub mod sga;

pub use log::LogLine;
pub use options::{SgaOptions, SgaOptionsBuilder};
pub use sga::Sga;
