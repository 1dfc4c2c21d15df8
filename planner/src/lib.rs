mod command;
mod config;
mod logging;
mod session;
pub use command::*;
pub use config::*;
pub use logging::*;
pub use session::*;
