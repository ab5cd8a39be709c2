pub mod config;
pub mod logging;
pub mod pagination;
pub mod token;

pub use config::{Config, MailConfig};
pub use logging::init_logging;
