pub mod bootstrap;
pub mod error;
pub mod instance;
pub mod platform;

pub use bootstrap::run;
pub use error::{BootstrapError, InstanceError, PlatformError};
