//! The bootstrap sequence: initialize the windowing library, query its
//! required instance extensions, create a Vulkan instance once and release
//! it again.

use std::io::Write;

use crate::error::BootstrapError;
use crate::instance::{InstanceApi, InstanceConfig, OwnedInstance};
use crate::platform::WindowingSystem;

pub const INIT_FAILED_MESSAGE: &str = "Windowing library initialization error";
pub const EXTENSIONS_UNAVAILABLE_MESSAGE: &str =
    "Windowing library provides no Vulkan instance extensions";
pub const CREATE_FAILED_MESSAGE: &str = "Unable to create Vulkan instance";
pub const INSTANCE_CREATED_MESSAGE: &str = "Vulkan instance created";

/// Runs the sequence once, reporting the outcome on `out` or `err`.
///
/// Exactly one line is written per run: initialization and extension query
/// failures go to `err`, creation failure and success to `out`. Causes are
/// only logged at debug level. The instance is destroyed before
/// returning if and only if it was created.
pub fn run<P, A>(
    platform: &mut P,
    api: &A,
    config: &InstanceConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), BootstrapError>
where
    P: WindowingSystem,
    A: InstanceApi,
{
    if let Err(e) = platform.initialize() {
        log::debug!("{INIT_FAILED_MESSAGE}: {e}");
        report(err, INIT_FAILED_MESSAGE);
        return Err(BootstrapError::Initialization(e));
    }
    log::info!("Windowing library initialized");

    let extensions = match platform.required_instance_extensions() {
        Ok(extensions) if extensions.is_empty() => {
            log::debug!("{EXTENSIONS_UNAVAILABLE_MESSAGE}: empty list");
            report(err, EXTENSIONS_UNAVAILABLE_MESSAGE);
            return Err(BootstrapError::NoExtensions);
        }
        Ok(extensions) => extensions,
        Err(e) => {
            log::debug!("{EXTENSIONS_UNAVAILABLE_MESSAGE}: {e}");
            report(err, EXTENSIONS_UNAVAILABLE_MESSAGE);
            return Err(BootstrapError::ExtensionQuery(e));
        }
    };
    log::info!("{} required instance extensions", extensions.len());
    for name in extensions.names() {
        log::debug!("  {}", name.to_string_lossy());
    }

    let app_info = config.application_info();
    let create_info = config.create_info(&extensions, app_info.as_ref());

    let instance = match OwnedInstance::create(api, &create_info) {
        Ok(instance) => instance,
        Err(e) => {
            log::debug!("{CREATE_FAILED_MESSAGE}: {e}");
            report(out, CREATE_FAILED_MESSAGE);
            return Err(BootstrapError::InstanceCreation(e));
        }
    };
    log::info!("{INSTANCE_CREATED_MESSAGE}");
    report(out, INSTANCE_CREATED_MESSAGE);

    drop(instance);
    Ok(())
}

/// Writes one user-facing line. A broken stream must not mask the outcome
/// being reported.
fn report(stream: &mut impl Write, message: &str) {
    if let Err(e) = writeln!(stream, "{message}") {
        log::debug!("failed to report {message:?}: {e}");
    }
}
