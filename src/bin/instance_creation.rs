use std::io;
use std::process::ExitCode;

use vulkan_bootstrap::instance::{InstanceConfig, VulkanLoader};
use vulkan_bootstrap::platform::WinitPlatform;

fn main() -> ExitCode {
    env_logger::init();

    let mut platform = WinitPlatform::new();
    let result = vulkan_bootstrap::run(
        &mut platform,
        &VulkanLoader,
        &InstanceConfig::default(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("bootstrap failed: {e:?}");
            ExitCode::from(e.exit_code())
        }
    }
}
