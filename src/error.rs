use ash::vk;

#[derive(thiserror::Error, Debug)]
pub enum PlatformError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("display handle unavailable: {0}")]
    DisplayHandle(#[from] raw_window_handle::HandleError),
    #[error("vulkan is not supported by this display: {0}")]
    Unsupported(vk::Result),
    #[error("windowing library is not initialized")]
    NotInitialized,
    #[error("extension name #{index} is a null pointer")]
    NullExtensionName { index: usize },
    #[error("extension name #{index} is empty")]
    EmptyExtensionName { index: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum InstanceError {
    #[error("failed to load vulkan library: {0}")]
    Loading(#[from] ash::LoadingError),
    #[error("vkCreateInstance failed: {0}")]
    Vulkan(#[from] vk::Result),
}

#[derive(thiserror::Error, Debug)]
pub enum BootstrapError {
    #[error("windowing library initialization failed")]
    Initialization(#[source] PlatformError),
    #[error("failed to query required instance extensions")]
    ExtensionQuery(#[source] PlatformError),
    #[error("windowing library requires no instance extensions")]
    NoExtensions,
    #[error("instance creation failed")]
    InstanceCreation(#[source] InstanceError),
}

impl BootstrapError {
    /// Every failure maps to the same process status.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
