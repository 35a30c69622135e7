use ash::vk;

use crate::error::InstanceError;
use crate::platform::ExtensionList;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VulkanApiVersion {
    V1_0,
    V1_1,
    V1_2,
    V1_3,
}

impl VulkanApiVersion {
    pub fn raw(self) -> u32 {
        match self {
            VulkanApiVersion::V1_0 => vk::API_VERSION_1_0,
            VulkanApiVersion::V1_1 => vk::API_VERSION_1_1,
            VulkanApiVersion::V1_2 => vk::API_VERSION_1_2,
            VulkanApiVersion::V1_3 => vk::API_VERSION_1_3,
        }
    }
}

/// Instance creation parameters besides the extension list.
///
/// The default leaves everything unset: no application info, no layers, no
/// API version pin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InstanceConfig {
    pub api_version: Option<VulkanApiVersion>,
}

impl InstanceConfig {
    pub fn with_api_version(api_version: VulkanApiVersion) -> Self {
        Self {
            api_version: Some(api_version),
        }
    }

    pub fn application_info(&self) -> Option<vk::ApplicationInfo<'static>> {
        self.api_version
            .map(|version| vk::ApplicationInfo::default().api_version(version.raw()))
    }

    pub fn create_info<'a>(
        &self,
        extensions: &'a ExtensionList<'_>,
        app_info: Option<&'a vk::ApplicationInfo<'a>>,
    ) -> vk::InstanceCreateInfo<'a> {
        let create_info =
            vk::InstanceCreateInfo::default().enabled_extension_names(extensions.as_ptrs());
        match app_info {
            Some(app_info) => create_info.application_info(app_info),
            None => create_info,
        }
    }
}

/// Instance creation and destruction entry points.
pub trait InstanceApi {
    type Instance;

    fn create_instance(
        &self,
        create_info: &vk::InstanceCreateInfo<'_>,
    ) -> Result<Self::Instance, InstanceError>;

    fn destroy_instance(&self, instance: &Self::Instance);
}

/// Sole owner of a successfully created instance; destroys it on drop.
pub struct OwnedInstance<'a, A: InstanceApi> {
    api: &'a A,
    handle: A::Instance,
}

impl<'a, A: InstanceApi> OwnedInstance<'a, A> {
    pub fn create(
        api: &'a A,
        create_info: &vk::InstanceCreateInfo<'_>,
    ) -> Result<Self, InstanceError> {
        let handle = api.create_instance(create_info)?;
        Ok(Self { api, handle })
    }

    pub fn handle(&self) -> &A::Instance {
        &self.handle
    }
}

impl<A: InstanceApi> Drop for OwnedInstance<'_, A> {
    fn drop(&mut self) {
        self.api.destroy_instance(&self.handle);
        log::info!("Vulkan instance destroyed");
    }
}

/// [`InstanceApi`] backed by the system Vulkan loader.
#[derive(Clone, Copy, Debug, Default)]
pub struct VulkanLoader;

pub struct VulkanInstance {
    handle: ash::Instance,
    // the loader library must outlive the instance
    #[allow(unused)]
    entry: ash::Entry,
}

impl VulkanLoader {
    fn load_entry() -> Result<ash::Entry, InstanceError> {
        #[cfg(feature = "linked")]
        let entry = ash::Entry::linked();
        #[cfg(not(feature = "linked"))]
        let entry = unsafe { ash::Entry::load()? };
        Ok(entry)
    }
}

impl InstanceApi for VulkanLoader {
    type Instance = VulkanInstance;

    fn create_instance(
        &self,
        create_info: &vk::InstanceCreateInfo<'_>,
    ) -> Result<VulkanInstance, InstanceError> {
        let entry = Self::load_entry()?;
        let handle = unsafe { entry.create_instance(create_info, None)? };
        Ok(VulkanInstance { handle, entry })
    }

    fn destroy_instance(&self, instance: &VulkanInstance) {
        unsafe { instance.handle.destroy_instance(None) };
    }
}
