//! Windowing library seam: initialization and the instance extensions it
//! needs for Vulkan interop.

use std::ffi::{c_char, CStr};

use raw_window_handle::HasDisplayHandle;
use winit::event_loop::EventLoop;

use crate::error::PlatformError;

/// Ordered, borrowed list of instance extension names.
///
/// Every entry is non-null and non-empty, so [`ExtensionList::len`] is the
/// number of names handed to `vkCreateInstance`.
#[derive(Debug, Clone)]
pub struct ExtensionList<'a> {
    names: Vec<&'a CStr>,
    ptrs: Vec<*const c_char>,
}

impl<'a> ExtensionList<'a> {
    pub fn new(names: Vec<&'a CStr>) -> Result<Self, PlatformError> {
        if let Some(index) = names.iter().position(|name| name.is_empty()) {
            return Err(PlatformError::EmptyExtensionName { index });
        }
        let ptrs = names.iter().map(|name| name.as_ptr()).collect();
        Ok(Self { names, ptrs })
    }

    /// Builds the list from a pointer array owned by the windowing library.
    ///
    /// # Safety
    ///
    /// Every non-null pointer in `raw` must point to a NUL-terminated string
    /// that stays valid for `'a`.
    pub unsafe fn from_raw(raw: &'a [*const c_char]) -> Result<Self, PlatformError> {
        let mut names = Vec::with_capacity(raw.len());
        for (index, &ptr) in raw.iter().enumerate() {
            if ptr.is_null() {
                return Err(PlatformError::NullExtensionName { index });
            }
            names.push(CStr::from_ptr(ptr));
        }
        Self::new(names)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[&'a CStr] {
        &self.names
    }

    pub fn as_ptrs(&self) -> &[*const c_char] {
        &self.ptrs
    }
}

pub trait WindowingSystem {
    fn initialize(&mut self) -> Result<(), PlatformError>;

    fn required_instance_extensions(&self) -> Result<ExtensionList<'_>, PlatformError>;
}

/// [`WindowingSystem`] backed by a winit event loop. No window is created;
/// the event loop's display connection is enough to pick the surface
/// extensions.
#[derive(Default)]
pub struct WinitPlatform {
    event_loop: Option<EventLoop<()>>,
}

impl WinitPlatform {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WindowingSystem for WinitPlatform {
    fn initialize(&mut self) -> Result<(), PlatformError> {
        // winit allows a single event loop per process
        if self.event_loop.is_none() {
            self.event_loop = Some(EventLoop::new()?);
        }
        Ok(())
    }

    fn required_instance_extensions(&self) -> Result<ExtensionList<'_>, PlatformError> {
        let event_loop = self
            .event_loop
            .as_ref()
            .ok_or(PlatformError::NotInitialized)?;
        let display_handle = event_loop.display_handle()?.as_raw();
        let raw = ash_window::enumerate_required_extensions(display_handle)
            .map_err(PlatformError::Unsupported)?;
        unsafe { ExtensionList::from_raw(raw) }
    }
}
