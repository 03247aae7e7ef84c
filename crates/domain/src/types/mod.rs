//! Common data types used throughout the application

pub mod capability;
pub mod content_size;
pub mod snapshot;
pub mod value;

pub use capability::{Capability, CapabilityDescriptor, Category};
pub use content_size::ContentSizeCategory;
pub use snapshot::SettingsSnapshot;
pub use value::CapabilityValue;
