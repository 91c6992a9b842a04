//! Domain entities.
//!
//! - [`AliasLookupResult`] - destination and expiry of a resolved alias
//! - [`DeviceType`] - device category attached to a click

pub mod alias_lookup;
pub mod device_type;

pub use alias_lookup::AliasLookupResult;
pub use device_type::DeviceType;
