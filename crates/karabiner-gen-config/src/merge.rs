//! Defaults-then-overrides composition
//!
//! A record is built by merging a base record with a partial override
//! record. Set override fields replace the base field, unset ones keep it.
//! Sequences are replaced wholesale, never concatenated. Nested records are
//! only merged where an override type says so (`identifiers`); everything
//! else is replaced as a unit.

use crate::model::{
    ComplexModifications, DeviceDescriptor, Identifiers, Parameters, Profile,
    SimpleModification, VirtualHidKeyboard,
};

/// Merge a partial override record into `self`
///
/// Merging with `Overrides::default()` returns `self` unchanged.
pub trait Merge<Overrides = Self> {
    fn merge(self, overrides: Overrides) -> Self;
}

impl Merge for Parameters {
    fn merge(self, overrides: Parameters) -> Self {
        Self {
            simultaneous_threshold_milliseconds: overrides
                .simultaneous_threshold_milliseconds
                .or(self.simultaneous_threshold_milliseconds),
            to_delayed_action_delay_milliseconds: overrides
                .to_delayed_action_delay_milliseconds
                .or(self.to_delayed_action_delay_milliseconds),
            to_if_alone_timeout_milliseconds: overrides
                .to_if_alone_timeout_milliseconds
                .or(self.to_if_alone_timeout_milliseconds),
            to_if_held_down_threshold_milliseconds: overrides
                .to_if_held_down_threshold_milliseconds
                .or(self.to_if_held_down_threshold_milliseconds),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierOverrides {
    pub is_keyboard: Option<bool>,
    pub is_pointing_device: Option<bool>,
    pub product_id: Option<u32>,
    pub vendor_id: Option<u32>,
}

impl IdentifierOverrides {
    /// Match a single USB vendor/product pair
    pub fn usb(vendor_id: u32, product_id: u32) -> Self {
        Self {
            product_id: Some(product_id),
            vendor_id: Some(vendor_id),
            ..Default::default()
        }
    }
}

impl Merge<IdentifierOverrides> for Identifiers {
    fn merge(self, overrides: IdentifierOverrides) -> Self {
        Self {
            is_keyboard: overrides.is_keyboard.unwrap_or(self.is_keyboard),
            is_pointing_device: overrides
                .is_pointing_device
                .unwrap_or(self.is_pointing_device),
            product_id: overrides.product_id.or(self.product_id),
            vendor_id: overrides.vendor_id.or(self.vendor_id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceOverrides {
    pub disable_built_in_keyboard_if_exists: Option<bool>,
    pub fn_function_keys: Option<Vec<SimpleModification>>,
    pub ignore: Option<bool>,
    pub manipulate_caps_lock_led: Option<bool>,
    pub simple_modifications: Option<Vec<SimpleModification>>,
    /// Merged into the base identifiers rather than replacing them
    pub identifiers: IdentifierOverrides,
}

impl Merge<DeviceOverrides> for DeviceDescriptor {
    fn merge(self, overrides: DeviceOverrides) -> Self {
        Self {
            disable_built_in_keyboard_if_exists: overrides
                .disable_built_in_keyboard_if_exists
                .unwrap_or(self.disable_built_in_keyboard_if_exists),
            fn_function_keys: overrides.fn_function_keys.unwrap_or(self.fn_function_keys),
            ignore: overrides.ignore.unwrap_or(self.ignore),
            manipulate_caps_lock_led: overrides
                .manipulate_caps_lock_led
                .unwrap_or(self.manipulate_caps_lock_led),
            simple_modifications: overrides
                .simple_modifications
                .unwrap_or(self.simple_modifications),
            identifiers: self.identifiers.merge(overrides.identifiers),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileOverrides {
    pub complex_modifications: Option<ComplexModifications>,
    pub devices: Option<Vec<DeviceDescriptor>>,
    pub fn_function_keys: Option<Vec<SimpleModification>>,
    pub name: Option<String>,
    pub selected: Option<bool>,
    pub simple_modifications: Option<Vec<SimpleModification>>,
    pub virtual_hid_keyboard: Option<VirtualHidKeyboard>,
}

impl Merge<ProfileOverrides> for Profile {
    fn merge(self, overrides: ProfileOverrides) -> Self {
        Self {
            complex_modifications: overrides
                .complex_modifications
                .unwrap_or(self.complex_modifications),
            devices: overrides.devices.unwrap_or(self.devices),
            fn_function_keys: overrides.fn_function_keys.unwrap_or(self.fn_function_keys),
            name: overrides.name.unwrap_or(self.name),
            selected: overrides.selected.unwrap_or(self.selected),
            simple_modifications: overrides
                .simple_modifications
                .unwrap_or(self.simple_modifications),
            virtual_hid_keyboard: overrides
                .virtual_hid_keyboard
                .unwrap_or(self.virtual_hid_keyboard),
        }
    }
}
