//! Configuration data model
//!
//! Field names and their declaration order are part of the file format read
//! by Karabiner-Elements. serde emits struct fields in declaration order, so
//! reordering fields here changes the generated document.

use serde::Serialize;

/// Root of the generated `karabiner.json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub global: GlobalSettings,
    pub profiles: Vec<Profile>,
}

/// Application-wide settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalSettings {
    pub check_for_updates_on_startup: bool,
    pub show_in_menu_bar: bool,
    pub show_profile_name_in_menu_bar: bool,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            check_for_updates_on_startup: true,
            show_in_menu_bar: true,
            show_profile_name_in_menu_bar: false,
        }
    }
}

/// A named, switchable configuration state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub complex_modifications: ComplexModifications,
    pub devices: Vec<DeviceDescriptor>,
    pub fn_function_keys: Vec<SimpleModification>,
    pub name: String,
    /// Only one profile per document is expected to be selected.
    pub selected: bool,
    pub simple_modifications: Vec<SimpleModification>,
    pub virtual_hid_keyboard: VirtualHidKeyboard,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComplexModifications {
    pub parameters: Parameters,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VirtualHidKeyboard {
    pub caps_lock_delay_milliseconds: u32,
    pub keyboard_type: KeyboardType,
}

impl Default for VirtualHidKeyboard {
    fn default() -> Self {
        Self {
            caps_lock_delay_milliseconds: 0,
            keyboard_type: KeyboardType::Ansi,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardType {
    #[default]
    Ansi,
    Iso,
    Jis,
}

/// Timing parameters, either profile-wide or per manipulator
///
/// Unset fields are left out of the output so the runtime falls back to its
/// own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Parameters {
    #[serde(
        rename = "basic.simultaneous_threshold_milliseconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub simultaneous_threshold_milliseconds: Option<u32>,
    #[serde(
        rename = "basic.to_delayed_action_delay_milliseconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub to_delayed_action_delay_milliseconds: Option<u32>,
    #[serde(
        rename = "basic.to_if_alone_timeout_milliseconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub to_if_alone_timeout_milliseconds: Option<u32>,
    #[serde(
        rename = "basic.to_if_held_down_threshold_milliseconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub to_if_held_down_threshold_milliseconds: Option<u32>,
}

/// Physical device match plus per-device overrides
///
/// `identifiers` is emitted last, after the per-device behavior fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceDescriptor {
    pub disable_built_in_keyboard_if_exists: bool,
    pub fn_function_keys: Vec<SimpleModification>,
    pub ignore: bool,
    pub manipulate_caps_lock_led: bool,
    pub simple_modifications: Vec<SimpleModification>,
    pub identifiers: Identifiers,
}

impl Default for DeviceDescriptor {
    fn default() -> Self {
        Self {
            disable_built_in_keyboard_if_exists: false,
            fn_function_keys: Vec::new(),
            ignore: false,
            manipulate_caps_lock_led: true,
            simple_modifications: Vec::new(),
            identifiers: Identifiers::default(),
        }
    }
}

/// USB identification of a device
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifiers {
    pub is_keyboard: bool,
    pub is_pointing_device: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<u32>,
}

impl Default for Identifiers {
    fn default() -> Self {
        Self {
            is_keyboard: true,
            is_pointing_device: false,
            product_id: None,
            vendor_id: None,
        }
    }
}

impl Identifiers {
    /// Vendor/product pair, when both are set
    pub fn vendor_product(&self) -> Option<(u32, u32)> {
        Some((self.vendor_id?, self.product_id?))
    }
}

/// A one-to-one key substitution
///
/// Used by `simple_modifications` and `fn_function_keys`, where `to` is a
/// single key rather than a sequence of events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimpleModification {
    pub from: KeyAction,
    pub to: KeyAction,
}

/// A named, ordered group of manipulators
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub description: String,
    pub manipulators: Vec<Manipulator>,
}

impl Rule {
    pub fn new(description: impl Into<String>, manipulators: Vec<Manipulator>) -> Self {
        Self {
            description: description.into(),
            manipulators,
        }
    }
}

/// A single complex-modification entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manipulator {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
    pub from: FromEvent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Parameters>,
    pub to: Vec<ToEvent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub to_if_alone: Vec<ToEvent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub to_if_held_down: Vec<ToEvent>,
    #[serde(rename = "type")]
    pub kind: ManipulatorType,
}

impl Manipulator {
    /// A `basic` manipulator with only `from` and `to` set
    pub fn basic(from: FromEvent, to: Vec<ToEvent>) -> Self {
        Self {
            conditions: Vec::new(),
            from,
            parameters: None,
            to,
            to_if_alone: Vec::new(),
            to_if_held_down: Vec::new(),
            kind: ManipulatorType::Basic,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ManipulatorType {
    #[default]
    Basic,
}

/// Trigger side of a manipulator: either one key or a simultaneous chord
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FromEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Modifiers>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub simultaneous: Vec<KeyAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simultaneous_options: Option<SimultaneousOptions>,
}

impl FromEvent {
    /// A single key accepting any modifiers
    pub fn key_any_modifiers(key_code: impl Into<String>) -> Self {
        Self {
            key_code: Some(key_code.into()),
            modifiers: Some(Modifiers::any()),
            ..Default::default()
        }
    }

    /// A chord of `keys` pressed together, accepting any modifiers
    pub fn chord(keys: Vec<KeyAction>, options: SimultaneousOptions) -> Self {
        Self {
            key_code: None,
            modifiers: Some(Modifiers::any()),
            simultaneous: keys,
            simultaneous_options: Some(options),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Modifiers {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mandatory: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub optional: Vec<String>,
}

impl Modifiers {
    /// Match regardless of which modifiers are held
    pub fn any() -> Self {
        Self {
            mandatory: Vec::new(),
            optional: vec!["any".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimultaneousOptions {
    pub key_down_order: KeyOrder,
    pub key_up_order: KeyOrder,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub to_after_key_up: Vec<ToEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyOrder {
    Insensitive,
    Strict,
    StrictInverse,
}

/// Guard evaluated by the runtime before a manipulator applies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ConditionType,
    pub value: i64,
}

impl Condition {
    pub fn variable_if(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            kind: ConditionType::VariableIf,
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionType {
    VariableIf,
    VariableUnless,
}

/// A physical or virtual key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyAction {
    pub key_code: String,
    /// Delay the modifier until another key is pressed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lazy: Option<bool>,
}

impl KeyAction {
    pub fn new(key_code: impl Into<String>) -> Self {
        Self {
            key_code: key_code.into(),
            lazy: None,
        }
    }

    pub fn lazy(key_code: impl Into<String>) -> Self {
        Self {
            key_code: key_code.into(),
            lazy: Some(true),
        }
    }
}

/// An event emitted by a manipulator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ToEvent {
    Key(KeyAction),
    SetVariable { set_variable: Variable },
}

impl ToEvent {
    pub fn key(key_code: impl Into<String>) -> Self {
        Self::Key(KeyAction::new(key_code))
    }

    pub fn set_variable(name: impl Into<String>, value: i64) -> Self {
        Self::SetVariable {
            set_variable: Variable {
                name: name.into(),
                value,
            },
        }
    }
}

/// Named state held by the runtime, not by this program
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub name: String,
    pub value: i64,
}
