//! Literal device, profile and rule data
//!
//! This is the only configuration surface of the generator. Devices and
//! profiles are built from shared defaults plus per-record overrides.

use crate::combinators::{dual_role, from_to, simultaneous_pair, space_fn, swap};
use crate::merge::{DeviceOverrides, IdentifierOverrides, Merge, ProfileOverrides};
use crate::model::{
    ComplexModifications, DeviceDescriptor, GlobalSettings, Identifiers, Parameters, Profile,
    Rule, SimpleModification, VirtualHidKeyboard,
};

pub const DEFAULT_PROFILE_NAME: &str = "Default";
pub const VANILLA_PROFILE_NAME: &str = "Vanilla";

/// Keys reachable through the SpaceFN layer, as `(pressed, sent)`
const SPACE_FN_BINDINGS: &[(&str, &str)] = &[
    ("b", "spacebar"),
    ("h", "left_arrow"),
    ("j", "down_arrow"),
    ("k", "up_arrow"),
    ("l", "right_arrow"),
    ("1", "display_brightness_decrement"),
    ("2", "display_brightness_increment"),
    ("3", "mission_control"),
    ("4", "launchpad"),
    ("5", "illumination_decrement"),
    ("6", "illumination_increment"),
    ("7", "rewind"),
    ("8", "play_or_pause"),
    ("9", "fast_forward"),
    ("0", "mute"),
    ("-", "volume_decrement"),
    ("=", "volume_increment"),
    ("d", "PageDown"),
    ("u", "PageUp"),
];

/// Media functions on the top row, as `(function key, sent)`
const FUNCTION_KEY_BINDINGS: &[(&str, &str)] = &[
    ("f1", "display_brightness_decrement"),
    ("f2", "display_brightness_increment"),
    ("f3", "mission_control"),
    ("f4", "launchpad"),
    ("f5", "illumination_decrement"),
    ("f6", "illumination_increment"),
    ("f7", "rewind"),
    ("f8", "play_or_pause"),
    ("f9", "fastforward"),
    ("f10", "mute"),
    ("f11", "volume_decrement"),
    ("f12", "volume_increment"),
];

pub fn device_defaults() -> DeviceDescriptor {
    DeviceDescriptor {
        identifiers: identifier_defaults(),
        ..Default::default()
    }
}

pub fn identifier_defaults() -> Identifiers {
    Identifiers::default()
}

/// Built-in MacBook keyboard
pub fn apple_internal() -> DeviceDescriptor {
    device_defaults().merge(DeviceOverrides {
        identifiers: IdentifierOverrides::usb(1452, 628),
        ..Default::default()
    })
}

/// Topre Realforce, a PC-layout keyboard
pub fn realforce() -> DeviceDescriptor {
    device_defaults().merge(DeviceOverrides {
        identifiers: IdentifierOverrides::usb(2131, 273),
        simple_modifications: Some(
            [
                swap("left_command", "left_option"),
                swap("right_command", "right_option"),
                from_to("application", "fn"),
                from_to("pause", "power"),
            ]
            .concat(),
        ),
        ..Default::default()
    })
}

/// YubiKey presents itself as a keyboard; leave it alone
pub fn yubikey() -> DeviceDescriptor {
    device_defaults().merge(DeviceOverrides {
        identifiers: IdentifierOverrides::usb(4176, 1031),
        ignore: Some(true),
        manipulate_caps_lock_led: Some(false),
        ..Default::default()
    })
}

pub fn parameter_defaults() -> Parameters {
    Parameters {
        simultaneous_threshold_milliseconds: Some(50),
        to_delayed_action_delay_milliseconds: Some(500),
        to_if_alone_timeout_milliseconds: Some(1000),
        to_if_held_down_threshold_milliseconds: Some(500),
    }
}

fn bindings(pairs: &[(&str, &str)]) -> Vec<SimpleModification> {
    pairs.iter().flat_map(|(from, to)| from_to(from, to)).collect()
}

/// Stock behavior: media function keys, no remapping
pub fn vanilla_profile() -> Profile {
    Profile {
        complex_modifications: ComplexModifications {
            parameters: parameter_defaults(),
            rules: Vec::new(),
        },
        devices: vec![yubikey()],
        fn_function_keys: bindings(FUNCTION_KEY_BINDINGS),
        name: VANILLA_PROFILE_NAME.to_string(),
        selected: false,
        simple_modifications: Vec::new(),
        virtual_hid_keyboard: VirtualHidKeyboard::default(),
    }
}

pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "SpaceFN layer",
            SPACE_FN_BINDINGS
                .iter()
                .flat_map(|(from, to)| space_fn(from, to))
                .collect(),
        ),
        Rule::new(
            "Post Esc if Caps is tapped, Control if held",
            vec![dual_role("left_control", "left_control", "escape", None)],
        ),
        Rule::new(
            "Change Return to Control when used as modifier, Return when used alone",
            vec![dual_role(
                "return_or_enter",
                "right_command",
                "return_or_enter",
                Some("return_or_enter"),
            )],
        ),
        Rule::new(
            "Change Tab to Option when used as modifier, Tab when used alone",
            vec![dual_role("tab", "left_option", "tab", Some("left_option"))],
        ),
        Rule::new(
            "Left and Right Shift together toggle Caps Lock",
            vec![simultaneous_pair("left_shift", "right_shift", "caps_lock")],
        ),
    ]
}

/// Everyday profile: Vanilla plus SpaceFN, dual-role keys and device remaps
pub fn default_profile() -> Profile {
    vanilla_profile().merge(ProfileOverrides {
        complex_modifications: Some(ComplexModifications {
            parameters: parameter_defaults().merge(Parameters {
                to_if_alone_timeout_milliseconds: Some(500),
                ..Default::default()
            }),
            rules: default_rules(),
        }),
        devices: Some(vec![yubikey(), realforce(), apple_internal()]),
        name: Some(DEFAULT_PROFILE_NAME.to_string()),
        selected: Some(true),
        simple_modifications: Some(
            [
                from_to("caps_lock", "left_control"),
                from_to("escape", "caps_lock"),
            ]
            .concat(),
        ),
        ..Default::default()
    })
}

pub fn global_settings() -> GlobalSettings {
    GlobalSettings::default()
}
