//! Small builders that expand into lists of mapping entries
//!
//! Each combinator returns a `Vec` so results can be chained into a single
//! list with `concat()` or `extend`, the same way the literal data in
//! `layout` assembles device and rule lists.

use crate::model::{
    Condition, FromEvent, KeyAction, KeyOrder, Manipulator, Parameters, SimpleModification,
    SimultaneousOptions, ToEvent,
};

/// Runtime variable toggled while the SpaceFN layer is active
pub const SPACE_FN_VARIABLE: &str = "SpaceFN";

/// Key held to enter the SpaceFN layer
pub const SPACE_FN_MODIFIER: &str = "spacebar";

/// Chord threshold for the layer (the runtime default is 1000)
pub const SPACE_FN_THRESHOLD_MILLISECONDS: u32 = 500;

/// A single one-to-one key substitution
pub fn from_to(from: &str, to: &str) -> Vec<SimpleModification> {
    vec![SimpleModification {
        from: KeyAction::new(from),
        to: KeyAction::new(to),
    }]
}

/// Swap two keys: `a -> b` followed by `b -> a`
pub fn swap(a: &str, b: &str) -> Vec<SimpleModification> {
    [from_to(a, b), from_to(b, a)].concat()
}

/// Hold space and press `from` to send `to`
///
/// Produces two manipulators, in this order:
/// 1. the chord `spacebar + from` (space first, released in reverse), which
///    sets `SpaceFN = 1`, sends `to`, and resets `SpaceFN = 0` on key-up;
/// 2. `from` alone while `SpaceFN == 1`, so repeated presses keep sending
///    `to` without re-chording.
///
/// The runtime matches on `from` plus `conditions`, but the chord entry is
/// kept first.
pub fn space_fn(from: &str, to: &str) -> Vec<Manipulator> {
    let chord = Manipulator {
        parameters: Some(Parameters {
            simultaneous_threshold_milliseconds: Some(SPACE_FN_THRESHOLD_MILLISECONDS),
            ..Default::default()
        }),
        ..Manipulator::basic(
            FromEvent::chord(
                vec![KeyAction::new(SPACE_FN_MODIFIER), KeyAction::new(from)],
                SimultaneousOptions {
                    key_down_order: KeyOrder::Strict,
                    key_up_order: KeyOrder::StrictInverse,
                    to_after_key_up: vec![ToEvent::set_variable(SPACE_FN_VARIABLE, 0)],
                },
            ),
            vec![
                ToEvent::set_variable(SPACE_FN_VARIABLE, 1),
                ToEvent::key(to),
            ],
        )
    };

    let layer = Manipulator {
        conditions: vec![Condition::variable_if(SPACE_FN_VARIABLE, 1)],
        ..Manipulator::basic(FromEvent::key_any_modifiers(from), vec![ToEvent::key(to)])
    };

    vec![chord, layer]
}

/// Act as modifier `held` when combined with other keys, `alone` when tapped
///
/// `held_down`, if given, is sent when the key is held past the held-down
/// threshold without another key being pressed.
pub fn dual_role(from: &str, held: &str, alone: &str, held_down: Option<&str>) -> Manipulator {
    Manipulator {
        to_if_alone: vec![ToEvent::key(alone)],
        to_if_held_down: held_down.map(ToEvent::key).into_iter().collect(),
        ..Manipulator::basic(
            FromEvent::key_any_modifiers(from),
            vec![ToEvent::Key(KeyAction::lazy(held))],
        )
    }
}

/// Press `a` and `b` together, in any order, to send `to`
pub fn simultaneous_pair(a: &str, b: &str, to: &str) -> Manipulator {
    Manipulator::basic(
        FromEvent::chord(
            vec![KeyAction::new(a), KeyAction::new(b)],
            SimultaneousOptions {
                key_down_order: KeyOrder::Insensitive,
                key_up_order: KeyOrder::Insensitive,
                to_after_key_up: Vec::new(),
            },
        ),
        vec![ToEvent::key(to)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConditionType;
    use std::collections::HashSet;

    #[test]
    fn test_from_to_single_entry() {
        let entries = from_to("caps_lock", "left_control");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].from.key_code, "caps_lock");
        assert_eq!(entries[0].to.key_code, "left_control");
        assert_eq!(entries[0].from.lazy, None);
    }

    #[test]
    fn test_swap_is_both_directions_in_order() {
        let entries = swap("left_command", "left_option");
        assert_eq!(
            entries,
            [
                from_to("left_command", "left_option"),
                from_to("left_option", "left_command")
            ]
            .concat()
        );
    }

    #[test]
    fn test_space_fn_chord_entry() {
        let entries = space_fn("h", "left_arrow");
        assert_eq!(entries.len(), 2);

        let chord = &entries[0];
        let keys: HashSet<&str> = chord
            .from
            .simultaneous
            .iter()
            .map(|k| k.key_code.as_str())
            .collect();
        assert_eq!(keys, HashSet::from([SPACE_FN_MODIFIER, "h"]));
        assert_eq!(chord.from.key_code, None);

        let options = chord.from.simultaneous_options.as_ref().unwrap();
        assert_eq!(options.key_down_order, KeyOrder::Strict);
        assert_eq!(options.key_up_order, KeyOrder::StrictInverse);
        assert_eq!(
            options.to_after_key_up,
            vec![ToEvent::set_variable(SPACE_FN_VARIABLE, 0)]
        );

        assert_eq!(
            chord.to,
            vec![
                ToEvent::set_variable(SPACE_FN_VARIABLE, 1),
                ToEvent::key("left_arrow")
            ]
        );
        assert_eq!(
            chord
                .parameters
                .as_ref()
                .and_then(|p| p.simultaneous_threshold_milliseconds),
            Some(500)
        );
        assert!(chord.conditions.is_empty());
    }

    #[test]
    fn test_space_fn_layer_entry() {
        let entries = space_fn("h", "left_arrow");
        let layer = &entries[1];

        assert_eq!(layer.conditions.len(), 1);
        assert_eq!(layer.conditions[0].name, SPACE_FN_VARIABLE);
        assert_eq!(layer.conditions[0].kind, ConditionType::VariableIf);
        assert_eq!(layer.conditions[0].value, 1);

        assert_eq!(layer.from.key_code.as_deref(), Some("h"));
        assert!(layer.from.simultaneous.is_empty());
        assert_eq!(layer.to, vec![ToEvent::key("left_arrow")]);
        assert!(layer.parameters.is_none());
    }

    #[test]
    fn test_dual_role_with_and_without_held_down() {
        let caps = dual_role("left_control", "left_control", "escape", None);
        assert_eq!(caps.to, vec![ToEvent::Key(KeyAction::lazy("left_control"))]);
        assert_eq!(caps.to_if_alone, vec![ToEvent::key("escape")]);
        assert!(caps.to_if_held_down.is_empty());

        let tab = dual_role("tab", "left_option", "tab", Some("left_option"));
        assert_eq!(tab.to_if_held_down, vec![ToEvent::key("left_option")]);
    }

    #[test]
    fn test_simultaneous_pair_is_order_insensitive() {
        let shifts = simultaneous_pair("left_shift", "right_shift", "caps_lock");
        let options = shifts.from.simultaneous_options.unwrap();
        assert_eq!(options.key_down_order, KeyOrder::Insensitive);
        assert_eq!(options.key_up_order, KeyOrder::Insensitive);
        assert!(options.to_after_key_up.is_empty());
        assert_eq!(shifts.to, vec![ToEvent::key("caps_lock")]);
    }
}
