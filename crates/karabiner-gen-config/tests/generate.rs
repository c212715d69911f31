use karabiner_gen_config::{build_document, render_document, write_document};
use serde_json::Value;

const GOLDEN: &str = include_str!("fixtures/karabiner.json");

fn rendered_value() -> Value {
    let output = render_document(&build_document()).unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn test_output_matches_golden_file_byte_for_byte() {
    let output = render_document(&build_document()).unwrap();
    assert_eq!(output, GOLDEN);
}

#[test]
fn test_write_document_matches_golden_file() {
    let mut buffer = Vec::new();
    write_document(&build_document(), &mut buffer).unwrap();
    assert_eq!(buffer, GOLDEN.as_bytes());
}

#[test]
fn test_two_profiles_in_order_with_single_selection() {
    let doc = rendered_value();
    let profiles = doc["profiles"].as_array().unwrap();
    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0]["name"], "Default");
    assert_eq!(profiles[0]["selected"], true);
    assert_eq!(profiles[1]["name"], "Vanilla");
    assert_eq!(profiles[1]["selected"], false);
}

#[test]
fn test_profile_devices() {
    let doc = rendered_value();
    let ids = |profile: &Value| -> Vec<(u64, u64, bool)> {
        profile["devices"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| {
                (
                    d["identifiers"]["vendor_id"].as_u64().unwrap(),
                    d["identifiers"]["product_id"].as_u64().unwrap(),
                    d["ignore"].as_bool().unwrap(),
                )
            })
            .collect()
    };

    assert_eq!(
        ids(&doc["profiles"][0]),
        vec![(4176, 1031, true), (2131, 273, false), (1452, 628, false)]
    );
    assert_eq!(ids(&doc["profiles"][1]), vec![(4176, 1031, true)]);

    let realforce = &doc["profiles"][0]["devices"][1];
    assert_eq!(
        realforce["simple_modifications"][0]["from"]["key_code"],
        "left_command"
    );
    assert_eq!(
        realforce["simple_modifications"][0]["to"]["key_code"],
        "left_option"
    );
}

#[test]
fn test_space_fn_entries_in_rendered_rules() {
    let doc = rendered_value();
    let rule = &doc["profiles"][0]["complex_modifications"]["rules"][0];
    assert_eq!(rule["description"], "SpaceFN layer");

    let manipulators = rule["manipulators"].as_array().unwrap();
    for pair in manipulators.chunks(2) {
        let (chord, layer) = (&pair[0], &pair[1]);
        assert_eq!(chord["from"]["simultaneous"][0]["key_code"], "spacebar");
        assert_eq!(chord["from"]["simultaneous_options"]["key_down_order"], "strict");
        assert_eq!(
            chord["from"]["simultaneous_options"]["key_up_order"],
            "strict_inverse"
        );
        assert_eq!(
            layer["from"]["key_code"],
            chord["from"]["simultaneous"][1]["key_code"]
        );
        assert_eq!(layer["conditions"][0]["name"], "SpaceFN");
        assert_eq!(layer["conditions"][0]["value"], 1);
    }
}
