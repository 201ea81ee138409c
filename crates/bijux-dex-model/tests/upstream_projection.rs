// SPDX-License-Identifier: Apache-2.0

use bijux_dex_model::{Page, RecordDetail, RecordSummary, TypeCategory, TypeMembership};
use serde_json::Value;

fn fixture(name: &str) -> Value {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../fixtures/upstream")
        .join(name);
    serde_json::from_slice(&std::fs::read(path).expect("read fixture")).expect("fixture json")
}

#[test]
fn record_projection_keeps_upstream_order() {
    let detail = RecordDetail::from_upstream(&fixture("pikachu.json")).expect("pikachu");
    assert_eq!(detail.id, 25);
    assert_eq!(detail.name, "pikachu");
    assert_eq!(detail.height_decimeters, 4);
    assert_eq!(detail.weight_hectograms, 60);
    assert_eq!(detail.types, vec!["electric"]);
    assert_eq!(detail.abilities, vec!["static", "lightning-rod"]);
    assert_eq!(detail.moves.len(), 12);
    assert_eq!(detail.moves[0], "mega-punch");
    let names: Vec<_> = detail.stats.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "hp",
            "attack",
            "defense",
            "special-attack",
            "special-defense",
            "speed"
        ]
    );
    assert_eq!(detail.stats[5].base_value, 90);
    assert!(detail
        .artwork
        .image_url()
        .expect("image")
        .ends_with("official-artwork/25.png"));
}

#[test]
fn record_projection_from_bytes_matches_value_projection() {
    let value = fixture("pikachu.json");
    let bytes = serde_json::to_vec(&value).expect("bytes");
    assert_eq!(
        RecordDetail::from_upstream_slice(&bytes).expect("slice"),
        RecordDetail::from_upstream(&value).expect("value")
    );
}

#[test]
fn list_envelope_deserializes_summaries() {
    let page: Page<RecordSummary> =
        serde_json::from_value(fixture("pokemon-page.json")).expect("page");
    assert_eq!(page.count, 1302);
    assert!(page.has_next());
    assert!(page.previous.is_none());
    assert_eq!(page.results[1].name, "ivysaur");
    assert!(page.results[1].resource_url.ends_with("/pokemon/2/"));

    let types: Page<TypeCategory> = serde_json::from_value(fixture("types.json")).expect("types");
    assert_eq!(types.results.len(), 3);
    assert!(!types.has_next());
}

#[test]
fn summary_serializes_with_upstream_field_names() {
    let page: Page<RecordSummary> =
        serde_json::from_value(fixture("pokemon-page.json")).expect("page");
    let json = serde_json::to_value(&page.results[0]).expect("json");
    assert!(json.get("url").is_some());
    assert!(json.get("resource_url").is_none());
}

#[test]
fn type_membership_flattens_member_slots() {
    let membership =
        TypeMembership::from_upstream(&fixture("type-electric.json")).expect("membership");
    assert_eq!(membership.type_name, "electric");
    let names: Vec<_> = membership.members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["pikachu", "raichu", "magnemite"]);
    assert_eq!(membership.truncated(2).members.len(), 2);
}
