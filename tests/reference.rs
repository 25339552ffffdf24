use tabular_pipeline::reference::{CommuneRecord, RegionIndex, WilayaRecord};

fn sample_index() -> RegionIndex {
    RegionIndex::new(
        vec![
            WilayaRecord {
                code: "16".into(),
                name: "Alger".into(),
            },
            WilayaRecord {
                code: "31".into(),
                name: "Oran".into(),
            },
        ],
        vec![CommuneRecord {
            id: "Ouled Fayet_16".into(),
            name: "Ouled Fayet".into(),
        }],
    )
}

#[test]
fn wilaya_lookup_by_code() {
    let index = sample_index();
    assert_eq!(index.wilaya_name("16"), Some("Alger"));
    assert_eq!(index.wilaya_name("31"), Some("Oran"));
    assert_eq!(index.wilaya_name("99"), None);
}

#[test]
fn commune_display_name_resolves_composite_ids_via_the_table() {
    let index = sample_index();
    assert_eq!(index.commune_display_name("Ouled Fayet_16"), "Ouled Fayet");
}

#[test]
fn commune_display_name_falls_back_to_splitting_unknown_ids() {
    let index = sample_index();
    assert_eq!(index.commune_display_name("Hydra_16"), "Hydra");
}

#[test]
fn commune_display_name_passes_plain_names_through() {
    let index = sample_index();
    assert_eq!(index.commune_display_name("Hydra"), "Hydra");
}

#[test]
fn index_loads_from_regions_json() {
    let json = r#"{
        "wilayas": [{"code": "16", "name": "Alger"}],
        "communes": [{"id": "Hydra_16", "name": "Hydra"}]
    }"#;

    let index = RegionIndex::from_json_reader(json.as_bytes()).unwrap();
    assert_eq!(index.wilaya_name("16"), Some("Alger"));
    assert_eq!(index.commune_name("Hydra_16"), Some("Hydra"));
}

#[test]
fn missing_sections_default_to_empty() {
    let index = RegionIndex::from_json_reader(br#"{"wilayas": []}"#.as_slice()).unwrap();
    assert_eq!(index.commune_name("anything"), None);
}
