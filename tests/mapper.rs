use tabular_pipeline::import::map_rows;
use tabular_pipeline::types::{CellValue, FieldMapping, FieldValue, NormalizedRecord, RawTable};

fn catalog_table() -> RawTable {
    RawTable::new(
        vec!["Title".into(), "Author".into(), "Price".into()],
        vec![
            vec![
                CellValue::Text("Dune".into()),
                CellValue::Text("Herbert".into()),
                CellValue::Number(1200.0),
            ],
            vec![
                CellValue::Text("  Solaris  ".into()),
                CellValue::Empty,
                CellValue::Number(950.0),
            ],
        ],
    )
}

#[test]
fn unmapped_columns_are_dropped() {
    let mapping = FieldMapping::new()
        .assign("bookTitle", "Title")
        .assign("bookAuthor", "Author");

    let records = map_rows(&catalog_table(), &mapping);
    assert_eq!(records.len(), 2);

    let first = &records[0];
    assert_eq!(first.get("bookTitle"), Some(&FieldValue::Text("Dune".into())));
    assert_eq!(
        first.get("bookAuthor"),
        Some(&FieldValue::Text("Herbert".into()))
    );
    // Price was never mapped.
    assert_eq!(first.len(), 2);
}

#[test]
fn field_sets_are_subsets_of_the_mapping_domain() {
    let mapping = FieldMapping::new()
        .assign("bookTitle", "Title")
        .assign("bookAuthor", "Author");

    let records = map_rows(&catalog_table(), &mapping);
    for record in &records {
        for name in record.field_names() {
            assert!(name == "bookTitle" || name == "bookAuthor");
        }
    }
}

#[test]
fn text_is_trimmed_and_empty_values_are_omitted() {
    let mapping = FieldMapping::new()
        .assign("bookTitle", "Title")
        .assign("bookAuthor", "Author");

    let records = map_rows(&catalog_table(), &mapping);
    let second = &records[1];

    assert_eq!(
        second.get("bookTitle"),
        Some(&FieldValue::Text("Solaris".into()))
    );
    // Empty cell omitted entirely, not stored as an empty string.
    assert!(second.get("bookAuthor").is_none());
    assert_eq!(second.len(), 1);
}

#[test]
fn whitespace_only_values_are_omitted() {
    let table = RawTable::new(
        vec!["a".into()],
        vec![vec![CellValue::Text("   ".into())], vec![CellValue::Text("x".into())]],
    );
    let mapping = FieldMapping::new().assign("f", "a");

    let records = map_rows(&table, &mapping);
    // The first row becomes fully empty and is discarded.
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("f"), Some(&FieldValue::Text("x".into())));
}

#[test]
fn fully_empty_rows_are_discarded() {
    let table = RawTable::new(
        vec!["a".into(), "b".into()],
        vec![
            vec![CellValue::Text("1".into()), CellValue::Text("2".into())],
            vec![CellValue::Empty, CellValue::Empty],
        ],
    );
    let mapping = FieldMapping::new().assign("x", "a").assign("y", "b");

    let records = map_rows(&table, &mapping);
    assert_eq!(records.len(), 1);
}

#[test]
fn row_count_never_grows() {
    let mapping = FieldMapping::new().assign("bookTitle", "Title");
    let table = catalog_table();

    let records = map_rows(&table, &mapping);
    assert!(records.len() <= table.row_count());
}

#[test]
fn mapping_is_idempotent_under_identity_remap() {
    let mapping = FieldMapping::new()
        .assign("bookTitle", "Title")
        .assign("bookAuthor", "Author");
    let first_pass = map_rows(&catalog_table(), &mapping);

    // Rebuild a table from the normalized records, headed by the field names,
    // and re-map with the identity mapping.
    let headers = vec!["bookTitle".to_string(), "bookAuthor".to_string()];
    let rows: Vec<Vec<CellValue>> = first_pass
        .iter()
        .map(|rec| {
            headers
                .iter()
                .map(|h| match rec.get(h) {
                    Some(FieldValue::Text(s)) => CellValue::Text(s.clone()),
                    Some(FieldValue::Number(n)) => CellValue::Number(*n),
                    None => CellValue::Empty,
                })
                .collect()
        })
        .collect();
    let rebuilt = RawTable::new(headers, rows);

    let identity = FieldMapping::new()
        .assign("bookTitle", "bookTitle")
        .assign("bookAuthor", "bookAuthor");
    let second_pass = map_rows(&rebuilt, &identity);

    assert_eq!(first_pass, second_pass);
}

#[test]
fn duplicate_header_assignment_keeps_the_first_field() {
    let table = RawTable::new(
        vec!["Title".into()],
        vec![vec![CellValue::Text("Dune".into())]],
    );
    // Both fields claim the same source header; the first declared wins.
    let mapping = FieldMapping::new()
        .assign("bookTitle", "Title")
        .assign("bookSubtitle", "Title");

    let records = map_rows(&table, &mapping);
    assert_eq!(records[0].get("bookTitle"), Some(&FieldValue::Text("Dune".into())));
    assert!(records[0].get("bookSubtitle").is_none());
}

#[test]
fn mapped_header_absent_from_file_is_not_an_error() {
    let mapping = FieldMapping::new()
        .assign("bookTitle", "Title")
        .assign("isbn", "ISBN"); // not in the file

    let records = map_rows(&catalog_table(), &mapping);
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.get("isbn").is_none()));
}

#[test]
fn numbers_are_carried_through_unchanged() {
    let mapping = FieldMapping::new().assign("price", "Price");
    let records = map_rows(&catalog_table(), &mapping);

    assert_eq!(records[0].get("price"), Some(&FieldValue::Number(1200.0)));
}

#[test]
fn empty_mapping_yields_no_records() {
    let records = map_rows(&catalog_table(), &FieldMapping::new());
    assert_eq!(records, Vec::<NormalizedRecord>::new());
}
