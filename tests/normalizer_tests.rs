use chrono::NaiveDate;
use roadmap_rs::core::{Bound, PALETTE, UNGROUPED_LANE_ID};
use roadmap_rs::ingest::normalizer::{normalize_document, normalize_value};
use serde_json::json;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn zero_length_item_is_padded_to_one_day() {
    let doc = json!({
        "items": [{ "content": "A", "start": "2024-01-01", "end": "2024-01-01" }]
    });
    let dataset = normalize_value(&doc);

    assert_eq!(dataset.items.len(), 1);
    let item = &dataset.items[0];
    assert_eq!(item.title, "A");
    assert_eq!(item.start, Bound::Fixed(date(2024, 1, 1)));
    assert_eq!(item.end, Bound::Fixed(date(2024, 1, 2)));
    assert_eq!(item.lane_id, UNGROUPED_LANE_ID);
    assert!(dataset.lanes.is_empty());
}

#[test]
fn inverted_range_is_swapped() {
    let doc = json!({
        "items": [{ "title": "B", "start": "2024-03-10", "end": "2024-03-01" }]
    });
    let dataset = normalize_value(&doc);

    let item = &dataset.items[0];
    assert_eq!(item.start, Bound::Fixed(date(2024, 3, 1)));
    assert_eq!(item.end, Bound::Fixed(date(2024, 3, 10)));
}

#[test]
fn field_aliases_first_match_wins() {
    let doc = json!({
        "items": [{
            "content": "from content",
            "title": "from title",
            "description": "from description",
            "startDate": "2024-05-01",
            "endDate": "2024-05-03"
        }]
    });
    let dataset = normalize_value(&doc);

    let item = &dataset.items[0];
    assert_eq!(item.title, "from content");
    assert_eq!(item.subtitle, "from description");
    assert_eq!(item.start, Bound::Fixed(date(2024, 5, 1)));
    assert_eq!(item.end, Bound::Fixed(date(2024, 5, 3)));
}

#[test]
fn missing_title_defaults_to_untitled_and_end_defaults_to_start() {
    let doc = json!({ "items": [{ "start": "2024-05-01" }] });
    let dataset = normalize_value(&doc);

    let item = &dataset.items[0];
    assert_eq!(item.title, "(untitled)");
    assert_eq!(item.subtitle, "");
    // end defaulted to start, then padded to the one-day minimum span
    assert_eq!(item.start, Bound::Fixed(date(2024, 5, 1)));
    assert_eq!(item.end, Bound::Fixed(date(2024, 5, 2)));
}

#[test]
fn unresolvable_start_drops_only_that_item() {
    let doc = json!({
        "items": [
            { "title": "kept", "start": "2024-01-01" },
            { "title": "dropped", "start": "sometime soon" },
            { "title": "also kept", "start": "2024/02/01" }
        ]
    });
    let dataset = normalize_value(&doc);

    let titles: Vec<&str> = dataset.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["kept", "also kept"]);
}

#[test]
fn open_start_survives_unparseable_date() {
    let doc = json!({
        "items": [{ "title": "open", "start": "unknown", "openStart": true, "end": "2024-06-01" }]
    });
    let dataset = normalize_value(&doc);

    let item = &dataset.items[0];
    assert_eq!(item.start, Bound::Unbounded);
    assert_eq!(item.end, Bound::Fixed(date(2024, 6, 1)));
}

#[test]
fn open_end_flag_wins_over_supplied_date() {
    let doc = json!({
        "items": [{ "title": "open", "start": "2024-01-01", "end": "2024-06-01", "openEnd": true }]
    });
    let dataset = normalize_value(&doc);

    let item = &dataset.items[0];
    assert_eq!(item.start, Bound::Fixed(date(2024, 1, 1)));
    assert_eq!(item.end, Bound::Unbounded);
}

#[test]
fn category_reuses_existing_lane_case_insensitively() {
    let doc = json!({
        "items": [{ "content": "Project", "start": "2024-01-01", "category": "Berlin" }],
        "groups": [{ "id": "g1", "name": "berlin" }]
    });
    let dataset = normalize_value(&doc);

    assert_eq!(dataset.lanes.len(), 1);
    assert_eq!(dataset.items[0].lane_id, "g1");
}

#[test]
fn lane_created_implicitly_from_category_name() {
    let doc = json!({
        "items": [
            { "content": "one", "start": "2024-01-01", "category": "Infra" },
            { "content": "two", "start": "2024-02-01", "category": "  infra " }
        ]
    });
    let dataset = normalize_value(&doc);

    assert_eq!(dataset.lanes.len(), 1);
    assert_eq!(dataset.lanes[0].name, "Infra");
    assert_eq!(dataset.lanes[0].order_index, 0);
    assert_eq!(dataset.items[0].lane_id, dataset.items[1].lane_id);
}

#[test]
fn duplicate_group_records_remap_item_references() {
    let doc = json!({
        "items": [{ "content": "x", "start": "2024-01-01", "group": "g2" }],
        "groups": [
            { "id": "g1", "name": "Ops" },
            { "id": "g2", "name": "OPS " }
        ]
    });
    let dataset = normalize_value(&doc);

    assert_eq!(dataset.lanes.len(), 1);
    assert_eq!(dataset.lanes[0].id, "g1");
    assert_eq!(dataset.items[0].lane_id, "g1");
}

#[test]
fn unknown_group_id_creates_a_lane() {
    let doc = json!({
        "items": [{ "content": "x", "start": "2024-01-01", "group": "mystery" }]
    });
    let dataset = normalize_value(&doc);

    assert_eq!(dataset.items[0].lane_id, "mystery");
    assert_eq!(dataset.lanes.len(), 1);
    assert_eq!(dataset.lanes[0].id, "mystery");
}

#[test]
fn ungrouped_sentinel_reference_never_creates_a_lane() {
    let doc = json!({
        "items": [{ "content": "x", "start": "2024-01-01", "group": "_ungrouped" }]
    });
    let dataset = normalize_value(&doc);

    assert_eq!(dataset.items[0].lane_id, UNGROUPED_LANE_ID);
    assert!(dataset.lanes.is_empty());
}

#[test]
fn supplied_ids_are_preserved_and_numbers_stringified() {
    let doc = json!({
        "items": [{ "id": 42, "content": "x", "start": "2024-01-01" }],
        "groups": [{ "id": 7, "name": "Lane" }]
    });
    let dataset = normalize_value(&doc);

    assert_eq!(dataset.items[0].id, "42");
    assert_eq!(dataset.lanes[0].id, "7");
}

#[test]
fn missing_ids_are_synthesized_unique() {
    let doc = json!({
        "items": [
            { "content": "a", "start": "2024-01-01" },
            { "content": "b", "start": "2024-01-01" }
        ]
    });
    let dataset = normalize_value(&doc);

    assert!(!dataset.items[0].id.is_empty());
    assert_ne!(dataset.items[0].id, dataset.items[1].id);
}

#[test]
fn invalid_color_falls_back_to_deterministic_palette_pick() {
    let doc = json!({
        "items": [
            { "content": "a", "subtitle": "s", "start": "2024-01-01", "color": "tomato" },
            { "content": "a", "subtitle": "s", "start": "2024-02-01" }
        ]
    });
    let dataset = normalize_value(&doc);

    // Same title+subtitle content, same palette slot, regardless of order.
    assert_eq!(dataset.items[0].color, dataset.items[1].color);
    assert!(PALETTE.contains(&dataset.items[0].color.as_str()));
}

#[test]
fn valid_hex_color_is_kept_verbatim() {
    let doc = json!({
        "items": [{ "content": "a", "start": "2024-01-01", "color": "#AbCdEf" }]
    });
    let dataset = normalize_value(&doc);
    assert_eq!(dataset.items[0].color, "#AbCdEf");
}

#[test]
fn background_pseudo_items_are_skipped() {
    let doc = json!({
        "items": [
            { "id": "bg-1", "type": "background", "start": "2024-01-01", "end": "2024-12-31" },
            { "content": "real", "start": "2024-01-01" }
        ]
    });
    let dataset = normalize_value(&doc);

    assert_eq!(dataset.items.len(), 1);
    assert_eq!(dataset.items[0].title, "real");
}

#[test]
fn order_key_is_read_from_aliases() {
    let doc = json!({
        "items": [
            { "content": "a", "start": "2024-01-01", "orderKey": 3 },
            { "content": "b", "start": "2024-01-01", "order": -1 },
            { "content": "c", "start": "2024-01-01", "orderKey": 1.5 }
        ]
    });
    let dataset = normalize_value(&doc);

    assert_eq!(dataset.items[0].order_key, Some(3));
    assert_eq!(dataset.items[1].order_key, Some(-1));
    // Non-integer numbers are ignored, not truncated.
    assert_eq!(dataset.items[2].order_key, None);
}

#[test]
fn envelope_and_sniffed_documents_normalize() {
    let enveloped = json!({ "data": { "Items": [{ "content": "a", "start": "2024-01-01" }] } });
    assert_eq!(normalize_value(&enveloped).items.len(), 1);

    let sniffed = json!({ "rows": [{ "name": "a", "start": "2024-01-01" }] });
    assert_eq!(normalize_value(&sniffed).items.len(), 1);
}

#[test]
fn unrecognizable_document_degrades_to_empty_dataset() {
    let dataset = normalize_value(&json!({ "unrelated": true }));
    assert!(dataset.items.is_empty());
    assert!(dataset.lanes.is_empty());
}

#[test]
fn malformed_json_is_the_only_parse_error() {
    assert!(normalize_document("{ not json").is_err());
    assert!(normalize_document("{\"items\": []}").is_ok());
    assert!(normalize_document("null").is_ok());
}
