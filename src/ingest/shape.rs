use serde_json::{Map, Value};

/// How the items/groups collections were located in the import document.
///
/// The strategies are tried in declaration order; each either commits or
/// passes to the next, replacing ad hoc attribute probing with a fixed
/// fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportShape {
    /// `items`/`groups` directly at the top level (key case irrelevant).
    Direct,
    /// The same keys one level down inside a nested object value, e.g. a
    /// `data` envelope.
    Envelope,
    /// No named keys anywhere; the first top-level array whose first
    /// element looks like an item record is treated as the items array.
    ArraySniff,
}

/// The located raw collections, before per-record normalization.
#[derive(Debug)]
pub struct ParsedDoc<'a> {
    pub shape: ImportShape,
    pub items: &'a [Value],
    pub groups: &'a [Value],
}

/// Field names whose presence marks an object as a plausible item record.
const ITEM_MARKERS: [&str; 5] = ["content", "title", "name", "start", "startDate"];

fn key_ci<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
        .map(|(_, value)| value)
}

fn looks_like_items(array: &[Value]) -> bool {
    array
        .first()
        .and_then(Value::as_object)
        .is_some_and(|first| ITEM_MARKERS.iter().any(|marker| key_ci(first, marker).is_some()))
}

/// Locates the raw items/groups collections, or `None` when the document
/// holds nothing recognizable (the caller degrades to an empty dataset).
#[must_use]
pub fn locate(doc: &Value) -> Option<ParsedDoc<'_>> {
    if let Some(array) = doc.as_array() {
        // A bare top-level array of item-shaped objects is accepted as-is.
        return looks_like_items(array).then_some(ParsedDoc {
            shape: ImportShape::ArraySniff,
            items: array,
            groups: &[],
        });
    }

    let root = doc.as_object()?;
    probe_direct(root)
        .or_else(|| probe_envelope(root))
        .or_else(|| probe_array_sniff(root))
}

fn probe_direct(map: &Map<String, Value>) -> Option<ParsedDoc<'_>> {
    let items = key_ci(map, "items")?.as_array()?;
    let groups = key_ci(map, "groups")
        .and_then(Value::as_array)
        .map_or(&[][..], Vec::as_slice);
    Some(ParsedDoc {
        shape: ImportShape::Direct,
        items,
        groups,
    })
}

fn probe_envelope(map: &Map<String, Value>) -> Option<ParsedDoc<'_>> {
    map.values()
        .filter_map(Value::as_object)
        .find_map(|nested| {
            probe_direct(nested).map(|found| ParsedDoc {
                shape: ImportShape::Envelope,
                ..found
            })
        })
}

fn probe_array_sniff(map: &Map<String, Value>) -> Option<ParsedDoc<'_>> {
    map.values()
        .filter_map(Value::as_array)
        .find(|array| looks_like_items(array))
        .map(|array| ParsedDoc {
            shape: ImportShape::ArraySniff,
            items: array,
            groups: &[],
        })
}
