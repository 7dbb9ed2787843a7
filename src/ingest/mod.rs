pub mod dates;
pub mod export;
pub mod normalizer;
pub mod shape;

pub use dates::{parse_date, repair_range};
pub use export::{ExportDocument, ItemRecord, LaneRecord, export_document, export_json};
pub use normalizer::{ItemFields, normalize_document, normalize_fields, normalize_value};
pub use shape::ImportShape;
