pub mod dataset;
pub mod layout;
pub mod open_range;
pub mod overlap;
pub mod palette;
pub mod types;
pub mod window;

pub use dataset::Dataset;
pub use layout::LayoutTuning;
pub use open_range::{ResolvedItem, SENTINEL_MAX, SENTINEL_MIN};
pub use overlap::max_overlap;
pub use palette::{PALETTE, is_hex_color, palette_color};
pub use types::{Bound, Item, Lane, UNGROUPED_LANE_ID};
pub use window::WindowTuning;
