mod options;
mod payload;

pub use options::LayoutOptions;
pub use payload::{RenderPayload, build_render_payload, build_render_payload_now};
