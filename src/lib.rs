//! roadmap-rs: timeline layout and normalization engine for roadmap charts.
//!
//! This crate ingests loosely-structured roadmap data into a canonical
//! item/lane schema, computes per-lane stacking requirements from
//! overlapping date intervals, and selects a default visible time window.
//! Rendering is owned by the embedding application; the engine hands it a
//! fully materialized [`api::RenderPayload`].

pub mod api;
pub mod core;
pub mod error;
pub mod ingest;
pub mod telemetry;

pub use api::{LayoutOptions, RenderPayload, build_render_payload, build_render_payload_now};
pub use error::{RoadmapError, RoadmapResult};
