//! Core processing building blocks: grid windows, alpha masks, bounding-box
//! detection, bleed trimming, and the per-tile refinement pipeline. These are
//! internal primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
