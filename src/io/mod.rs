//! I/O layer for reading sprite sheets and writing outputs.
//! Provides the sheet `reader` and `writers` for PNG poses and the optional
//! JSON manifest sidecar.
pub mod reader;
pub use reader::load_sheet;

pub mod writers;
