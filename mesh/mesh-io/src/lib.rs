//! Mesh file I/O for the plain text mesh format.
//!
//! The format stores a vertex block and a triangle block, each preceded by
//! its record count (see [`text`](crate::parse_text_mesh) for the layout).
//! It is the exchange format between the surface extraction tools and the
//! cleanup pipeline.
//!
//! - Parsing is strict: counts must match, records have exactly three
//!   fields, and out-of-range triangle indices are rejected at load time.
//! - Saving is atomic: output goes to a temporary file that is renamed over
//!   the target only once fully written.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{load_text_mesh, save_text_mesh};
//!
//! let mesh = load_text_mesh("surface.txt").unwrap();
//! save_text_mesh(&mesh, "surface-copy.txt").unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod text;

pub use error::{IoError, IoResult};
pub use text::{
    format_text_mesh, load_text_mesh, parse_text_mesh, read_text_mesh, save_text_mesh,
    write_text_mesh,
};
