//! Mapbox-style value to color conversion.
//!
//! This crate provides a `resolve` routine that scans a list of evaluated
//! style expression values and returns the first one that can be interpreted
//! as an RGBA color: numeric arrays, `#RRGGBB`/`#RGB` hex strings, or
//! `rgb()`/`rgba()` functional notation.
//!
//! The binary `tocolor` demonstrates usage on JSON candidate arrays.

pub mod color;
pub mod resolver;
pub mod value;
