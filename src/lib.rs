//! Geodesy representation conversion functions:
//! parsing the human-entered degrees/minutes/seconds into decimal degrees
//! and rendering decimal degrees back as latitude, longitude or bearing.
//!
//! ```
//! use geo_dms::{parse_dms, to_lat, to_lon, DmsFormat};
//!
//! let lat = parse_dms("51° 28′ 40.12″ N").unwrap();
//! let lon = parse_dms("000° 00′ 05.31″ W").unwrap();
//!
//! assert_eq!(to_lat(lat, DmsFormat::default()), "51°28′40″N");
//! assert_eq!(to_lon(lon, DmsFormat::default().with_decimal_places(2)), "0°0′5.31″W");
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
// recommendations
#![forbid(unsafe_code)]
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub use coord::{to_brng, to_lat, to_lon, Pole, RotationalDirection};
pub use dms::{parse_dms, to_dms, AngleInput, DmsFormat, DmsStyle, ParseDmsError};

mod coord;
mod dms;
mod utils;
