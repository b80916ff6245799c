//! Map view engine for the quiz map client.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! lifecycle of a Leaflet map: placing the "current location" marker,
//! reconciling one marker per quiz question, and reporting click positions
//! back to the host. The Leptos host only forwards question lists and click
//! callbacks; everything that touches live map layers happens here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`markers`] | Testable [`markers::MapCore`] marker reconciliation |
//! | [`geo`] | Coordinate parsing, bounds, and formatting |
//! | [`view`] | [`view::MapView`], which applies core commands to Leaflet |
//! | [`leaflet`] | `wasm-bindgen` bindings for the global Leaflet `L` namespace |
//! | [`consts`] | Tile source, zoom levels, and popup labels |

pub mod consts;
pub mod geo;
pub mod leaflet;
pub mod markers;
pub mod view;
