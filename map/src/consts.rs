//! Shared constants for the map crate.

// ── Tiles ───────────────────────────────────────────────────────

/// OpenStreetMap tile template consumed by `L.tileLayer`.
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution required by the OpenStreetMap tile usage policy.
pub const TILE_ATTRIBUTION: &str = "&copy; <a href=\"http://www.openstreetmap.org/copyright\">OpenStreetMap</a>";

/// Highest zoom level the tile layer will request.
pub const TILE_MAX_ZOOM: f64 = 19.0;

// ── Viewport ────────────────────────────────────────────────────

/// Zoom used before the browser reports a position (whole world visible).
pub const INITIAL_ZOOM: f64 = 2.0;

/// Zoom used when centering on the user's geolocated position.
pub const LOCATE_ZOOM: f64 = 13.0;

// ── Popups ──────────────────────────────────────────────────────

/// Popup text bound to the geolocation marker.
pub const USER_POPUP: &str = "You are here";

/// Decimal places shown in the clicked-location popup.
pub const CLICK_POPUP_PRECISION: usize = 4;

// ── Assets ──────────────────────────────────────────────────────

/// Leaflet stylesheet the page shell must load.
pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";

/// Leaflet script defining the global `L` namespace.
pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
