//! `wasm-bindgen` bindings for the subset of Leaflet used by [`crate::view`].
//!
//! Leaflet is loaded by the page as a global script, so everything here binds
//! against the `L` namespace. Only valid inside a browser with Leaflet loaded.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::geo::{Bounds, LatLng};

#[wasm_bindgen]
extern "C" {
    /// `L.Map`
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    pub fn create_map(element: &HtmlElement, options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    #[wasm_bindgen(method, js_name = fitBounds)]
    pub fn fit_bounds(this: &Map, bounds: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = removeLayer)]
    pub fn remove_layer(this: &Map, layer: &Layer) -> Map;

    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, handler: &Function) -> Map;

    #[wasm_bindgen(method)]
    pub fn off(this: &Map, event: &str, handler: &Function) -> Map;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map) -> Map;

    /// `L.Layer`
    pub type Layer;

    /// `L.Marker`
    #[wasm_bindgen(extends = Layer)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn create_marker(position: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, content: &str) -> Marker;

    #[wasm_bindgen(method, js_name = openPopup)]
    pub fn open_popup(this: &Marker) -> Marker;

    /// `L.TileLayer`
    #[wasm_bindgen(extends = Layer)]
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn create_tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map) -> TileLayer;
}

/// `[lat, lng]` array accepted wherever Leaflet takes a `LatLngExpression`.
#[must_use]
pub fn lat_lng_value(position: LatLng) -> JsValue {
    Array::of2(&JsValue::from_f64(position.lat), &JsValue::from_f64(position.lng)).into()
}

/// `[[south, west], [north, east]]` array accepted by `fitBounds`.
#[must_use]
pub fn bounds_value(bounds: Bounds) -> JsValue {
    Array::of2(&lat_lng_value(bounds.south_west), &lat_lng_value(bounds.north_east)).into()
}

/// Build a plain options object from `(key, value)` pairs.
///
/// # Errors
///
/// Returns the JS exception if a property cannot be set.
pub fn options(entries: &[(&str, JsValue)]) -> Result<JsValue, JsValue> {
    let object = Object::new();
    for (key, value) in entries {
        Reflect::set(&object, &JsValue::from_str(key), value)?;
    }
    Ok(object.into())
}

/// Read `event.latlng` from a Leaflet mouse event.
///
/// # Errors
///
/// Returns an error value when the event has no numeric `latlng.lat`/`lng`.
pub fn event_lat_lng(event: &JsValue) -> Result<LatLng, JsValue> {
    let latlng = Reflect::get(event, &JsValue::from_str("latlng"))?;
    Ok(LatLng {
        lat: number_field(&latlng, "lat")?,
        lng: number_field(&latlng, "lng")?,
    })
}

/// Read `position.coords` from a browser `GeolocationPosition`.
///
/// # Errors
///
/// Returns an error value when the position has no numeric coordinates.
pub fn position_lat_lng(position: &JsValue) -> Result<LatLng, JsValue> {
    let coords = Reflect::get(position, &JsValue::from_str("coords"))?;
    Ok(LatLng {
        lat: number_field(&coords, "latitude")?,
        lng: number_field(&coords, "longitude")?,
    })
}

fn number_field(target: &JsValue, key: &str) -> Result<f64, JsValue> {
    Reflect::get(target, &JsValue::from_str(key))?
        .as_f64()
        .ok_or_else(|| JsValue::from_str(&format!("missing numeric field `{key}`")))
}
