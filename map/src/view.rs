//! Leaflet-backed map view.
//!
//! [`MapView`] owns the live Leaflet map and its marker layers. All marker
//! decisions are delegated to [`MapCore`]; this type only executes the
//! resulting [`Command`]s and wires browser callbacks (map clicks,
//! geolocation) back into the core.
//!
//! LIFECYCLE
//! =========
//! A view is mounted once per host element. [`MapView::destroy`] (also run on
//! drop) detaches the click handler and removes the Leaflet instance so a
//! remount never stacks duplicate handlers on a stale map.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::consts::{INITIAL_ZOOM, TILE_ATTRIBUTION, TILE_MAX_ZOOM, TILE_URL};
use crate::geo::LatLng;
use crate::leaflet::{self, bounds_value, lat_lng_value};
use crate::markers::{Command, MapCore, MarkerId, QuestionPin};

struct Inner {
    map: leaflet::Map,
    core: MapCore,
    markers: HashMap<MarkerId, leaflet::Marker>,
    alive: bool,
}

impl Inner {
    fn apply(&mut self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::AddMarker { id, position, popup, open_popup } => {
                    let marker = leaflet::create_marker(&lat_lng_value(position))
                        .add_to(&self.map)
                        .bind_popup(&popup);
                    if open_popup {
                        marker.open_popup();
                    }
                    self.markers.insert(id, marker);
                }
                Command::RemoveMarker { id } => {
                    if let Some(marker) = self.markers.remove(&id) {
                        self.map.remove_layer(&marker);
                    }
                }
                Command::SetView { center, zoom } => {
                    self.map.set_view(&lat_lng_value(center), zoom);
                }
                Command::FitBounds(bounds) => {
                    self.map.fit_bounds(&bounds_value(bounds));
                }
            }
        }
    }
}

/// A mounted Leaflet map plus its marker bookkeeping.
pub struct MapView {
    inner: Rc<RefCell<Inner>>,
    click_handler: Option<Closure<dyn FnMut(JsValue)>>,
}

impl MapView {
    /// Create a Leaflet map inside `element` with the OpenStreetMap tile layer.
    ///
    /// # Errors
    ///
    /// Returns the JS exception if Leaflet is missing or rejects the element.
    pub fn mount(element: &HtmlElement) -> Result<Self, JsValue> {
        let map_options = leaflet::options(&[
            ("center", lat_lng_value(LatLng::new(0.0, 0.0))),
            ("zoom", JsValue::from_f64(INITIAL_ZOOM)),
        ])?;
        let map = leaflet::create_map(element, &map_options)?;

        let tile_options = leaflet::options(&[
            ("maxZoom", JsValue::from_f64(TILE_MAX_ZOOM)),
            ("attribution", JsValue::from_str(TILE_ATTRIBUTION)),
        ])?;
        leaflet::create_tile_layer(TILE_URL, &tile_options).add_to(&map);

        Ok(Self {
            inner: Rc::new(RefCell::new(Inner { map, core: MapCore::new(), markers: HashMap::new(), alive: true })),
            click_handler: None,
        })
    }

    /// Replace the question markers. Returns indexes of skipped pins.
    pub fn sync_questions(&mut self, pins: &[QuestionPin]) -> Vec<usize> {
        let mut inner = self.inner.borrow_mut();
        if !inner.alive {
            return Vec::new();
        }
        let sync = inner.core.sync_questions(pins);
        inner.apply(sync.commands);
        sync.skipped
    }

    /// Install the click handler, replacing any previous one.
    ///
    /// Each click moves the clicked-location marker, then calls `handler`
    /// with the clicked position.
    pub fn on_click<F>(&mut self, mut handler: F)
    where
        F: FnMut(LatLng) + 'static,
    {
        self.detach_click();

        let weak = Rc::downgrade(&self.inner);
        let closure = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            let position = match leaflet::event_lat_lng(&event) {
                Ok(position) => position,
                Err(err) => {
                    web_sys::console::warn_2(&JsValue::from_str("map click without coordinates:"), &err);
                    return;
                }
            };
            let Some(inner) = weak.upgrade() else {
                return;
            };
            {
                let mut state = inner.borrow_mut();
                if !state.alive {
                    return;
                }
                let commands = state.core.click(position);
                state.apply(commands);
            }
            handler(position);
        });

        self.inner.borrow().map.on("click", closure.as_ref().unchecked_ref());
        self.click_handler = Some(closure);
    }

    fn detach_click(&mut self) {
        if let Some(closure) = self.click_handler.take() {
            self.inner.borrow().map.off("click", closure.as_ref().unchecked_ref());
        }
    }

    /// Ask the browser for the current position and center on it.
    ///
    /// The answer arrives asynchronously; a denied or failed lookup is only
    /// reported to the console.
    ///
    /// # Errors
    ///
    /// Returns an error when the geolocation API is unavailable.
    pub fn locate(&self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let geolocation = window.navigator().geolocation()?;

        let weak = Rc::downgrade(&self.inner);
        let on_success = Closure::once_into_js(move |position: JsValue| {
            let position = match leaflet::position_lat_lng(&position) {
                Ok(position) => position,
                Err(err) => {
                    web_sys::console::warn_2(&JsValue::from_str("unreadable geolocation position:"), &err);
                    return;
                }
            };
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let mut state = inner.borrow_mut();
            if state.alive {
                let commands = state.core.locate(position);
                state.apply(commands);
            }
        });
        let on_error = Closure::once_into_js(|error: JsValue| {
            web_sys::console::warn_2(&JsValue::from_str("Error getting user location:"), &error);
        });

        geolocation.get_current_position_with_error_callback(on_success.unchecked_ref(), Some(on_error.unchecked_ref()))
    }

    /// Detach handlers, drop every marker, and remove the Leaflet map.
    pub fn destroy(&mut self) {
        self.detach_click();
        let mut inner = self.inner.borrow_mut();
        if !inner.alive {
            return;
        }
        let commands = inner.core.teardown();
        inner.apply(commands);
        inner.map.remove();
        inner.alive = false;
    }
}

impl Drop for MapView {
    fn drop(&mut self) {
        self.destroy();
    }
}
