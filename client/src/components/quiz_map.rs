//! Bridge component between Leptos signals and the imperative `map::view::MapView`.
//!
//! ARCHITECTURE
//! ============
//! The map crate owns Leaflet and marker bookkeeping. This host mounts one
//! view per component instance, pushes question changes into it, and turns
//! map clicks into coordinate strings for the forms.

#[cfg(test)]
#[path = "quiz_map_test.rs"]
mod quiz_map_test;

use leptos::prelude::*;

use crate::net::types::Question;
#[cfg(feature = "hydrate")]
use leptos::logging::{error, warn};
#[cfg(feature = "hydrate")]
use map::geo::{LatLng, format_coordinate};
#[cfg(feature = "hydrate")]
use map::markers::QuestionPin;
#[cfg(feature = "hydrate")]
use map::view::MapView;

/// Inline size of the map host. Leaflet draws nothing into a zero-height box.
pub const MAP_STYLE: &str = "height: 500px; width: 100%";

/// Map panel showing `questions` as pins.
///
/// `on_location` receives `(latitude, longitude)` for every map click.
#[component]
pub fn QuizMap(
    #[prop(into, optional)] questions: Signal<Vec<Question>>,
    #[prop(optional)] on_location: Option<Callback<(String, String)>>,
) -> impl IntoView {
    let host_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let view = StoredValue::new_local(None::<MapView>);
        let mounted = RwSignal::new(false);

        Effect::new(move || {
            let Some(element) = host_ref.get() else {
                return;
            };
            if view.with_value(Option::is_some) {
                return;
            }
            let mut instance = match MapView::mount(&element) {
                Ok(instance) => instance,
                Err(err) => {
                    error!("failed to mount map: {err:?}");
                    return;
                }
            };
            if let Some(callback) = on_location {
                instance.on_click(move |position: LatLng| {
                    callback.run((format_coordinate(position.lat), format_coordinate(position.lng)));
                });
            }
            if let Err(err) = instance.locate() {
                warn!("geolocation unavailable: {err:?}");
            }
            view.set_value(Some(instance));
            mounted.set(true);
        });

        Effect::new(move || {
            let pins: Vec<QuestionPin> = questions.with(|list| list.iter().map(Question::to_pin).collect());
            if !mounted.get() {
                return;
            }
            view.update_value(|slot| {
                let Some(instance) = slot.as_mut() else {
                    return;
                };
                for index in instance.sync_questions(&pins) {
                    if let Some(pin) = pins.get(index) {
                        warn!("skipping question {index} with invalid location ({}, {})", pin.latitude, pin.longitude);
                    }
                }
            });
        });

        on_cleanup(move || {
            view.try_update_value(|slot| {
                if let Some(mut instance) = slot.take() {
                    instance.destroy();
                }
            });
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (questions, on_location);

    view! { <div class="quiz-map" style=MAP_STYLE node_ref=host_ref></div> }
}
