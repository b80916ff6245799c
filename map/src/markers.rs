//! Marker reconciliation for a single map instance.
//!
//! [`MapCore`] tracks which marker plays which role and turns map events into
//! [`Command`]s. It never touches Leaflet itself, so every rule about which
//! markers survive a question refresh can be tested without a browser.

#[cfg(test)]
#[path = "markers_test.rs"]
mod markers_test;

use crate::consts::{CLICK_POPUP_PRECISION, LOCATE_ZOOM, USER_POPUP};
use crate::geo::{Bounds, LatLng, parse_lat_lng};

/// Opaque handle for a marker owned by a [`MapCore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(u64);

/// What a marker represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    /// The browser-reported current location.
    User,
    /// The last point the user clicked to pick a location.
    Clicked,
    /// A quiz question's location.
    Question,
}

/// A quiz question to pin, with coordinates still in wire (string) form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPin {
    pub question: String,
    pub answer: String,
    pub latitude: String,
    pub longitude: String,
}

/// Imperative map operation for the host to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddMarker { id: MarkerId, position: LatLng, popup: String, open_popup: bool },
    RemoveMarker { id: MarkerId },
    SetView { center: LatLng, zoom: f64 },
    FitBounds(Bounds),
}

/// Result of reconciling the question markers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionSync {
    pub commands: Vec<Command>,
    /// Indexes of pins whose coordinates could not be parsed.
    pub skipped: Vec<usize>,
}

/// Marker bookkeeping for one map.
#[derive(Debug, Default)]
pub struct MapCore {
    next_id: u64,
    user: Option<MarkerId>,
    clicked: Option<MarkerId>,
    questions: Vec<MarkerId>,
}

impl MapCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> MarkerId {
        self.next_id += 1;
        MarkerId(self.next_id)
    }

    /// Role of a live marker, if this core still owns it.
    #[must_use]
    pub fn role(&self, id: MarkerId) -> Option<MarkerRole> {
        if self.user == Some(id) {
            Some(MarkerRole::User)
        } else if self.clicked == Some(id) {
            Some(MarkerRole::Clicked)
        } else if self.questions.contains(&id) {
            Some(MarkerRole::Question)
        } else {
            None
        }
    }

    #[must_use]
    pub fn marker_count(&self) -> usize {
        usize::from(self.user.is_some()) + usize::from(self.clicked.is_some()) + self.questions.len()
    }

    #[must_use]
    pub fn question_markers(&self) -> &[MarkerId] {
        &self.questions
    }

    /// Place (or move) the current-location marker and center on it.
    pub fn locate(&mut self, position: LatLng) -> Vec<Command> {
        let mut commands = Vec::with_capacity(3);
        if let Some(old) = self.user.take() {
            commands.push(Command::RemoveMarker { id: old });
        }
        let id = self.allocate();
        self.user = Some(id);
        commands.push(Command::AddMarker { id, position, popup: USER_POPUP.to_owned(), open_popup: false });
        commands.push(Command::SetView { center: position, zoom: LOCATE_ZOOM });
        commands
    }

    /// Replace the clicked-location marker with one at `position`.
    pub fn click(&mut self, position: LatLng) -> Vec<Command> {
        let mut commands = Vec::with_capacity(2);
        if let Some(old) = self.clicked.take() {
            commands.push(Command::RemoveMarker { id: old });
        }
        let id = self.allocate();
        self.clicked = Some(id);
        commands.push(Command::AddMarker { id, position, popup: click_popup(position), open_popup: true });
        commands
    }

    /// Drop every question marker and add one per pin.
    ///
    /// User and clicked markers are left alone. When at least one pin was
    /// placed, the view is fitted to cover all placed pins.
    pub fn sync_questions(&mut self, pins: &[QuestionPin]) -> QuestionSync {
        let mut sync = QuestionSync::default();
        for id in self.questions.drain(..) {
            sync.commands.push(Command::RemoveMarker { id });
        }

        let mut placed = Vec::with_capacity(pins.len());
        for (index, pin) in pins.iter().enumerate() {
            let Some(position) = parse_lat_lng(&pin.latitude, &pin.longitude) else {
                sync.skipped.push(index);
                continue;
            };
            let id = self.allocate();
            self.questions.push(id);
            placed.push(position);
            sync.commands.push(Command::AddMarker { id, position, popup: question_popup(pin), open_popup: false });
        }

        if let Some(bounds) = Bounds::covering(placed) {
            sync.commands.push(Command::FitBounds(bounds));
        }
        sync
    }

    /// Forget every marker, returning removals for those still on the map.
    pub fn teardown(&mut self) -> Vec<Command> {
        let mut commands = Vec::with_capacity(self.marker_count());
        let ids = self.user.take().into_iter().chain(self.clicked.take()).chain(self.questions.drain(..));
        for id in ids {
            commands.push(Command::RemoveMarker { id });
        }
        commands
    }
}

fn click_popup(position: LatLng) -> String {
    format!(
        "Clicked location: {:.prec$}, {:.prec$}",
        position.lat,
        position.lng,
        prec = CLICK_POPUP_PRECISION
    )
}

fn question_popup(pin: &QuestionPin) -> String {
    format!("<b> question: {}</b><br> answer: {}", escape_html(&pin.question), escape_html(&pin.answer))
}

/// Escape text for insertion into popup HTML.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
