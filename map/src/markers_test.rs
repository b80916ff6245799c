#![allow(clippy::float_cmp)]

use super::*;

fn pin(question: &str, lat: &str, lng: &str) -> QuestionPin {
    QuestionPin {
        question: question.to_owned(),
        answer: format!("{question} answer"),
        latitude: lat.to_owned(),
        longitude: lng.to_owned(),
    }
}

fn added_ids(commands: &[Command]) -> Vec<MarkerId> {
    commands
        .iter()
        .filter_map(|c| match c {
            Command::AddMarker { id, .. } => Some(*id),
            _ => None,
        })
        .collect()
}

fn removed_ids(commands: &[Command]) -> Vec<MarkerId> {
    commands
        .iter()
        .filter_map(|c| match c {
            Command::RemoveMarker { id } => Some(*id),
            _ => None,
        })
        .collect()
}

// =============================================================
// locate
// =============================================================

#[test]
fn locate_adds_user_marker_and_centers() {
    let mut core = MapCore::new();
    let here = LatLng::new(59.33, 18.07);
    let commands = core.locate(here);

    assert_eq!(commands.len(), 2);
    let Command::AddMarker { id, position, popup, open_popup } = &commands[0] else {
        panic!("expected AddMarker, got {:?}", commands[0]);
    };
    assert_eq!(*position, here);
    assert_eq!(popup, USER_POPUP);
    assert!(!open_popup);
    assert_eq!(core.role(*id), Some(MarkerRole::User));
    assert_eq!(commands[1], Command::SetView { center: here, zoom: LOCATE_ZOOM });
}

#[test]
fn locate_twice_replaces_user_marker() {
    let mut core = MapCore::new();
    let first = added_ids(&core.locate(LatLng::new(1.0, 1.0)));
    let second = core.locate(LatLng::new(2.0, 2.0));
    assert_eq!(removed_ids(&second), first);
    assert_eq!(core.marker_count(), 1);
}

// =============================================================
// click
// =============================================================

#[test]
fn click_adds_open_popup_with_four_decimals() {
    let mut core = MapCore::new();
    let commands = core.click(LatLng::new(59.329_323_5, 18.068_581_2));
    assert_eq!(commands.len(), 1);
    let Command::AddMarker { popup, open_popup, .. } = &commands[0] else {
        panic!("expected AddMarker");
    };
    assert_eq!(popup, "Clicked location: 59.3293, 18.0686");
    assert!(open_popup);
}

#[test]
fn second_click_replaces_first_click_marker() {
    let mut core = MapCore::new();
    let first = added_ids(&core.click(LatLng::new(1.0, 1.0)));
    let second = core.click(LatLng::new(2.0, 2.0));
    assert_eq!(removed_ids(&second), first);
    let new_id = added_ids(&second)[0];
    assert_eq!(core.role(new_id), Some(MarkerRole::Clicked));
    assert_eq!(core.role(first[0]), None);
}

#[test]
fn click_does_not_touch_user_marker() {
    let mut core = MapCore::new();
    let user = added_ids(&core.locate(LatLng::new(1.0, 1.0)))[0];
    let commands = core.click(LatLng::new(2.0, 2.0));
    assert!(removed_ids(&commands).is_empty());
    assert_eq!(core.role(user), Some(MarkerRole::User));
}

// =============================================================
// sync_questions
// =============================================================

#[test]
fn sync_adds_one_marker_per_question_and_fits_bounds() {
    let mut core = MapCore::new();
    let sync = core.sync_questions(&[pin("a", "59.0", "18.0"), pin("b", "57.0", "12.0")]);

    assert_eq!(added_ids(&sync.commands).len(), 2);
    assert!(sync.skipped.is_empty());
    let Some(Command::FitBounds(bounds)) = sync.commands.last() else {
        panic!("expected trailing FitBounds");
    };
    assert_eq!(bounds.south_west, LatLng::new(57.0, 12.0));
    assert_eq!(bounds.north_east, LatLng::new(59.0, 18.0));
}

#[test]
fn sync_with_no_questions_does_not_fit_bounds() {
    let mut core = MapCore::new();
    let sync = core.sync_questions(&[]);
    assert!(sync.commands.is_empty());
}

#[test]
fn resync_removes_previous_question_markers() {
    let mut core = MapCore::new();
    let first = added_ids(&core.sync_questions(&[pin("a", "1", "1"), pin("b", "2", "2")]).commands);
    let second = core.sync_questions(&[pin("c", "3", "3")]);
    assert_eq!(removed_ids(&second.commands), first);
    assert_eq!(core.question_markers().len(), 1);
}

#[test]
fn sync_keeps_user_and_clicked_markers() {
    let mut core = MapCore::new();
    let user = added_ids(&core.locate(LatLng::new(1.0, 1.0)))[0];
    let clicked = added_ids(&core.click(LatLng::new(2.0, 2.0)))[0];

    let sync = core.sync_questions(&[pin("a", "3", "3")]);
    let removed = removed_ids(&sync.commands);
    assert!(!removed.contains(&user));
    assert!(!removed.contains(&clicked));
    assert_eq!(core.role(user), Some(MarkerRole::User));
    assert_eq!(core.role(clicked), Some(MarkerRole::Clicked));
    assert_eq!(core.marker_count(), 3);
}

#[test]
fn sync_skips_unparsable_coordinates() {
    let mut core = MapCore::new();
    let sync = core.sync_questions(&[pin("a", "oops", "1"), pin("b", "2", "2"), pin("c", "", "")]);
    assert_eq!(sync.skipped, vec![0, 2]);
    assert_eq!(added_ids(&sync.commands).len(), 1);
    let Some(Command::FitBounds(bounds)) = sync.commands.last() else {
        panic!("expected trailing FitBounds");
    };
    assert_eq!(bounds.south_west, LatLng::new(2.0, 2.0));
}

#[test]
fn sync_popup_escapes_markup() {
    let mut core = MapCore::new();
    let mut p = pin("<script>", "1", "1");
    p.answer = "a & b".to_owned();
    let sync = core.sync_questions(&[p]);
    let Command::AddMarker { popup, .. } = &sync.commands[0] else {
        panic!("expected AddMarker");
    };
    assert_eq!(popup, "<b> question: &lt;script&gt;</b><br> answer: a &amp; b");
}

// =============================================================
// teardown
// =============================================================

#[test]
fn teardown_removes_everything() {
    let mut core = MapCore::new();
    core.locate(LatLng::new(1.0, 1.0));
    core.click(LatLng::new(2.0, 2.0));
    core.sync_questions(&[pin("a", "3", "3"), pin("b", "4", "4")]);

    let commands = core.teardown();
    assert_eq!(removed_ids(&commands).len(), 4);
    assert_eq!(core.marker_count(), 0);
}

#[test]
fn marker_ids_are_never_reused() {
    let mut core = MapCore::new();
    let a = added_ids(&core.click(LatLng::new(1.0, 1.0)))[0];
    core.teardown();
    let b = added_ids(&core.click(LatLng::new(1.0, 1.0)))[0];
    assert_ne!(a, b);
}

// =============================================================
// escape_html
// =============================================================

#[test]
fn escape_html_passes_plain_text() {
    assert_eq!(escape_html("Where is Gamla Stan?"), "Where is Gamla Stan?");
}

#[test]
fn escape_html_escapes_quotes() {
    assert_eq!(escape_html(r#"say "hi" it's"#), "say &quot;hi&quot; it&#39;s");
}
