mod common;

use common::*;
use imgcheck::intake;

#[test]
fn test_initial_state_is_empty() {
    let state = ReviewState::new();
    assert_eq!(state.phase(), ReviewPhase::Empty);
    assert!(state.selection().is_none());
    assert!(state.report().is_none());
    assert!(!state.is_analyzing());
    assert!(!state.can_analyze());
}

#[test]
fn test_select_makes_selection_present_and_report_absent() {
    let (picked, _dir) = pick_test_image("a.png");
    let state = ReviewState::new().select(picked.clone());

    assert_eq!(state.phase(), ReviewPhase::Selected);
    let selection = state.selection().expect("selection present");
    assert_eq!(selection.file_name, "a.png");
    assert_eq!(selection.path, picked.path);
    assert_eq!(selection.dimensions, Some((100, 100)));
    assert_eq!(selection.preview.selection, selection.id);
    assert!(state.report().is_none());
    assert!(state.can_analyze());
}

#[test]
fn test_analyze_without_selection_is_noop() {
    let state = ReviewState::new();
    let (state, request) = state.begin_analysis(Profile::default());

    assert!(request.is_none());
    assert_eq!(state.phase(), ReviewPhase::Empty);
    assert!(!state.is_analyzing());
    assert!(state.report().is_none());
}

#[test]
fn test_analyze_while_analyzing_is_noop() {
    let (picked, _dir) = pick_test_image("a.png");
    let (state, first) = ReviewState::new().select(picked).begin_analysis(Profile::default());
    let first = first.expect("first request issued");

    let (state, second) = state.begin_analysis(Profile::default());
    assert!(second.is_none());
    assert_eq!(state.pending(), Some(&first));
    assert!(!state.can_analyze());
}

#[test]
fn test_full_cycle_through_all_phases() {
    let (picked, _dir) = pick_test_image("a.png");
    let profile = Profile::for_locale(Locale::En);

    let state = ReviewState::new().select(picked.clone());
    let (state, request) = state.begin_analysis(profile);
    let request = request.expect("request issued");
    assert_eq!(state.phase(), ReviewPhase::Analyzing);
    assert!(state.report().is_none());

    let state = state.complete_analysis(&request, Ok(AnalysisReport::canned(profile)));
    assert_eq!(state.phase(), ReviewPhase::Reported);
    assert!(state.can_analyze());

    // Reported -> Analyzing clears the old report until the new one lands
    let (state, again) = state.begin_analysis(profile);
    assert!(again.is_some());
    assert_eq!(state.phase(), ReviewPhase::Analyzing);
    assert!(state.report().is_none());

    // Reported -> Selected on a new file
    let state = state.complete_analysis(&again.unwrap(), Ok(AnalysisReport::canned(profile)));
    let state = state.select(picked);
    assert_eq!(state.phase(), ReviewPhase::Selected);
    assert!(state.report().is_none());
}

#[test]
fn test_each_selection_gets_a_new_id() {
    let (picked, _dir) = pick_test_image("a.png");
    let state = ReviewState::new().select(picked.clone());
    let first = state.selection().unwrap().id;
    let state = state.select(picked);
    let second = state.selection().unwrap().id;

    assert!(second > first);
}

#[test]
fn test_reselect_mid_flight_discards_stale_result() {
    let (picked, _dir) = pick_test_image("a.png");
    let profile = Profile::default();

    let (state, request) = ReviewState::new().select(picked.clone()).begin_analysis(profile);
    let stale = request.expect("request issued");

    let state = state.select(picked);
    assert_eq!(state.phase(), ReviewPhase::Selected);
    assert!(!state.is_analyzing());
    assert!(state.report().is_none());

    // The abandoned analysis finishes later and must not resurrect a report
    let state = state.complete_analysis(&stale, Ok(AnalysisReport::canned(profile)));
    assert!(state.report().is_none());
    assert_eq!(state.phase(), ReviewPhase::Selected);
}

#[test]
fn test_failed_analysis_keeps_report_absent() {
    let (picked, _dir) = pick_test_image("a.png");
    let (state, request) = ReviewState::new().select(picked.clone()).begin_analysis(Profile::default());
    let request = request.unwrap();

    let state = state.complete_analysis(&request, Err(ReviewError::Analysis("boom".into())));
    assert!(!state.is_analyzing());
    assert!(state.report().is_none());
    assert!(matches!(state.failure(), Some(ReviewError::Analysis(_))));

    // A new selection clears the failure
    let state = state.select(picked);
    assert!(state.failure().is_none());
}

#[test]
fn test_missing_file_is_ignored() {
    let dir = tempfile::TempDir::new().unwrap();
    assert!(intake::select_path(dir.path().join("missing.png")).is_none());
    assert!(intake::select_path(dir.path()).is_none());
}

#[test]
fn test_undecodable_file_is_still_selected() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.jpg");
    std::fs::write(&path, b"definitely not a jpeg").unwrap();

    let picked = intake::select_path(&path).expect("file is accepted");
    assert_eq!(picked.dimensions, None);

    let state = ReviewState::new().select(picked);
    assert_eq!(state.phase(), ReviewPhase::Selected);
}
