extern crate htp_interpret;

use htp_interpret::analyzers::{Analyzer, HtpAnalyzer};
use htp_interpret::common::{Canvas, DrawingType};

mod fixtures;
use fixtures::{det, lines, set};

#[test]
fn full_person() {
    let result = HtpAnalyzer::default().analyze(&set(DrawingType::Person, vec![
        det("사람전체", 900., 100., 200., 800.),
        det("상체", 900., 300., 200., 300.),
        det("머리", 850., 0., 300., 200.),
        det("얼굴", 950., 120., 100., 100.),
        det("눈", 960., 150., 25., 20.),
        det("눈", 1010., 150., 25., 20.),
        det("코", 990., 170., 10., 10.),
        det("다리", 920., 600., 60., 450.),
        det("다리", 1020., 600., 60., 350.),
    ]));

    // head 60000 / 60000, eyes 500 / 10000, legs 400 / 300
    assert_eq!(&result.lines()[1..], lines(&[
        "Right position: Future-oriented attitude, extroverted tendencies.",
        "No head: Neurosis, depression, autistic tendencies.",
        "Large eyes: Suspicion of others, hypersensitivity.",
        "Long legs: Desire for stability and independence.",
    ]).as_slice());
}

#[test]
fn missing_whole_person() {
    let result = Analyzer::person(Canvas::default()).analyze(&[det("얼굴", 950., 120., 100., 100.)]);

    assert_eq!(result.lines(), lines(&[
        "face: [950.0,120.0,100.0,100.0]",
        "No 'person_whole' label found.",
    ]).as_slice());
}

#[test]
fn one_eye_is_not_enough() {
    let result = Analyzer::person(Canvas::default()).analyze(&[
        det("person_whole", 100., 100., 200., 800.),
        det("face", 150., 120., 100., 100.),
        det("eye", 160., 150., 40., 40.),
    ]);

    assert_eq!(result.lines()[1], "Left position: Obsession with the past, introverted tendencies.");
    assert_eq!(result.len(), 2);
}

#[test]
fn large_head_and_short_legs() {
    let result = Analyzer::person(Canvas::default()).analyze(&[
        det("person_whole", 500., 100., 200., 800.),
        det("upper_body", 500., 300., 200., 300.),
        det("head", 450., 0., 400., 400.),
        det("leg", 520., 600., 60., 250.),
        det("leg", 620., 600., 60., 250.),
    ]);

    // head 160000 / 60000, legs 250 / 300
    assert_eq!(&result.lines()[1..], lines(&[
        "Center position: Self-centeredness, confidence in interpersonal relationships.",
        "Large head: Intellectual curiosity, lack of physical energy.",
        "Short legs: Loss of independence, tendency for dependency.",
    ]).as_slice());
}

#[test]
fn in_between_ratios_stay_silent() {
    // eyes 300 and 500 average to 0.04 of the face
    let result = Analyzer::person(Canvas::default()).analyze(&[
        det("face", 0., 0., 100., 100.),
        det("eye", 10., 10., 15., 20.),
        det("eye", 50., 10., 25., 20.),
    ]);

    assert_eq!(result.lines(), lines(&[
        "face: [0.0,0.0,100.0,100.0], eye: [10.0,10.0,15.0,20.0], eye: [50.0,10.0,25.0,20.0]",
        "No 'person_whole' label found.",
    ]).as_slice());
}

#[test]
fn later_head_replaces_earlier_one() {
    // second head 160000 / 60000 decides, the first one alone would be "No head"
    let result = Analyzer::person(Canvas::default()).analyze(&[
        det("머리", 0., 0., 200., 200.),
        det("머리", 0., 0., 400., 400.),
        det("상체", 0., 400., 200., 300.),
    ]);

    assert_eq!(&result.lines()[1..], lines(&[
        "No 'person_whole' label found.",
        "Large head: Intellectual curiosity, lack of physical energy.",
    ]).as_slice());
}

#[test]
fn later_face_replaces_earlier_one() {
    // eyes 400 / 40000 against the second face; the first face would give 0.04 and stay silent
    let result = Analyzer::person(Canvas::default()).analyze(&[
        det("얼굴", 0., 0., 100., 100.),
        det("얼굴", 0., 0., 200., 200.),
        det("눈", 20., 20., 20., 20.),
        det("눈", 60., 20., 20., 20.),
    ]);

    assert_eq!(&result.lines()[1..], lines(&[
        "No 'person_whole' label found.",
        "No eyes: Guilt feelings.",
    ]).as_slice());
}

#[test]
fn too_many_legs_before_upper_body() {
    let result = Analyzer::person(Canvas::default()).analyze(&[
        det("다리", 0., 600., 50., 400.),
        det("다리", 60., 600., 50., 400.),
        det("다리", 120., 600., 50., 400.),
        det("상체", 0., 300., 200., 300.),
    ]);

    assert_eq!(result.len(), 2);
    assert!(!result.contains("Long legs: Desire for stability and independence."));
}

#[test]
fn legs_after_the_pair_are_ignored() {
    // legs 450 and 350 over 300; the short third leg comes after the scan has stopped
    let result = Analyzer::person(Canvas::default()).analyze(&[
        det("다리", 0., 600., 50., 450.),
        det("상체", 0., 300., 200., 300.),
        det("다리", 60., 600., 50., 350.),
        det("다리", 120., 600., 50., 100.),
    ]);

    assert_eq!(result.lines().last().map(String::as_str), Some("Long legs: Desire for stability and independence."));
}
