extern crate htp_interpret;

use htp_interpret::analyzers::Analyzer;
use htp_interpret::common::Canvas;

mod fixtures;
use fixtures::{det, lines};

const INSIDE: &str = "Animal inside the hole: identification with animals, attachment-related, seeking stability, symbol of the womb";

#[test]
fn no_crown_stops_the_analysis() {
    let result = Analyzer::tree(Canvas::default()).analyze(&[
        det("나무전체", 500., 700., 200., 400.),
        det("기둥", 550., 800., 100., 300.),
        det("가지", 520., 720., 50., 50.),
    ]);

    assert_eq!(result.lines(), lines(&[
        "tree_whole: [500.0,700.0,200.0,400.0], trunk: [550.0,800.0,100.0,300.0], branch: [520.0,720.0,50.0,50.0]",
        "Bottom position: self-protective attitude",
        "No 'crown' found.",
    ]).as_slice());
}

#[test]
fn zero_area_crown_stops_the_analysis() {
    let result = Analyzer::tree(Canvas::default()).analyze(&[
        det("수관", 400., 100., 0., 300.),
        det("기둥", 550., 400., 100., 300.),
    ]);

    assert_eq!(result.len(), 3);
    assert_eq!(result.lines()[1], "No 'whole tree' label found.");
    assert_eq!(result.lines()[2], "There are 1 'crown' objects.");
}

#[test]
fn full_tree() {
    // crown 120000, trunk 30000 (0.25), branch 6000 (0.05)
    let result = Analyzer::tree(Canvas::default()).analyze(&[
        det("나무전체", 380., 80., 440., 820.),
        det("수관", 400., 100., 400., 300.),
        det("기둥", 550., 400., 100., 300.),
        det("가지", 420., 150., 100., 60.),
        det("다람쥐", 580., 500., 20., 20.),
    ]);

    assert_eq!(&result.lines()[1..], lines(&[
        "Center position: inner stability, growth desire",
        "There are 1 'crown' objects.",
        "There are 1 'trunk' objects.",
        "Small trunk: helplessness, maladaptation",
        "There are 1 'branch' objects.",
        "Small branch: weakness and incompetence",
        INSIDE,
    ]).as_slice());
}

#[test]
fn large_trunk_and_branch() {
    // crown 10000, trunk 7000 (0.7), branch 2000 (0.2 clears the large cut-off first)
    let result = Analyzer::tree(Canvas::default()).analyze(&[
        det("수관", 0., 0., 100., 100.),
        det("기둥", 0., 100., 70., 100.),
        det("가지", 0., 0., 40., 50.),
    ]);

    assert!(result.contains("Large trunk: actively engaged, creative environment"));
    assert!(result.contains("Large branch: inflated self-esteem, grandiose self"));
    assert!(result.contains("No animal inside the tree."));
}

#[test]
fn animal_outside_or_no_trunk() {
    let outside = Analyzer::tree(Canvas::default()).analyze(&[
        det("수관", 400., 100., 400., 300.),
        det("기둥", 550., 400., 100., 300.),
        det("새", 100., 100., 20., 20.),
    ]);
    assert_eq!(outside.lines().last().map(String::as_str), Some("No animal inside the tree."));

    let no_trunk = Analyzer::tree(Canvas::default()).analyze(&[
        det("수관", 400., 100., 400., 300.),
        det("새", 100., 100., 20., 20.),
    ]);
    assert!(no_trunk.contains("No 'trunk' found."));
    assert!(no_trunk.contains("No 'branch' found."));
    assert_eq!(no_trunk.lines().last().map(String::as_str), Some("No pillar found."));
}

#[test]
fn animal_on_the_trunk_edge_counts() {
    // squirrel center sits on the trunk's right edge, x = 650
    let result = Analyzer::tree(Canvas::default()).analyze(&[
        det("수관", 400., 100., 400., 300.),
        det("기둥", 550., 400., 100., 300.),
        det("다람쥐", 640., 500., 20., 20.),
    ]);
    assert_eq!(result.lines().last().map(String::as_str), Some(INSIDE));
}
