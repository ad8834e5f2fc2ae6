#![allow(dead_code)]
use htp_interpret::common::{DetectionSet, DrawingType, HtpDetection};

pub(crate) fn det(label: &str, x: f64, y: f64, w: f64, h: f64) -> HtpDetection {
    HtpDetection::default()
        .with_label(label)
        .with_xy_wh(x, y, w, h)
}

pub(crate) fn set(drawing_type: DrawingType, detections: Vec<HtpDetection>) -> DetectionSet {
    DetectionSet::new(drawing_type, detections)
}

pub(crate) fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|x| x.to_string()).collect()
}

/// Whole house in the top third, wall 1000, roof 950 (ratio 0.95), door 110 (ratio 0.11) and a road.
pub(crate) fn house_scenario() -> DetectionSet {
    set(DrawingType::House, vec![
        det("집전체", 100., 50., 500., 300.),
        det("집벽", 150., 200., 50., 20.),
        det("지붕", 120., 60., 50., 19.),
        det("문", 160., 220., 11., 10.),
        det("길", 0., 900., 400., 100.),
    ])
}

pub(crate) fn house_scenario_lines() -> Vec<String> {
    lines(&[
        "house_whole: [100.0,50.0,500.0,300.0], wall: [150.0,200.0,50.0,20.0], roof: [120.0,60.0,50.0,19.0], door: [160.0,220.0,11.0,10.0], road: [0.0,900.0,400.0,100.0]",
        "Top position: idealistic and fanciful",
        "There are 1 'wall' objects.",
        "There are 1 'door' objects.",
        "There are 1 'roof' objects.",
        "Large roof: a tendency to daydream and flee to superficial interpersonal relationships",
        "No 'window' found.",
        "No 'smoke' found.",
        "Road existence: Welcome to Social Interrelationships",
    ])
}
