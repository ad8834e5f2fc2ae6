use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::common::DrawingType;

// (source label, canonical key), in detector class id order.
pub(crate) const HOUSE_LABELS: [(&str, &str); 15] = [
    ("집전체", "house_whole"),
    ("지붕", "roof"),
    ("집벽", "wall"),
    ("문", "door"),
    ("창문", "window"),
    ("굴뚝", "chimney"),
    ("연기", "smoke"),
    ("울타리", "fence"),
    ("길", "road"),
    ("연못", "pond"),
    ("산", "mountain"),
    ("나무", "tree"),
    ("꽃", "flower"),
    ("잔디", "grass"),
    ("태양", "sun"),
];

pub(crate) const TREE_LABELS: [(&str, &str); 14] = [
    ("나무전체", "tree_whole"),
    ("기둥", "trunk"),
    ("수관", "crown"),
    ("가지", "branch"),
    ("뿌리", "root"),
    ("나뭇잎", "leaf"),
    ("꽃", "flower"),
    ("열매", "fruit"),
    ("그네", "swing"),
    ("새", "bird"),
    ("다람쥐", "squirrel"),
    ("구름", "cloud"),
    ("달", "moon"),
    ("별", "star"),
];

pub(crate) const PERSON_LABELS: [(&str, &str); 18] = [
    ("사람전체", "person_whole"),
    ("머리", "head"),
    ("얼굴", "face"),
    ("눈", "eye"),
    ("코", "nose"),
    ("입", "mouth"),
    ("귀", "ear"),
    ("머리카락", "hair"),
    ("목", "neck"),
    ("상체", "upper_body"),
    ("팔", "arm"),
    ("손", "hand"),
    ("다리", "leg"),
    ("발", "foot"),
    ("단추", "button"),
    ("주머니", "pocket"),
    ("운동화", "sneakers"),
    ("남자구두", "dress_shoes"),
];

pub(crate) fn label_pairs(drawing_type: DrawingType) -> &'static [(&'static str, &'static str)] {
    match drawing_type {
        DrawingType::House => &HOUSE_LABELS,
        DrawingType::Tree => &TREE_LABELS,
        DrawingType::Person => &PERSON_LABELS,
    }
}

/// Maps a source label to its canonical key. Unknown labels come back unchanged.
pub fn to_canonical(drawing_type: DrawingType, raw_label: &str) -> &str {
    label_pairs(drawing_type)
        .iter()
        .find(|(raw, _)| *raw == raw_label)
        .map(|(_, key)| *key)
        .unwrap_or(raw_label)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelDictionary {
    pub drawing_type: DrawingType,
    entries: HashMap<String, String>,
}

impl LabelDictionary {
    pub fn for_drawing(drawing_type: DrawingType) -> Self {
        let entries = label_pairs(drawing_type)
            .iter()
            .map(|(raw, key)| (raw.to_string(), key.to_string()))
            .collect();
        Self {
            drawing_type,
            entries,
        }
    }

    pub fn house() -> Self {
        Self::for_drawing(DrawingType::House)
    }

    pub fn tree() -> Self {
        Self::for_drawing(DrawingType::Tree)
    }

    pub fn person() -> Self {
        Self::for_drawing(DrawingType::Person)
    }

    pub fn to_canonical<'a>(&'a self, raw_label: &'a str) -> &'a str {
        self.entries
            .get(raw_label)
            .map(String::as_str)
            .unwrap_or(raw_label)
    }

    pub fn with_entry(mut self, raw_label: &str, key: &str) -> Self {
        self.entries.insert(raw_label.to_string(), key.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
