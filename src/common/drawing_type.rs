use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingType {
    #[default] House,
    Tree,
    Person,
}

// Hardcoded drawing type names. Storing the "proper" spelling and the lowercase version.
const HOUSE: [&str; 2] = ["House", "house"];
const TREE: [&str; 2] = ["Tree", "tree"];
const PERSON: [&str; 2] = ["Person", "person"];

impl DrawingType {
    pub fn from_str(drawing_type: &str) -> Option<Self> {
        match drawing_type.to_lowercase().as_str() {
            "house" => Some(DrawingType::House),
            "tree" => Some(DrawingType::Tree),
            "person" => Some(DrawingType::Person),
            _ => None,
        }
    }

    /// Guesses the drawing type from an image path such as `uploads/tree_0012.png`.
    /// The first of `house`, `tree`, `person` found in the lowercased path wins.
    pub fn from_path_hint(path: &str) -> Option<Self> {
        let lower_path = path.to_lowercase();
        [DrawingType::House, DrawingType::Tree, DrawingType::Person]
            .into_iter()
            .find(|drawing_type| lower_path.contains(drawing_type.str_lowercase()))
    }

    pub fn str(&self) -> &'static str {
        match self {
            DrawingType::House => HOUSE[0],
            DrawingType::Tree => TREE[0],
            DrawingType::Person => PERSON[0],
        }
    }

    pub fn str_lowercase(&self) -> &'static str {
        match self {
            DrawingType::House => HOUSE[1],
            DrawingType::Tree => TREE[1],
            DrawingType::Person => PERSON[1],
        }
    }

    pub fn to_uppercase_string(&self) -> String {
        self.str().to_uppercase()
    }

    pub fn all_drawing_types() -> Vec<String> {
        vec![
            DrawingType::House.str_lowercase().to_string(),
            DrawingType::Tree.str_lowercase().to_string(),
            DrawingType::Person.str_lowercase().to_string(),
        ]
    }

    pub fn is_valid_drawing_type(drawing_type: &str) -> bool {
        DrawingType::from_str(drawing_type).is_some()
    }
}

impl std::fmt::Display for DrawingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.str())
    }
}
