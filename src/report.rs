//! Hands interpretation lines to a narrative writer.
//!
//! The writer itself (a hosted or local language model) lives outside this crate;
//! it is reached through [`NarrativeGenerator`].
use serde::{Deserialize, Serialize};
use crate::common::DrawingType;
use crate::data::InterpretationResult;

pub const SYSTEM_PROMPT: &str = "You are a professional HTP psychologist and mental health counselor.
Analyze both current psychological state and developmental influences through drawing features.
Provide detailed analysis by connecting specific drawing features to psychological interpretations.
- Use formal Korean (-습니다)
- Do not use special characters
- Avoid using personal pronouns or labels (e.g., 'you', 'artist', etc)
- Only use emojis that are specifically defined in section headers";

const USER_PROMPT_INSTRUCTIONS: &str = "Using the bounding box coordinates [x,y,w,h], analyze the sketch and provide psychological interpretation in formal Korean.
Translate all measurements into descriptive terms (e.g., centered, upper right, large, small):

1. Personality Analysis:
- Start with \"1. 🔅 성격 특징 🔅\"
- Key personality traits
- Analyze element sizes and placements from coordinates
- Connect spatial features to personality traits
- Interpret overall composition

2. Social Characteristics:
- Start with \"2. 🌤️ 대인 관계 🌤️\"
- Family relationship patterns
- Communication style
- Interpret element spacing and relationship boundaries
- Attachment patterns

3. Current Mental State:
- Start with \"3. 🧘 현재 심리 상태 🧘\"
- Emotional stability
- Developmental effects
- Stress/anxiety levels
- Coping mechanisms

4. Mental Health Care:
- Start with \"4. 💪 멘탈 케어 Tips 💪\"
- Understanding past influences
- Stress management suggestions
- Provide practical suggestions
- Growth potential

Analysis guidelines:
- Start content immediately after each section title
- Write clear and concise paragraphs
- Translate coordinates into descriptive terms
- Include practical advice
- Maintain a supportive tone";

/// Subject line used when the drawing type cannot be told.
pub const COMBINED_SUBJECT: &str = "HTP";

pub fn build_user_prompt(subject: &str, feature_block: &str) -> String {
    format!("=== HTP Analysis Request ===\n\
    Drawing Type: {}\n\
    Features Detected:\n\
    {}\n\n\
    {}",
            subject.to_uppercase(), feature_block, USER_PROMPT_INSTRUCTIONS)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub presence_penalty: f32,
}

impl NarrativeRequest {
    pub fn new(subject: &str, feature_block: &str) -> Self {
        Self {
            system_prompt: SYSTEM_PROMPT.to_string(),
            user_prompt: build_user_prompt(subject, feature_block),
            temperature: 0.5,
            max_tokens: 1000,
            presence_penalty: 0.3,
        }
    }
}

/// Given a prompt, returns prose.
pub trait NarrativeGenerator {
    fn generate(&self, request: &NarrativeRequest) -> anyhow::Result<String>;
}

impl<G: NarrativeGenerator + ?Sized> NarrativeGenerator for &G {
    fn generate(&self, request: &NarrativeRequest) -> anyhow::Result<String> {
        (**self).generate(request)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtpReport {
    pub subject: String,
    pub features_analyzed: Vec<String>,
    pub narrative: String,
}

/// Drawing type named in `image_path`, else the single type all results share, else `HTP`.
///
/// A path without a hint still names a drawing type when every result agrees on one,
/// so a lone tree analysis is reported as `TREE` rather than the combined `HTP`.
pub fn report_subject(results: &[InterpretationResult], image_path: Option<&str>) -> String {
    if let Some(drawing_type) = image_path.and_then(DrawingType::from_path_hint) {
        return drawing_type.to_uppercase_string();
    }
    match results.split_first() {
        Some((first, rest)) if rest.iter().all(|r| r.drawing_type == first.drawing_type) => {
            first.drawing_type.to_uppercase_string()
        }
        _ => COMBINED_SUBJECT.to_string(),
    }
}

/// All result lines, in result order, joined into one features block.
pub fn feature_lines(results: &[InterpretationResult]) -> Vec<String> {
    results
        .iter()
        .flat_map(|r| r.lines().iter().cloned())
        .collect()
}

pub struct ReportAssembler<G: NarrativeGenerator> {
    generator: G,
}

impl<G: NarrativeGenerator> ReportAssembler<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn assemble(&self, results: &[InterpretationResult], image_path: Option<&str>) -> anyhow::Result<HtpReport> {
        let features = feature_lines(results);
        let subject = report_subject(results, image_path);
        let request = NarrativeRequest::new(&subject, &features.join("\n"));

        log::info!("Requesting {} narrative for {} feature line(s)", subject, features.len());
        let narrative = self.generator.generate(&request)?;
        Ok(HtpReport {
            subject,
            features_analyzed: features,
            narrative: narrative.trim().to_string(),
        })
    }
}
