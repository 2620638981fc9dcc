//! The fixed trend category taxonomy and the label mapper.
//!
//! Every stored trend carries exactly one of the six [`Category`] values.
//! Display labels coming from UI pickers or legacy rows form an open string
//! space; [`Category::from_label`] folds that space onto the closed enum so
//! that nothing else can reach the `category` column.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::domain::types::TypeConstraintError;

/// Classification bucket assigned to every trend submission.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    VisualStyle,
    AudioMusic,
    CreatorTechnique,
    MemeFormat,
    ProductBrand,
    BehaviorPattern,
}

impl Category {
    /// All six values in display order.
    pub const ALL: [Category; 6] = [
        Category::VisualStyle,
        Category::AudioMusic,
        Category::CreatorTechnique,
        Category::MemeFormat,
        Category::ProductBrand,
        Category::BehaviorPattern,
    ];

    /// String representation used in persistence.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VisualStyle => "visual_style",
            Self::AudioMusic => "audio_music",
            Self::CreatorTechnique => "creator_technique",
            Self::MemeFormat => "meme_format",
            Self::ProductBrand => "product_brand",
            Self::BehaviorPattern => "behavior_pattern",
        }
    }

    /// Human-facing label for UI pickers.
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::VisualStyle => "Visual Style",
            Self::AudioMusic => "Audio / Music",
            Self::CreatorTechnique => "Creator Technique",
            Self::MemeFormat => "Meme Format",
            Self::ProductBrand => "Product / Brand",
            Self::BehaviorPattern => "Behavior Pattern",
        }
    }

    /// Maps an arbitrary category label onto the enum.
    ///
    /// Total and deterministic: known display labels (and the persisted enum
    /// strings themselves, making the mapping idempotent) resolve to their
    /// documented bucket regardless of case, whitespace or punctuation;
    /// everything else, including the empty string, resolves to the default.
    /// Each arm below is a deliberate mapping decision, not a fallthrough.
    pub fn from_label(label: &str) -> Category {
        match normalize(label).as_str() {
            // Persisted enum strings round-trip to themselves.
            "visual style" => Self::VisualStyle,
            "audio music" => Self::AudioMusic,
            "creator technique" => Self::CreatorTechnique,
            "meme format" => Self::MemeFormat,
            "product brand" => Self::ProductBrand,
            "behavior pattern" => Self::BehaviorPattern,
            // Canonical display labels from the submission form.
            "fashion beauty" => Self::VisualStyle,
            "food drink" => Self::BehaviorPattern,
            "humor memes" => Self::MemeFormat,
            "lifestyle" => Self::BehaviorPattern,
            "politics social issues" => Self::BehaviorPattern,
            "music dance" => Self::AudioMusic,
            "sports fitness" => Self::BehaviorPattern,
            "tech gaming" => Self::CreatorTechnique,
            "art creativity" => Self::VisualStyle,
            "education science" => Self::CreatorTechnique,
            "luxury" => Self::ProductBrand,
            "celebrity" => Self::BehaviorPattern,
            "meme coin" => Self::MemeFormat,
            "meme stock" => Self::MemeFormat,
            // Legacy single-word labels seen in older rows.
            "fashion" | "beauty" | "art" => Self::VisualStyle,
            "music" | "dance" | "audio" => Self::AudioMusic,
            "tech" | "technology" | "gaming" | "education" => Self::CreatorTechnique,
            "memes" | "meme" | "humor" => Self::MemeFormat,
            "brand" | "product" => Self::ProductBrand,
            "food" | "politics" | "sports" | "fitness" | "travel" => Self::BehaviorPattern,
            _ => Self::default(),
        }
    }
}

/// Lowercase, strip punctuation and collapse whitespace so that label
/// variants like "Humor & Memes" and "humor-memes" compare equal.
fn normalize(label: &str) -> String {
    let mut normalized = String::with_capacity(label.len());
    for c in label.chars() {
        if c.is_alphanumeric() {
            normalized.extend(c.to_lowercase());
        } else {
            normalized.push(' ');
        }
    }
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl Default for Category {
    /// Fallback bucket for unrecognized or missing labels.
    fn default() -> Self {
        Self::MemeFormat
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Category {
    type Error = TypeConstraintError;

    /// Strict parse of the persisted enum string. Use [`Category::from_label`]
    /// for free-form input.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "visual_style" => Ok(Self::VisualStyle),
            "audio_music" => Ok(Self::AudioMusic),
            "creator_technique" => Ok(Self::CreatorTechnique),
            "meme_format" => Ok(Self::MemeFormat),
            "product_brand" => Ok(Self::ProductBrand),
            "behavior_pattern" => Ok(Self::BehaviorPattern),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "category: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_canonical_display_labels() {
        let table = [
            ("Fashion & Beauty", Category::VisualStyle),
            ("Food & Drink", Category::BehaviorPattern),
            ("Humor & Memes", Category::MemeFormat),
            ("Lifestyle", Category::BehaviorPattern),
            ("Politics & Social Issues", Category::BehaviorPattern),
            ("Music & Dance", Category::AudioMusic),
            ("Sports & Fitness", Category::BehaviorPattern),
            ("Tech & Gaming", Category::CreatorTechnique),
            ("Art & Creativity", Category::VisualStyle),
            ("Education & Science", Category::CreatorTechnique),
            ("Luxury", Category::ProductBrand),
            ("Celebrity", Category::BehaviorPattern),
            ("Meme Coin", Category::MemeFormat),
            ("Meme Stock", Category::MemeFormat),
        ];
        for (label, expected) in table {
            assert_eq!(Category::from_label(label), expected, "label: {label}");
        }
    }

    #[test]
    fn tolerates_case_whitespace_and_punctuation() {
        assert_eq!(
            Category::from_label("  humor & memes "),
            Category::MemeFormat
        );
        assert_eq!(Category::from_label("HUMOR-&-MEMES"), Category::MemeFormat);
        assert_eq!(Category::from_label("music&dance"), Category::AudioMusic);
    }

    #[test]
    fn unknown_labels_resolve_to_default() {
        assert_eq!(Category::from_label("underwater basket weaving"), Category::default());
        assert_eq!(Category::from_label(""), Category::default());
        assert_eq!(Category::from_label("   "), Category::default());
    }

    #[test]
    fn mapping_is_idempotent_over_enum_strings() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.as_str()), category);
        }
    }

    #[test]
    fn persisted_strings_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::try_from(category.as_str()).unwrap(), category);
        }
        assert!(Category::try_from("Fashion & Beauty").is_err());
    }
}
