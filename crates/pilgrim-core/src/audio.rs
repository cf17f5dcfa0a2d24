//! Audio guide dataset.

use serde::{Deserialize, Serialize};

/// A narrated or recited audio track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioGuide {
    pub id: String,
    pub title: String,
    pub arabic_title: String,
    pub description: String,
    /// Grouping used by the audio browser ("recitation", "narration").
    pub category: String,
    /// Track length in seconds.
    pub duration: u32,
    /// Transcript of the recitation, if any (Arabic).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// English rendering of the transcript.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}

impl AudioGuide {
    /// Track length as "M:SS" display text.
    pub fn duration_formatted(&self) -> String {
        format!("{}:{:02}", self.duration / 60, self.duration % 60)
    }
}

/// Returns the built-in audio guides.
pub fn builtin_audio_guides() -> Vec<AudioGuide> {
    vec![
        AudioGuide {
            id: "talbiyah".to_string(),
            title: "The Talbiyah".to_string(),
            arabic_title: "التلبية".to_string(),
            description: "The pilgrim's call, recited from the miqat until Tawaf begins."
                .to_string(),
            category: "recitation".to_string(),
            duration: 95,
            text: Some("لبيك اللهم لبيك، لبيك لا شريك لك لبيك، إن الحمد والنعمة لك والملك، لا شريك لك".to_string()),
            translation: Some(
                "Here I am, O Allah, here I am. Here I am, You have no partner, here I am. \
                 Surely all praise, grace and dominion are Yours. You have no partner."
                    .to_string(),
            ),
        },
        AudioGuide {
            id: "tawaf-dua".to_string(),
            title: "Du'a between the corners".to_string(),
            arabic_title: "دعاء الطواف".to_string(),
            description: "The supplication recited between the Yemeni corner and the \
                          Black Stone on each circuit."
                .to_string(),
            category: "recitation".to_string(),
            duration: 42,
            text: Some(
                "ربنا آتنا في الدنيا حسنة وفي الآخرة حسنة وقنا عذاب النار".to_string(),
            ),
            translation: Some(
                "Our Lord, give us good in this world and good in the Hereafter, and \
                 protect us from the punishment of the Fire."
                    .to_string(),
            ),
        },
        AudioGuide {
            id: "zamzam-story".to_string(),
            title: "The Story of Zamzam".to_string(),
            arabic_title: "قصة زمزم".to_string(),
            description: "How the well sprang up for Hajar and Ismail, and why its \
                          water is drunk with intention."
                .to_string(),
            category: "narration".to_string(),
            duration: 280,
            text: None,
            translation: None,
        },
        AudioGuide {
            id: "kaaba-history".to_string(),
            title: "The House that Ibrahim Built".to_string(),
            arabic_title: "بناء الكعبة".to_string(),
            description: "The building of the Kaaba by Ibrahim and Ismail, and the \
                          setting of the Black Stone."
                .to_string(),
            category: "narration".to_string(),
            duration: 340,
            text: None,
            translation: None,
        },
        AudioGuide {
            id: "arafah-khutbah".to_string(),
            title: "The Day of Arafah".to_string(),
            arabic_title: "يوم عرفة".to_string(),
            description: "What to do and what to leave aside during the hours of Wuquf."
                .to_string(),
            category: "narration".to_string(),
            duration: 410,
            text: None,
            translation: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_guides_have_unique_ids() {
        let mut ids = std::collections::HashSet::new();
        for guide in builtin_audio_guides() {
            assert!(ids.insert(guide.id.clone()));
        }
    }

    #[test]
    fn test_duration_formatting() {
        let guide = &builtin_audio_guides()[0];
        assert_eq!(guide.duration, 95);
        assert_eq!(guide.duration_formatted(), "1:35");
    }

    #[test]
    fn test_transcript_and_translation_travel_together() {
        for guide in builtin_audio_guides() {
            assert_eq!(guide.text.is_some(), guide.translation.is_some());
        }
    }
}
