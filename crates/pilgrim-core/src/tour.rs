//! Guided tour dataset: ordered scene scripts.

use serde::{Deserialize, Serialize};

/// One stop within a tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourScene {
    /// Location this scene focuses; foreign key into the location dataset.
    pub location_id: String,
    pub title: String,
    pub description: String,
    /// 1-based position within the tour.
    pub order: u32,
}

/// A scripted sequence of scene stops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    pub id: String,
    pub title: String,
    pub arabic_title: String,
    pub description: String,
    /// Rough wall-clock duration, display text.
    pub duration: String,
    pub category: String,
    /// Scenes in visiting order.
    pub scenes: Vec<TourScene>,
}

fn scene(order: u32, location_id: &str, title: &str, description: &str) -> TourScene {
    TourScene {
        location_id: location_id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        order,
    }
}

/// Returns the built-in tours.
pub fn builtin_tours() -> Vec<Tour> {
    vec![
        Tour {
            id: "umrah-walkthrough".to_string(),
            title: "Umrah, Step by Step".to_string(),
            arabic_title: "خطوات العمرة".to_string(),
            description: "From the first sight of the Kaaba to the final length of \
                          Sa'i - the complete Umrah in order."
                .to_string(),
            duration: "15 min".to_string(),
            category: "umrah".to_string(),
            scenes: vec![
                scene(
                    1,
                    "kaaba",
                    "First sight of the Kaaba",
                    "Enter through Bab as-Salam and raise your hands in du'a at the \
                     first sight of the House.",
                ),
                scene(
                    2,
                    "hajar-al-aswad",
                    "The starting corner",
                    "Align with the Black Stone; your Tawaf begins and ends here.",
                ),
                scene(
                    3,
                    "maqam-ibrahim",
                    "Two rak'ahs at the Maqam",
                    "After seven circuits, pray behind the standing place of Ibrahim.",
                ),
                scene(
                    4,
                    "zamzam-well",
                    "A drink of Zamzam",
                    "Drink your fill before walking to the Mas'aa.",
                ),
                scene(
                    5,
                    "safa",
                    "Ascending Safa",
                    "Sa'i opens on this hill, facing the Kaaba in du'a.",
                ),
                scene(
                    6,
                    "marwa",
                    "Finishing at Marwa",
                    "The seventh length ends here; trim or shave to leave ihram.",
                ),
            ],
        },
        Tour {
            id: "hajj-days".to_string(),
            title: "The Days of Hajj".to_string(),
            arabic_title: "أيام الحج".to_string(),
            description: "The 8th to the 13th of Dhul-Hijjah, site by site: Mina, \
                          Arafat, Muzdalifah, and the Jamarat."
                .to_string(),
            duration: "20 min".to_string(),
            category: "hajj".to_string(),
            scenes: vec![
                scene(
                    1,
                    "mina",
                    "The day of Tarwiyah",
                    "Spend the 8th in the tent city, praying each prayer in its time.",
                ),
                scene(
                    2,
                    "arafat",
                    "The Day of Arafah",
                    "Stand in supplication from midday to sunset - the Hajj itself.",
                ),
                scene(
                    3,
                    "muzdalifah",
                    "A night under the sky",
                    "Pass the night in the open and gather your pebbles.",
                ),
                scene(
                    4,
                    "jamarat",
                    "The stoning",
                    "Cast seven pebbles at the great pillar on the morning of Eid.",
                ),
                scene(
                    5,
                    "kaaba",
                    "Tawaf al-Ifadah",
                    "Return to the mosque for the Tawaf of Hajj, and later the \
                     farewell Tawaf before travelling home.",
                ),
            ],
        },
        Tour {
            id: "sanctuary-highlights".to_string(),
            title: "Highlights of the Haram".to_string(),
            arabic_title: "معالم الحرم".to_string(),
            description: "A short orientation circuit around the sanctuary's \
                          landmarks for first-time visitors."
                .to_string(),
            duration: "10 min".to_string(),
            category: "orientation".to_string(),
            scenes: vec![
                scene(1, "kaaba", "The center of it all", "Orient yourself by the Kaaba."),
                scene(
                    2,
                    "zamzam-well",
                    "Water stations",
                    "Zamzam flows at stations along every concourse.",
                ),
                scene(
                    3,
                    "safa",
                    "The Mas'aa gallery",
                    "The enclosed gallery between the two hills runs along the \
                     mosque's eastern side.",
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::find_location;

    #[test]
    fn test_builtin_tours_have_unique_ids() {
        let mut ids = std::collections::HashSet::new();
        for tour in builtin_tours() {
            assert!(ids.insert(tour.id.clone()));
        }
    }

    #[test]
    fn test_scenes_are_ordered() {
        for tour in builtin_tours() {
            for (i, scene) in tour.scenes.iter().enumerate() {
                assert_eq!(scene.order as usize, i + 1, "tour {}", tour.id);
            }
        }
    }

    #[test]
    fn test_every_scene_references_a_known_location() {
        for tour in builtin_tours() {
            for scene in &tour.scenes {
                assert!(
                    find_location(&scene.location_id).is_some(),
                    "tour {} references unknown location {}",
                    tour.id,
                    scene.location_id
                );
            }
        }
    }
}
