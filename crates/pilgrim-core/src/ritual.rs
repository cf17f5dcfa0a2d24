//! Ritual dataset: ordered step-by-step walkthroughs.

use serde::{Deserialize, Serialize};

/// One step of a ritual walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RitualStep {
    /// 1-based position within the ritual.
    pub number: u32,
    pub title: String,
    pub description: String,
    /// Supplication recited at this step, if any (Arabic).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dua: Option<String>,
    /// English rendering of the supplication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dua_translation: Option<String>,
    /// Practical tip for this step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

/// A complete ritual walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ritual {
    pub id: String,
    pub name: String,
    pub arabic_name: String,
    pub description: String,
    pub category: String,
    /// Rough wall-clock duration, display text.
    pub duration: String,
    /// Steps in performance order.
    pub steps: Vec<RitualStep>,
}

fn step(
    number: u32,
    title: &str,
    description: &str,
    dua: Option<(&str, &str)>,
    tip: Option<&str>,
) -> RitualStep {
    RitualStep {
        number,
        title: title.to_string(),
        description: description.to_string(),
        dua: dua.map(|(d, _)| d.to_string()),
        dua_translation: dua.map(|(_, t)| t.to_string()),
        tip: tip.map(|t| t.to_string()),
    }
}

/// Returns the built-in ritual walkthroughs.
pub fn builtin_rituals() -> Vec<Ritual> {
    vec![
        Ritual {
            id: "ihram".to_string(),
            name: "Entering Ihram".to_string(),
            arabic_name: "الإحرام".to_string(),
            description: "The state of consecration entered before crossing the miqat, \
                          marking the start of Hajj or Umrah."
                .to_string(),
            category: "umrah".to_string(),
            duration: "30 min".to_string(),
            steps: vec![
                step(
                    1,
                    "Purify and dress",
                    "Perform ghusl, then put on the ihram garments: two unstitched \
                     white cloths for men, ordinary modest dress for women.",
                    None,
                    Some("Do this before boarding if you will cross the miqat in the air."),
                ),
                step(
                    2,
                    "Make the intention",
                    "At or before the miqat, state the intention for Umrah or Hajj.",
                    Some(("لبيك اللهم عمرة", "Here I am, O Allah, for Umrah.")),
                    None,
                ),
                step(
                    3,
                    "Recite the Talbiyah",
                    "Repeat the Talbiyah from the miqat until the start of Tawaf.",
                    Some((
                        "لبيك اللهم لبيك، لبيك لا شريك لك لبيك",
                        "Here I am, O Allah, here I am. Here I am, You have no partner, here I am.",
                    )),
                    Some("Men raise their voices; women recite quietly."),
                ),
            ],
        },
        Ritual {
            id: "tawaf".to_string(),
            name: "Tawaf".to_string(),
            arabic_name: "الطواف".to_string(),
            description: "Circling the Kaaba seven times counterclockwise, beginning \
                          and ending at the Hajar al-Aswad."
                .to_string(),
            category: "umrah".to_string(),
            duration: "45-90 min".to_string(),
            steps: vec![
                step(
                    1,
                    "Begin at the Black Stone",
                    "Align with the Hajar al-Aswad, face it, and raise your right \
                     hand in greeting.",
                    Some(("بسم الله، الله أكبر", "In the name of Allah; Allah is the greatest.")),
                    Some("The green light on the mosque wall marks the alignment line."),
                ),
                step(
                    2,
                    "Circle seven times",
                    "Walk counterclockwise with the Kaaba on your left, counting \
                     seven full circuits. Pray freely in any words.",
                    None,
                    Some("Men briskly walk (raml) the first three circuits of an arrival Tawaf."),
                ),
                step(
                    3,
                    "Pray behind Maqam Ibrahim",
                    "After the seventh circuit, pray two rak'ahs, behind the Maqam \
                     if there is space, anywhere in the mosque otherwise.",
                    None,
                    None,
                ),
                step(
                    4,
                    "Drink Zamzam",
                    "Conclude by drinking Zamzam water before moving on to Sa'i.",
                    None,
                    Some("Water stations stand along every concourse."),
                ),
            ],
        },
        Ritual {
            id: "sai".to_string(),
            name: "Sa'i".to_string(),
            arabic_name: "السعي".to_string(),
            description: "Walking seven lengths between Safa and Marwa, remembering \
                          Hajar's search for water."
                .to_string(),
            category: "umrah".to_string(),
            duration: "45-60 min".to_string(),
            steps: vec![
                step(
                    1,
                    "Ascend Safa",
                    "Begin at Safa; face the Kaaba and make du'a.",
                    Some((
                        "إن الصفا والمروة من شعائر الله",
                        "Indeed Safa and Marwa are among the symbols of Allah.",
                    )),
                    None,
                ),
                step(
                    2,
                    "Walk to Marwa",
                    "Walk the gallery to Marwa; one hill to the other is one length. \
                     Men lightly jog the green-lit section.",
                    None,
                    Some("Wheelchair lanes run along the upper levels."),
                ),
                step(
                    3,
                    "Complete seven lengths",
                    "Count each crossing; the seventh ends at Marwa.",
                    None,
                    None,
                ),
                step(
                    4,
                    "Trim or shave",
                    "For Umrah, men shave or trim their hair and women trim a \
                     fingertip's length, releasing the state of ihram.",
                    None,
                    None,
                ),
            ],
        },
        Ritual {
            id: "wuquf".to_string(),
            name: "Wuquf at Arafah".to_string(),
            arabic_name: "الوقوف بعرفة".to_string(),
            description: "Standing in supplication on the plain of Arafat from midday \
                          to sunset on the 9th of Dhul-Hijjah - the pillar of Hajj."
                .to_string(),
            category: "hajj".to_string(),
            duration: "Half a day".to_string(),
            steps: vec![
                step(
                    1,
                    "Arrive before midday",
                    "Reach the plain of Arafat in the morning and settle within \
                     its boundary markers.",
                    None,
                    Some("Anywhere within the boundary counts; the mount itself is not required."),
                ),
                step(
                    2,
                    "Combine the prayers",
                    "Pray Dhuhr and Asr shortened and combined at Dhuhr time.",
                    None,
                    None,
                ),
                step(
                    3,
                    "Stand in supplication",
                    "Devote the afternoon to du'a and remembrance until sunset.",
                    Some((
                        "لا إله إلا الله وحده لا شريك له",
                        "There is no god but Allah alone, without partner.",
                    )),
                    Some("Keep water at hand; the afternoon heat is severe."),
                ),
                step(
                    4,
                    "Depart after sunset",
                    "Leave for Muzdalifah only after the sun has set.",
                    None,
                    None,
                ),
            ],
        },
    ]
}
