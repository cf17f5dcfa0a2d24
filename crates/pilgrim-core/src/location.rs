//! Location dataset: the selectable points of interest in the spatial scene.
//!
//! The core treats this as an immutable lookup table; the store only ever
//! references locations by id.

use serde::{Deserialize, Serialize};

use crate::store::CameraTarget;

/// Geographic coordinates for the map view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A point of interest, selectable as a scene hotspot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Stable identifier referenced by the store, chat actions, and tours.
    pub id: String,
    /// English display name.
    pub name: String,
    /// Arabic display name.
    pub arabic_name: String,
    /// Position of the hotspot in the 3D scene; also the camera focus
    /// target when the hotspot is selected.
    pub position: CameraTarget,
    /// Grouping used by the map view ("sanctuary", "hajj-site", ...).
    pub category: String,
    /// Long description shown in the info card.
    pub description: String,
    /// One-line description for list rows.
    pub short_description: String,
    /// Practical visiting tip.
    pub tip: String,
    /// Real-world coordinates for the map view.
    pub coordinates: Coordinates,
}

fn location(
    id: &str,
    name: &str,
    arabic_name: &str,
    position: CameraTarget,
    category: &str,
    description: &str,
    short_description: &str,
    tip: &str,
    lat: f64,
    lng: f64,
) -> Location {
    Location {
        id: id.to_string(),
        name: name.to_string(),
        arabic_name: arabic_name.to_string(),
        position,
        category: category.to_string(),
        description: description.to_string(),
        short_description: short_description.to_string(),
        tip: tip.to_string(),
        coordinates: Coordinates { lat, lng },
    }
}

/// Returns the built-in location dataset.
///
/// The first entry is the Kaaba, the scene's default focus.
pub fn builtin_locations() -> Vec<Location> {
    vec![
        location(
            "kaaba",
            "The Kaaba",
            "الكعبة",
            [0.0, 1.5, 0.0],
            "sanctuary",
            "The cube-shaped House of Allah at the center of the Masjid al-Haram, \
             draped in the black-and-gold Kiswah. Every Muslim on earth faces it \
             in prayer, and Tawaf circles it seven times.",
            "The House of Allah and the Qibla of all Muslims.",
            "Tawaf flows counterclockwise; keep the Kaaba on your left.",
            21.4225,
            39.8262,
        ),
        location(
            "hajar-al-aswad",
            "Hajar al-Aswad",
            "الحجر الأسود",
            [1.1, 1.0, 1.1],
            "sanctuary",
            "The Black Stone, set in the eastern corner of the Kaaba, marks the \
             start and end of each Tawaf circuit. Kissing it is a sunnah, not an \
             obligation.",
            "The Black Stone at the Kaaba's eastern corner.",
            "Greet it from a distance with a raised hand when the crowd is heavy.",
            21.4224,
            39.8264,
        ),
        location(
            "maqam-ibrahim",
            "Maqam Ibrahim",
            "مقام إبراهيم",
            [2.2, 0.5, 0.8],
            "sanctuary",
            "The glass enclosure preserving the stone Prophet Ibrahim stood on \
             while raising the walls of the Kaaba, his footprints pressed into it.",
            "The standing place of Prophet Ibrahim.",
            "Pray the two rak'ahs after Tawaf behind it if space allows.",
            21.4226,
            39.8263,
        ),
        location(
            "zamzam-well",
            "Well of Zamzam",
            "بئر زمزم",
            [3.0, -0.5, 2.0],
            "sanctuary",
            "The blessed well that sprang up for Hajar and the infant Ismail, \
             flowing without pause for millennia. Its water is served throughout \
             the mosque.",
            "The blessed well that has flowed for millennia.",
            "Drink standing and facing the Qibla, and make du'a.",
            21.4223,
            39.8261,
        ),
        location(
            "safa",
            "Mount Safa",
            "الصفا",
            [6.0, 0.8, 4.0],
            "sanctuary",
            "The small hill where Sa'i begins, from which Hajar first searched \
             the horizon for water. Now enclosed within the mosque's Mas'aa \
             gallery.",
            "The starting hill of Sa'i.",
            "Face the Kaaba from the hilltop and make du'a before setting out.",
            21.4209,
            39.8273,
        ),
        location(
            "marwa",
            "Mount Marwa",
            "المروة",
            [10.0, 0.8, 8.0],
            "sanctuary",
            "The hill where each length of Sa'i ends; the seventh arrival at \
             Marwa completes the rite.",
            "The finishing hill of Sa'i.",
            "Sa'i ends here on the seventh length; trim or shave afterwards for Umrah.",
            21.4238,
            39.8286,
        ),
        location(
            "mina",
            "Mina",
            "منى",
            [40.0, 2.0, 25.0],
            "hajj-site",
            "The tent city east of Makkah where pilgrims spend the nights of \
             Hajj, and where the Jamarat stand.",
            "The tent city of the Hajj nights.",
            "Memorize your camp number; the tents look identical at night.",
            21.4133,
            39.8933,
        ),
        location(
            "arafat",
            "Plain of Arafat",
            "عرفات",
            [80.0, 3.0, 45.0],
            "hajj-site",
            "The plain where pilgrims stand in supplication on the 9th of \
             Dhul-Hijjah. Wuquf here is the essential pillar of Hajj.",
            "Where the Hajj reaches its peak on the Day of Arafah.",
            "Stay within the plain's boundary markers until sunset.",
            21.3549,
            39.9841,
        ),
        location(
            "muzdalifah",
            "Muzdalifah",
            "مزدلفة",
            [60.0, 2.5, 35.0],
            "hajj-site",
            "The open plain between Arafat and Mina where pilgrims pass the \
             night under the sky and gather pebbles for the Jamarat.",
            "The overnight stop between Arafat and Mina.",
            "Collect your pebbles here; pea-sized stones are enough.",
            21.3833,
            39.9372,
        ),
        location(
            "jamarat",
            "The Jamarat",
            "الجمرات",
            [45.0, 1.5, 28.0],
            "hajj-site",
            "The three pillars at Mina stoned during the days of Hajj, marking \
             where Ibrahim rejected Shaytan three times.",
            "The three stoning pillars at Mina.",
            "Use the upper bridge levels at off-peak hours; never rush the ramp.",
            21.4201,
            39.8723,
        ),
    ]
}

/// Looks up a location by id in the built-in dataset.
pub fn find_location(id: &str) -> Option<Location> {
    builtin_locations().into_iter().find(|l| l.id == id)
}
