//! Built-in conversational rule table.
//!
//! This is the fixed corpus the guide assistant answers from. The table is
//! ordered: earlier rules take precedence when several keywords occur in
//! the same input, so reordering entries is a behavior change.

use super::message::MessageAction;
use super::rules::{ResponseRule, RuleTable};

fn rule(keywords: &[&str], reply: &str, action: Option<MessageAction>) -> ResponseRule {
    ResponseRule {
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        reply: reply.to_string(),
        action,
    }
}

fn route_action(label: &str, route: &str) -> Option<MessageAction> {
    Some(MessageAction {
        label: label.to_string(),
        route: Some(route.to_string()),
        location_id: None,
    })
}

fn location_action(label: &str, location_id: &str) -> Option<MessageAction> {
    Some(MessageAction {
        label: label.to_string(),
        route: None,
        location_id: Some(location_id.to_string()),
    })
}

impl RuleTable {
    /// Returns the built-in rule table shipped with the guide.
    pub fn builtin() -> Self {
        RuleTable {
            greeting: "As-salamu alaykum! I am your pilgrim guide. Ask me about the rituals, \
                       the sacred sites, or anything you see around the Masjid al-Haram."
                .to_string(),
            fallback: "I'm not certain about that yet. Try asking about Tawaf, Sa'i, Ihram, \
                       the Kaaba, or Zamzam - or browse the rituals section for a full \
                       walkthrough."
                .to_string(),
            suggestions: vec![
                "What is Tawaf?".to_string(),
                "Tell me about the Kaaba".to_string(),
                "How do I perform Sa'i?".to_string(),
                "Where is Zamzam?".to_string(),
                "When should I wear Ihram?".to_string(),
            ],
            rules: vec![
                rule(
                    &["tawaf", "circumambulat"],
                    "Tawaf is the ritual of circling the Kaaba seven times counterclockwise, \
                     beginning and ending at the Hajar al-Aswad. Keep the Kaaba on your left, \
                     and make du'a freely - there is no fixed text for most of the circuit.",
                    route_action("Tawaf walkthrough", "/rituals"),
                ),
                rule(
                    &["kaaba", "ka'bah", "cube"],
                    "The Kaaba is the cube-shaped House of Allah at the center of the Masjid \
                     al-Haram, draped in the black-and-gold Kiswah. It is the Qibla - the \
                     direction every Muslim faces in prayer.",
                    location_action("Focus the Kaaba", "kaaba"),
                ),
                rule(
                    &["black stone", "hajar al-aswad", "hajar"],
                    "The Hajar al-Aswad sits in the eastern corner of the Kaaba and marks the \
                     start of each Tawaf circuit. Greeting it from a distance with a raised \
                     hand is fully valid - do not push through the crowd.",
                    location_action("Show the Black Stone", "hajar-al-aswad"),
                ),
                rule(
                    &["sa'i", "sai", "safa", "marwa"],
                    "Sa'i is walking seven lengths between the hills of Safa and Marwa, \
                     remembering Hajar's search for water for her son Ismail. It begins at \
                     Safa; men lightly jog the green-lit section.",
                    route_action("Sa'i walkthrough", "/rituals"),
                ),
                rule(
                    &["zamzam", "water", "well"],
                    "Zamzam is the blessed well that sprang up for Hajar and Ismail. Drink \
                     your fill - facing the Qibla and standing is the sunnah - and make du'a, \
                     for Zamzam water is for whatever it is drunk for.",
                    location_action("Show the Zamzam well", "zamzam-well"),
                ),
                rule(
                    &["ihram", "clothing", "wear"],
                    "Ihram is the state of consecration you enter before crossing the miqat: \
                     two unstitched white cloths for men, modest dress for women, and the \
                     intention for Hajj or Umrah. Avoid perfume, cutting hair, and argument \
                     while in ihram.",
                    route_action("Ihram checklist", "/rituals"),
                ),
                rule(
                    &["talbiyah", "labbayk"],
                    "The Talbiyah is the pilgrim's call: \"Labbayk Allahumma labbayk...\" - \
                     \"Here I am, O Allah, here I am.\" Recite it from the moment you enter \
                     ihram until you begin Tawaf. You can listen to it in the audio guides.",
                    route_action("Listen to the Talbiyah", "/audio"),
                ),
                rule(
                    &["hajj", "pilgrimage", "start"],
                    "Hajj takes place from the 8th to the 13th of Dhul-Hijjah: Mina, the \
                     day of Arafah, Muzdalifah, the Jamarat, sacrifice, and the farewell \
                     Tawaf. The guided tours walk you through each day in order.",
                    route_action("Browse Hajj tours", "/tours"),
                ),
                rule(
                    &["umrah"],
                    "Umrah is the lesser pilgrimage: Ihram from the miqat, Tawaf, Sa'i, and \
                     shaving or trimming the hair. It can be performed at any time of year \
                     and usually takes a few hours.",
                    route_action("Umrah step by step", "/rituals"),
                ),
                rule(
                    &["arafah", "arafat", "wuquf"],
                    "Wuquf at Arafah is the heart of Hajj - standing in supplication from \
                     midday to sunset on the 9th of Dhul-Hijjah. The Prophet said: \"Hajj is \
                     Arafah.\" Missing it means missing the Hajj.",
                    location_action("Show Arafat", "arafat"),
                ),
                rule(
                    &["maqam", "ibrahim"],
                    "The Maqam Ibrahim preserves the stone Prophet Ibrahim stood on while \
                     raising the Kaaba's walls. After Tawaf, pray two rak'ahs behind it if \
                     you can find space - anywhere in the mosque otherwise.",
                    location_action("Show Maqam Ibrahim", "maqam-ibrahim"),
                ),
                rule(
                    &["jamarat", "stoning", "pebble"],
                    "The Jamarat are the three pillars at Mina stoned during the days of \
                     Hajj, echoing Ibrahim's rejection of Shaytan. Collect your pebbles at \
                     Muzdalifah and aim calmly - it is a rite, not a race.",
                    location_action("Show the Jamarat", "jamarat"),
                ),
                rule(
                    &["pray", "prayer", "salah", "qibla"],
                    "Every prayer in the Masjid al-Haram is rewarded many times over. The \
                     whole mosque faces the Kaaba, so simply face it wherever you stand. \
                     You can set prayer reminders from the reminders screen.",
                    route_action("Set a reminder", "/reminders"),
                ),
                rule(
                    &["map", "where", "location", "find"],
                    "Use the map view to orient yourself - every highlighted point links \
                     back to the 3D scene, and selecting one focuses the camera on it.",
                    route_action("Open the map", "/map"),
                ),
                rule(
                    &["audio", "listen", "recit"],
                    "The audio guides carry recitations and short narrations - the \
                     Talbiyah, du'as for Tawaf and Sa'i, and the story of the well of \
                     Zamzam, each with a translation.",
                    route_action("Open audio guides", "/audio"),
                ),
                rule(
                    &["hello", "salam", "assalam", "hi "],
                    "Wa alaykum as-salam! How can I help you on your pilgrimage today?",
                    None,
                ),
                rule(
                    &["thank", "shukran", "jazak"],
                    "Wa iyyakum - may your pilgrimage be accepted. Ask me anything else \
                     whenever you need.",
                    None,
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_nonempty() {
        let table = RuleTable::builtin();
        assert!(!table.greeting.is_empty());
        assert!(!table.fallback.is_empty());
        assert!(!table.suggestions.is_empty());
        assert!(table.rules.len() >= 10);
    }

    #[test]
    fn test_builtin_keywords_are_lowercase() {
        for rule in RuleTable::builtin().rules {
            for kw in &rule.keywords {
                assert_eq!(kw, &kw.to_lowercase(), "keyword must be lowercase: {}", kw);
            }
        }
    }

    #[test]
    fn test_tawaf_rule_precedes_kaaba_rule() {
        // "How do I perform Tawaf of the Kaaba?" mentions both; Tawaf wins
        // because its rule comes first.
        let table = RuleTable::builtin();
        let matched = table.reply_for("How do I perform Tawaf of the Kaaba?");
        assert!(matched.text.starts_with("Tawaf is the ritual"));
    }

    #[test]
    fn test_builtin_actions_reference_known_routes() {
        let known_routes = ["/rituals", "/audio", "/tours", "/map", "/reminders"];
        for rule in RuleTable::builtin().rules {
            if let Some(action) = rule.action {
                if let Some(route) = action.route {
                    assert!(
                        known_routes.contains(&route.as_str()),
                        "unknown route: {}",
                        route
                    );
                }
            }
        }
    }
}
