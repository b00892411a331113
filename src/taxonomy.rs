// src/taxonomy.rs
//
// Fixed category sets shared by every generated document. Slices (not maps) so
// iteration order never changes between runs.

/// Relative weights; consumers only see the labels, the weights feed `weighted_choice`.
pub const SENTIMENTS: &[(&str, f64)] = &[("positive", 0.35), ("neutral", 0.45), ("negative", 0.20)];

pub const EMOTIONS: &[(&str, f64)] = &[
    ("joy", 0.15),
    ("sadness", 0.05),
    ("fear", 0.15),
    ("neutral", 0.50),
    ("anger", 0.10),
    ("surprise", 0.05),
];

pub const LANGUAGES: &[(&str, f64)] = &[("english", 0.75), ("spanish", 0.15), ("french", 0.10)];

pub const HASHTAGS: &[&str] = &[
    "#Robotaxi",
    "#RoboTaxi",
    "#SelfDriving",
    "#AutonomousVehicles",
    "#Waymo",
    "#Cruise",
    "#Zoox",
    "#AVSafety",
    "#Driverless",
    "#Autonomy",
    "#FutureOfTransport",
    "#Transportation",
];

// some glyphs carry a U+FE0F variation selector; keep them byte-exact
pub const EMOJIS: &[&str] = &[
    "\u{1F695}",        // 🚕
    "\u{1F916}",        // 🤖
    "\u{1F6E3}\u{FE0F}", // 🛣️
    "\u{26A0}\u{FE0F}", // ⚠️
    "\u{2705}",         // ✅
    "\u{1F62E}",        // 😮
    "\u{1F621}",        // 😡
    "\u{1F62C}",        // 😬
];

/// Topic id -> label keywords shown by the dashboard.
pub const TOPICS: &[(&str, &[&str])] = &[
    ("topic_0", &["waymo", "ride", "phoenix", "sf", "service"]),
    ("topic_1", &["safety", "incident", "crash", "rules", "testing"]),
    ("topic_2", &["traffic", "stuck", "blocked", "pulled", "over"]),
    ("topic_3", &["policy", "regulation", "city", "permits", "government"]),
    ("topic_4", &["technology", "lidar", "sensors", "mapping", "software"]),
];

pub fn labels(weighted: &[(&'static str, f64)]) -> Vec<&'static str> {
    weighted.iter().map(|(k, _)| *k).collect()
}
