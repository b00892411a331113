use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Ordered `key -> count` mapping, serialized as a JSON object in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally(Vec<(String, u32)>);

impl Tally {
    pub fn push(&mut self, key: impl Into<String>, count: u32) {
        self.0.push((key.into(), count));
    }

    pub fn get(&self, key: &str) -> Option<u32> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn retain<F: FnMut(&str, u32) -> bool>(&mut self, mut keep: F) {
        self.0.retain(|(k, v)| keep(k.as_str(), *v));
    }

    pub fn total(&self) -> u32 {
        self.0.iter().map(|(_, v)| v).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for Tally {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        Tally(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl Serialize for Tally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ordered_object(&self.0, serializer)
    }
}

/* meta.json */
#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub date: String,
    pub complete: WindowTotals,
    pub last_week: WindowTotals,
    pub averages: Averages,
    pub top: Top,
}

#[derive(Debug, Clone, Serialize)]
pub struct WindowTotals {
    pub total_posts: u32,
    pub total_sentiments: usize,
    pub total_emotions: usize,
    pub total_languages: usize,
    pub total_topics: usize,
    pub total_hashtags: usize,
    pub total_emojis: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Averages {
    pub avg_posts_per_day: u32,
    pub avg_hashtags_per_day: u32,
    pub avg_emojis_per_day: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Top {
    pub sentiment: String,
    pub emotion: String,
    pub language: String,
    pub hashtag: String,
    pub emoji: String,
}

/* activity.json */
#[derive(Debug, Clone, Serialize)]
pub struct DayActivity {
    pub volume: u32, // sum of sentiment counts only
    pub sentiment: Tally,
    pub emotion: Tally,
    pub language: Tally,
}

/* topics.json */
#[derive(Debug, Clone, Serialize)]
pub struct TopicSummary {
    pub label: Vec<String>,
    pub count: u32,
    pub daily: Tally, // zero days omitted
    pub sentiment: Tally,
    pub emotion: Tally,
    pub hashtags: Vec<String>,
    pub emojis: Vec<String>,
}

/* hashtag_graph.json */
#[derive(Debug, Clone, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

// ISO date keys sort chronologically, so BTreeMap gives ascending order for free.
pub type ByDate<T> = BTreeMap<String, T>;

/// Serialize `(key, value)` pairs as an object preserving pair order.
pub fn ordered_object<S, T>(pairs: &[(String, T)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    let mut map = serializer.serialize_map(Some(pairs.len()))?;
    for (k, v) in pairs {
        map.serialize_entry(k, v)?;
    }
    map.end()
}

/// Topic-keyed document in taxonomy order.
#[derive(Debug, Clone)]
pub struct TopicMap<T>(pub Vec<(String, T)>);

impl<T: Serialize> Serialize for TopicMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ordered_object(&self.0, serializer)
    }
}

impl<T> TopicMap<T> {
    pub fn get(&self, topic: &str) -> Option<&T> {
        self.0.iter().find(|(k, _)| k == topic).map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tally_serializes_in_insertion_order() {
        let t: Tally = [("zeta", 1), ("alpha", 2), ("mid", 0)].into_iter().collect();
        let s = serde_json::to_string(&t).unwrap();
        assert_eq!(s, r#"{"zeta":1,"alpha":2,"mid":0}"#);
        assert_eq!(t.total(), 3);
    }

    #[test]
    fn topic_map_preserves_topic_order() {
        let m = TopicMap(vec![("topic_1".to_string(), 5u32), ("topic_0".to_string(), 9u32)]);
        assert_eq!(serde_json::to_string(&m).unwrap(), r#"{"topic_1":5,"topic_0":9}"#);
        assert_eq!(m.get("topic_0"), Some(&9));
        assert_eq!(m.get("topic_9"), None);
    }

    #[test]
    fn edge_field_names() {
        let e = GraphEdge { source: "#A".into(), target: "#B".into(), weight: 3 };
        assert_eq!(serde_json::to_value(&e).unwrap(), json!({"source": "#A", "target": "#B", "weight": 3}));
    }
}
