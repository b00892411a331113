// src/fixtures.rs
use anyhow::Result;
use rand::Rng;

use crate::out_models::{
    Averages, ByDate, DayActivity, GraphEdge, Meta, Tally, TopicMap, TopicSummary, Top, WindowTotals,
};
use crate::sampling::{
    count_in, drop_zeros, pick_distinct, tally, CountRange, ACTIVITY_EMOTION, ACTIVITY_LANGUAGE,
    ACTIVITY_SENTIMENT, DAILY_TAG, TOPIC_COUNT, TOPIC_DAILY, TOPIC_MIX,
};
use crate::taxonomy::{labels, EMOJIS, EMOTIONS, HASHTAGS, LANGUAGES, SENTIMENTS, TOPICS};

pub const TOPIC_HASHTAGS: usize = 4;
pub const TOPIC_EMOJIS: usize = 3;

/* -------------------------------------------------------------------------- */
/* meta.json                                                                  */
/* -------------------------------------------------------------------------- */

/// Headline numbers. Fixed exemplar values, not computed from the other files.
pub fn build_meta(today: &str) -> Meta {
    let totals = |posts: u32, hashtags: usize, emojis: usize| WindowTotals {
        total_posts: posts,
        total_sentiments: SENTIMENTS.len(),
        total_emotions: EMOTIONS.len(),
        total_languages: LANGUAGES.len(),
        total_topics: TOPICS.len(),
        total_hashtags: hashtags,
        total_emojis: emojis,
    };

    Meta {
        date: today.to_string(),
        complete: totals(15_000, HASHTAGS.len(), EMOJIS.len()),
        last_week: totals(1_400, HASHTAGS.len().min(25), EMOJIS.len().min(15)),
        averages: Averages {
            avg_posts_per_day: 200,
            avg_hashtags_per_day: 18,
            avg_emojis_per_day: 12,
        },
        top: Top {
            sentiment: "neutral".into(),
            emotion: "neutral".into(),
            language: "english".into(),
            hashtag: "#Robotaxi".into(),
            emoji: "\u{1F695}".into(),
        },
    }
}

/* -------------------------------------------------------------------------- */
/* activity.json                                                              */
/* -------------------------------------------------------------------------- */

pub fn build_activity<R: Rng + ?Sized>(rng: &mut R, dates: &[String]) -> ByDate<DayActivity> {
    let mut out = ByDate::new();
    for d in dates {
        let sentiment = tally(rng, labels(SENTIMENTS), ACTIVITY_SENTIMENT);
        let emotion = tally(rng, labels(EMOTIONS), ACTIVITY_EMOTION);
        let language = tally(rng, labels(LANGUAGES), ACTIVITY_LANGUAGE);
        out.insert(
            d.clone(),
            DayActivity {
                volume: sentiment.total(),
                sentiment,
                emotion,
                language,
            },
        );
    }
    out
}

/* -------------------------------------------------------------------------- */
/* hashtags.json / emojis.json                                                */
/* -------------------------------------------------------------------------- */

/// Per-day counts over a vocabulary; zero counts are dropped after sampling.
pub fn build_daily_tags<R: Rng + ?Sized>(rng: &mut R, dates: &[String], vocabulary: &[&str]) -> ByDate<Tally> {
    dates
        .iter()
        .map(|d| (d.clone(), drop_zeros(tally(rng, vocabulary.iter(), DAILY_TAG))))
        .collect()
}

/* -------------------------------------------------------------------------- */
/* topics.json                                                                */
/* -------------------------------------------------------------------------- */

pub fn build_topics<R: Rng + ?Sized>(rng: &mut R, dates: &[String]) -> Result<TopicMap<TopicSummary>> {
    let mut out = Vec::with_capacity(TOPICS.len());
    for (topic, keywords) in TOPICS {
        let count = count_in(rng, TOPIC_COUNT);
        let daily = drop_zeros(tally(rng, dates.iter(), TOPIC_DAILY));
        let sentiment = tally(rng, labels(SENTIMENTS), TOPIC_MIX);
        let emotion = tally(rng, labels(EMOTIONS), TOPIC_MIX);
        let hashtags = pick_distinct(rng, HASHTAGS, TOPIC_HASHTAGS)?;
        let emojis = pick_distinct(rng, EMOJIS, TOPIC_EMOJIS)?;

        out.push((
            topic.to_string(),
            TopicSummary {
                label: keywords.iter().map(|k| k.to_string()).collect(),
                count,
                daily,
                sentiment,
                emotion,
                hashtags,
                emojis,
            },
        ));
    }
    Ok(TopicMap(out))
}

/* -------------------------------------------------------------------------- */
/* emoji_sentiment.json / hashtag_graph.json (hand-authored)                  */
/* -------------------------------------------------------------------------- */

pub fn build_emoji_sentiment() -> TopicMap<Tally> {
    let table: [(&str, &[(&str, u32)]); 3] = [
        ("positive", &[("\u{2705}", 110), ("\u{1F695}", 90), ("\u{1F916}", 60)]),
        ("negative", &[("\u{26A0}\u{FE0F}", 95), ("\u{1F621}", 55), ("\u{1F62C}", 45)]),
        ("neutral", &[("\u{1F6E3}\u{FE0F}", 70), ("\u{1F62E}", 35)]),
    ];
    TopicMap(
        table
            .iter()
            .map(|(sentiment, row)| (sentiment.to_string(), row.iter().copied().collect()))
            .collect(),
    )
}

pub fn build_hashtag_graph() -> Vec<GraphEdge> {
    [
        ("#Robotaxi", "#Waymo", 25),
        ("#Robotaxi", "#AVSafety", 18),
        ("#SelfDriving", "#AutonomousVehicles", 20),
        ("#Driverless", "#Autonomy", 14),
    ]
    .into_iter()
    .map(|(source, target, weight)| GraphEdge {
        source: source.into(),
        target: target.into(),
        weight,
    })
    .collect()
}

/* -------------------------------------------------------------------------- */
/* sentiment_by_topic.json / emotion_by_topic.json                            */
/* -------------------------------------------------------------------------- */

/// One fresh count per class per topic.
pub fn build_by_topic<R: Rng + ?Sized>(rng: &mut R, classes: &[(&'static str, f64)], range: CountRange) -> TopicMap<Tally> {
    TopicMap(
        TOPICS
            .iter()
            .map(|(topic, _)| (topic.to_string(), tally(rng, labels(classes), range)))
            .collect(),
    )
}
