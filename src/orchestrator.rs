use anyhow::{ensure, Context, Result};
use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::dates::{date_range, iso};
use crate::fixtures::{
    build_activity, build_by_topic, build_daily_tags, build_emoji_sentiment, build_hashtag_graph, build_meta,
    build_topics,
};
use crate::sampling::{EMOTION_BY_TOPIC, SENTIMENT_BY_TOPIC};
use crate::taxonomy::{EMOJIS, EMOTIONS, HASHTAGS, SENTIMENTS};

/// Every file a run writes, in write order.
pub const OUTPUT_FILES: [&str; 9] = [
    "meta.json",
    "activity.json",
    "hashtags.json",
    "emojis.json",
    "topics.json",
    "emoji_sentiment.json",
    "hashtag_graph.json",
    "sentiment_by_topic.json",
    "emotion_by_topic.json",
];

#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub dates: Vec<String>,
    pub files: Vec<PathBuf>,
}

/// Write the full fixture bundle into `output_dir`, overwriting same-named files.
///
/// A failed write aborts the run; files already written stay on disk.
pub fn generate<R: Rng + ?Sized>(output_dir: &Path, days: u32, today: NaiveDate, rng: &mut R) -> Result<GenerateReport> {
    let start = std::time::Instant::now();
    ensure!(days >= 1, "days must be at least 1 (got {})", days);

    let dates: Vec<String> = date_range(today, days)?.into_iter().map(iso).collect();
    fs::create_dir_all(output_dir).with_context(|| format!("create {:?}", output_dir))?;

    info!(
        "Generating fixtures - date_range={} to {}, days={}, output_dir={}",
        dates[0],
        dates[dates.len() - 1],
        days,
        output_dir.display()
    );

    let mut files = Vec::with_capacity(OUTPUT_FILES.len());

    // 1) Headline summary (constants)
    emit(output_dir, "meta.json", &build_meta(&iso(today)), &mut files)?;

    // 2) Daily volume + sentiment/emotion/language mix
    emit(output_dir, "activity.json", &build_activity(rng, &dates), &mut files)?;

    // 3) Daily hashtag / emoji counts
    emit(output_dir, "hashtags.json", &build_daily_tags(rng, &dates, HASHTAGS), &mut files)?;
    emit(output_dir, "emojis.json", &build_daily_tags(rng, &dates, EMOJIS), &mut files)?;

    // 4) Topics
    emit(output_dir, "topics.json", &build_topics(rng, &dates)?, &mut files)?;

    // 5) Hand-authored tables
    emit(output_dir, "emoji_sentiment.json", &build_emoji_sentiment(), &mut files)?;
    emit(output_dir, "hashtag_graph.json", &build_hashtag_graph(), &mut files)?;

    // 6) Per-topic class counts
    let sentiment_by_topic = build_by_topic(rng, SENTIMENTS, SENTIMENT_BY_TOPIC);
    emit(output_dir, "sentiment_by_topic.json", &sentiment_by_topic, &mut files)?;
    let emotion_by_topic = build_by_topic(rng, EMOTIONS, EMOTION_BY_TOPIC);
    emit(output_dir, "emotion_by_topic.json", &emotion_by_topic, &mut files)?;

    info!(
        "Fixtures written - duration={:.3}s, files={}, directory={}",
        start.elapsed().as_secs_f32(),
        files.len(),
        output_dir.display()
    );

    Ok(GenerateReport {
        output_dir: output_dir.to_path_buf(),
        dates,
        files,
    })
}

/// Pretty-printed (2-space indent) JSON, replacing any existing file.
pub fn write_json<P: AsRef<Path>, T: ?Sized + Serialize>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    let bytes = serde_json::to_vec_pretty(value).with_context(|| format!("serialize {:?}", path))?;
    fs::write(path, bytes).with_context(|| format!("write {:?}", path))
}

fn emit<T: Serialize>(dir: &Path, name: &str, value: &T, files: &mut Vec<PathBuf>) -> Result<()> {
    let path = dir.join(name);
    write_json(&path, value)?;
    debug!("Wrote {}", name);
    files.push(path);
    Ok(())
}
