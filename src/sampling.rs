// src/sampling.rs
use anyhow::{ensure, Context, Result};
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::index;
use rand::Rng;

use crate::out_models::Tally;

/// Inclusive bounds for a sampled count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    pub lo: u32,
    pub hi: u32,
}

impl CountRange {
    pub const fn new(lo: u32, hi: u32) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, v: u32) -> bool {
        self.lo <= v && v <= self.hi
    }
}

pub const ACTIVITY_SENTIMENT: CountRange = CountRange::new(10, 140);
pub const ACTIVITY_EMOTION: CountRange = CountRange::new(5, 140);
pub const ACTIVITY_LANGUAGE: CountRange = CountRange::new(0, 120);
pub const DAILY_TAG: CountRange = CountRange::new(0, 35); // hashtags + emojis
pub const TOPIC_COUNT: CountRange = CountRange::new(25, 180);
pub const TOPIC_DAILY: CountRange = CountRange::new(0, 40);
pub const TOPIC_MIX: CountRange = CountRange::new(0, 80); // per-topic sentiment/emotion
pub const SENTIMENT_BY_TOPIC: CountRange = CountRange::new(10, 120);
pub const EMOTION_BY_TOPIC: CountRange = CountRange::new(5, 120);

pub fn count_in<R: Rng + ?Sized>(rng: &mut R, range: CountRange) -> u32 {
    let v = rng.gen_range(range.lo..=range.hi);
    debug_assert!(range.contains(v));
    v
}

/// One draw per key, in key order.
pub fn tally<R, I, S>(rng: &mut R, keys: I, range: CountRange) -> Tally
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Tally::default();
    for k in keys {
        out.push(k.as_ref(), count_in(rng, range));
    }
    out
}

/// Post-sampling filter; zero-valued keys are absent from the written maps.
pub fn drop_zeros(mut t: Tally) -> Tally {
    t.retain(|_, v| v > 0);
    t
}

/// `k` distinct items drawn without replacement, in draw order.
pub fn pick_distinct<R: Rng + ?Sized>(rng: &mut R, vocabulary: &[&str], k: usize) -> Result<Vec<String>> {
    ensure!(
        k <= vocabulary.len(),
        "cannot pick {} distinct items from a vocabulary of {}",
        k,
        vocabulary.len()
    );
    Ok(index::sample(rng, vocabulary.len(), k)
        .into_iter()
        .map(|i| vocabulary[i].to_string())
        .collect())
}

/// Draw one label from `(label, relative weight)` pairs. Weights need not sum to 1.
pub fn weighted_choice<'a, R: Rng + ?Sized>(rng: &mut R, choices: &[(&'a str, f64)]) -> Result<&'a str> {
    ensure!(!choices.is_empty(), "weighted choice over an empty set");
    for (label, w) in choices {
        ensure!(w.is_finite() && *w >= 0.0, "invalid weight {} for {:?}", w, label);
    }
    let dist = WeightedIndex::new(choices.iter().map(|(_, w)| *w))
        .with_context(|| format!("building distribution over {} choices", choices.len()))?;
    Ok(choices[dist.sample(rng)].0)
}
