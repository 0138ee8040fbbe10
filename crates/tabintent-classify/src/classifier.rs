//! Local intent classifier: seed keywords + URL boosts + softmax

use crate::lexicon::{default_domain_rules, DomainRule, SEED_KEYWORDS};
use crate::tokenize::significant_tokens;
use serde::Serialize;
use std::collections::HashSet;
use tabintent_core::{Intent, PageSignals, Prediction};

pub const MIN_CONFIDENCE: f64 = 0.45;
pub const MAX_CONFIDENCE: f64 = 0.92;
const LENGTH_BONUS_DIVISOR: f64 = 60.0;
const LENGTH_BONUS_CAP: f64 = 0.6;

/// Per-label scores, indexed by [`Intent::index`]
#[derive(Debug, Clone, PartialEq)]
pub struct LabelScores {
    pub seed: [f64; 5],
    pub boost: [f64; 5],
    pub length_bonus: f64,
    pub probabilities: [f64; 5],
}

impl LabelScores {
    pub fn combined(&self, intent: Intent) -> f64 {
        let i = intent.index();
        self.seed[i] + self.boost[i] + self.length_bonus
    }

    pub fn probability(&self, intent: Intent) -> f64 {
        self.probabilities[intent.index()]
    }

    /// One row per label, in [`Intent::ALL`] order
    pub fn breakdown(&self) -> Vec<LabelBreakdown> {
        Intent::ALL
            .iter()
            .map(|&intent| LabelBreakdown {
                intent,
                seed: self.seed[intent.index()],
                boost: self.boost[intent.index()],
                length_bonus: self.length_bonus,
                probability: self.probability(intent),
            })
            .collect()
    }

    /// Highest-probability label; ties go to the earliest label in
    /// [`Intent::ALL`].
    pub fn best(&self) -> (Intent, f64) {
        let mut best = Intent::ALL[0];
        let mut best_p = self.probabilities[0];
        for intent in Intent::ALL.iter().skip(1) {
            let p = self.probabilities[intent.index()];
            if p > best_p {
                best = *intent;
                best_p = p;
            }
        }
        (best, best_p)
    }
}

/// Score components for a single label
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelBreakdown {
    pub intent: Intent,
    pub seed: f64,
    pub boost: f64,
    pub length_bonus: f64,
    pub probability: f64,
}

#[derive(Debug, Clone)]
pub struct Classifier {
    seeds: Vec<(Intent, HashSet<String>)>,
    rules: Vec<DomainRule>,
}

impl Classifier {
    pub fn new() -> Self {
        let seeds = SEED_KEYWORDS
            .iter()
            .map(|s| {
                (
                    s.intent,
                    s.keywords.iter().map(|k| k.to_string()).collect(),
                )
            })
            .collect();

        Self {
            seeds,
            rules: default_domain_rules(),
        }
    }

    /// Classifier with no keywords and no URL rules
    pub fn empty() -> Self {
        Self {
            seeds: Vec::new(),
            rules: Vec::new(),
        }
    }

    pub fn add_keywords(&mut self, intent: Intent, keywords: &[&str]) {
        let words = keywords.iter().map(|k| k.to_lowercase());
        match self.seeds.iter_mut().find(|(i, _)| *i == intent) {
            Some((_, set)) => set.extend(words),
            None => self.seeds.push((intent, words.collect())),
        }
    }

    pub fn add_domain_rule(&mut self, rule: DomainRule) {
        self.rules.push(rule);
    }

    pub fn score(&self, signals: &PageSignals) -> LabelScores {
        let text = format!(
            "{} {} {} {}",
            signals.title, signals.description, signals.heading, signals.url
        );
        let tokens = significant_tokens(&text);

        // Step 3: every surviving token occurrence found in a label's seeds adds 1
        let mut seed = [0.0; 5];
        for (intent, keywords) in &self.seeds {
            let hits = tokens.iter().filter(|t| keywords.contains(*t)).count();
            seed[intent.index()] += hits as f64;
        }

        let url_lower = signals.url.to_lowercase();
        let mut boost = [0.0; 5];
        for rule in &self.rules {
            if rule.matches(&url_lower) {
                boost[rule.intent.index()] += rule.weight;
            }
        }

        let length_bonus = (tokens.len() as f64 / LENGTH_BONUS_DIVISOR).min(LENGTH_BONUS_CAP);

        let combined: [f64; 5] = std::array::from_fn(|i| seed[i] + boost[i] + length_bonus);

        LabelScores {
            seed,
            boost,
            length_bonus,
            probabilities: softmax(&combined),
        }
    }

    pub fn classify(&self, signals: &PageSignals) -> Prediction {
        let (intent, p) = self.score(signals).best();
        Prediction {
            intent,
            confidence: p.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE),
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify with the built-in tables
pub fn classify(signals: &PageSignals) -> Prediction {
    Classifier::new().classify(signals)
}

fn softmax(scores: &[f64; 5]) -> [f64; 5] {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut exps = [0.0; 5];
    for (e, s) in exps.iter_mut().zip(scores) {
        *e = (s - max).exp();
    }
    let sum: f64 = exps.iter().sum();
    exps.map(|e| e / sum)
}
