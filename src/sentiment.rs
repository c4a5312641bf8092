use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::lexicon::{BOOSTERS, DAMPENERS, NEGATIONS, VALENCES};

/// Compound score at or above which a comment is Positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below which a comment is Negative
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

const BOOSTER_INCR: f64 = 0.293;
const CAPS_INCR: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_INCR: f64 = 0.292;
const QUESTION_INCR: f64 = 0.18;
const NORMALIZATION_ALPHA: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Label {
    Positive,
    Neutral,
    Negative,
}

impl Label {
    pub fn from_compound(score: f64) -> Self {
        if score >= POSITIVE_THRESHOLD {
            Label::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            Label::Negative
        } else {
            Label::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Positive => "Positive",
            Label::Neutral => "Neutral",
            Label::Negative => "Negative",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredComment {
    pub text: String,
    pub compound: f64,
    pub label: Label,
}

/// Anything that can turn text into a compound polarity in [-1.0, 1.0]
pub trait PolarityModel: Send + Sync {
    fn compound(&self, text: &str) -> f64;
}

/// Score a batch of comments, preserving length and order
pub fn score(model: &dyn PolarityModel, comments: &[String]) -> Vec<ScoredComment> {
    comments
        .iter()
        .map(|text| {
            let compound = model.compound(text);
            ScoredComment {
                text: text.clone(),
                compound,
                label: Label::from_compound(compound),
            }
        })
        .collect()
}

/// Squash an unbounded valence sum into [-1.0, 1.0]
pub fn normalize(sum: f64) -> f64 {
    let norm = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}

struct Token<'a> {
    raw: &'a str,
    lower: String,
}

impl Token<'_> {
    fn is_upper(&self) -> bool {
        self.raw.chars().any(char::is_alphabetic)
            && self
                .raw
                .chars()
                .filter(|c| c.is_alphabetic())
                .all(char::is_uppercase)
    }
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
        .map(|raw| Token {
            raw,
            lower: raw.to_lowercase().replace('\u{2019}', "'"),
        })
        .collect()
}

/// Rule-based lexicon model: word valences adjusted for intensifiers,
/// negation, capitalization, contrast and punctuation emphasis.
pub struct Lexicon {
    valences: HashMap<&'static str, f64>,
    boosters: HashSet<&'static str>,
    dampeners: HashSet<&'static str>,
    negations: HashSet<&'static str>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            valences: VALENCES.iter().copied().collect(),
            boosters: BOOSTERS.iter().copied().collect(),
            dampeners: DAMPENERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.ends_with("n't")
    }

    /// Intensity a modifier word adds to a following word of the given valence
    fn modifier_scalar(&self, token: &Token<'_>, valence: f64, caps_differ: bool) -> f64 {
        let mut scalar = if self.boosters.contains(token.lower.as_str()) {
            BOOSTER_INCR
        } else if self.dampeners.contains(token.lower.as_str()) {
            -BOOSTER_INCR
        } else {
            return 0.0;
        };
        if valence < 0.0 {
            scalar = -scalar;
        }
        if caps_differ && token.is_upper() {
            scalar += CAPS_INCR.copysign(valence);
        }
        scalar
    }

    fn word_valences(&self, tokens: &[Token<'_>]) -> Vec<f64> {
        let upper = tokens.iter().filter(|t| t.is_upper()).count();
        let caps_differ = upper > 0 && upper < tokens.len();

        let mut valences = vec![0.0; tokens.len()];
        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = self.valences.get(token.lower.as_str()) else {
                continue;
            };

            let mut valence = base;
            if caps_differ && token.is_upper() {
                valence += CAPS_INCR.copysign(base);
            }

            for distance in 1..=3 {
                let Some(prev) = i.checked_sub(distance).map(|j| &tokens[j]) else {
                    break;
                };
                let decay = match distance {
                    1 => 1.0,
                    2 => 0.95,
                    _ => 0.9,
                };
                valence += self.modifier_scalar(prev, base, caps_differ) * decay;
                if self.is_negation(&prev.lower) {
                    valence *= NEGATION_SCALAR;
                }
            }
            valences[i] = valence;
        }

        // Contrast: what follows "but" outweighs what precedes it
        if let Some(but) = tokens.iter().position(|t| t.lower == "but") {
            for (i, valence) in valences.iter_mut().enumerate() {
                if i < but {
                    *valence *= 0.5;
                } else if i > but {
                    *valence *= 1.5;
                }
            }
        }

        valences
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64 * EXCLAMATION_INCR;
    let questions = match text.matches('?').count() {
        0 | 1 => 0.0,
        n if n <= 3 => n as f64 * QUESTION_INCR,
        _ => 0.96,
    };
    exclamations + questions
}

impl PolarityModel for Lexicon {
    fn compound(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }

        let mut sum: f64 = self.word_valences(&tokens).iter().sum();
        if sum == 0.0 {
            return 0.0;
        }

        let emphasis = punctuation_emphasis(text);
        sum += emphasis.copysign(sum);
        normalize(sum)
    }
}
