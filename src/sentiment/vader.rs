//! Lexicon and rule based polarity model (VADER-style).
//!
//! Each lexicon word carries a valence in `[-4, 4]`. Valences are adjusted for booster
//! words, negations within three tokens, all-caps emphasis, "least", and a contrastive
//! "but"; the sum is then amplified by `!`/`?` and squashed into `[-1, 1]`.

use std::collections::HashMap;
use std::path::Path;

use crate::core::SnapError;
use crate::sentiment::{PolarityModel, SentimentScore};

const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;
const C_INCR: f64 = 0.733;
const N_SCALAR: f64 = -0.74;
const NORMALIZE_ALPHA: f64 = 15.0;

const BUNDLED_LEXICON: &str = include_str!("lexicon.txt");

const NEGATE: &[&str] = &[
    "aint",
    "arent",
    "cannot",
    "cant",
    "couldnt",
    "darent",
    "didnt",
    "doesnt",
    "ain't",
    "aren't",
    "can't",
    "couldn't",
    "daren't",
    "didn't",
    "doesn't",
    "dont",
    "hadnt",
    "hasnt",
    "havent",
    "isnt",
    "mightnt",
    "mustnt",
    "neither",
    "don't",
    "hadn't",
    "hasn't",
    "haven't",
    "isn't",
    "mightn't",
    "mustn't",
    "neednt",
    "needn't",
    "never",
    "none",
    "nope",
    "nor",
    "not",
    "nothing",
    "nowhere",
    "oughtnt",
    "shant",
    "shouldnt",
    "uhuh",
    "wasnt",
    "werent",
    "oughtn't",
    "shan't",
    "shouldn't",
    "uh-uh",
    "wasn't",
    "weren't",
    "without",
    "wont",
    "wouldnt",
    "won't",
    "wouldn't",
    "rarely",
    "seldom",
    "despite",
];

const BOOST_UP: &[&str] = &[
    "absolutely",
    "amazingly",
    "awfully",
    "completely",
    "considerably",
    "decidedly",
    "deeply",
    "enormously",
    "entirely",
    "especially",
    "exceptionally",
    "extremely",
    "fabulously",
    "greatly",
    "highly",
    "hugely",
    "incredibly",
    "intensely",
    "majorly",
    "more",
    "most",
    "particularly",
    "purely",
    "quite",
    "really",
    "remarkably",
    "so",
    "substantially",
    "thoroughly",
    "totally",
    "tremendously",
    "uber",
    "unbelievably",
    "unusually",
    "utterly",
    "very",
];

const BOOST_DOWN: &[&str] = &[
    "almost",
    "barely",
    "hardly",
    "kinda",
    "less",
    "little",
    "marginally",
    "occasionally",
    "partly",
    "scarcely",
    "slightly",
    "somewhat",
    "sorta",
];

fn booster(word_lower: &str) -> Option<f64> {
    if BOOST_UP.contains(&word_lower) {
        Some(B_INCR)
    } else if BOOST_DOWN.contains(&word_lower) {
        Some(B_DECR)
    } else {
        None
    }
}

fn is_negated(word_lower: &str) -> bool {
    NEGATE.contains(&word_lower) || word_lower.contains("n't")
}

/// True when the word has at least one cased letter and no lowercase ones.
fn is_upper(word: &str) -> bool {
    let mut cased = false;
    for c in word.chars() {
        if c.is_lowercase() {
            return false;
        }
        cased |= c.is_uppercase();
    }
    cased
}

/// Some, but not all, tokens are ALL CAPS.
fn allcap_differential(words: &[&str]) -> bool {
    let caps = words.iter().filter(|w| is_upper(w)).count();
    caps > 0 && caps < words.len()
}

/// Strips surrounding punctuation unless that would leave two characters or fewer
/// (keeps emoticons like `:)` intact).
fn strip_punct(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

fn scalar_inc_dec(word: &str, word_lower: &str, valence: f64, cap_diff: bool) -> f64 {
    let Some(mut scalar) = booster(word_lower) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if is_upper(word) && cap_diff {
        if valence > 0.0 {
            scalar += C_INCR;
        } else {
            scalar -= C_INCR;
        }
    }
    scalar
}

fn negation_check(valence: f64, lower: &[String], start_i: usize, i: usize) -> f64 {
    let so_or_this = |w: &str| w == "so" || w == "this";
    match start_i {
        0 => {
            if is_negated(&lower[i - 1]) {
                return valence * N_SCALAR;
            }
        }
        1 => {
            let (w2, w1) = (lower[i - 2].as_str(), lower[i - 1].as_str());
            if w2 == "never" && so_or_this(w1) {
                return valence * 1.25;
            }
            if !(w2 == "without" && w1 == "doubt") && is_negated(w2) {
                return valence * N_SCALAR;
            }
        }
        _ => {
            let (w3, w2, w1) = (
                lower[i - 3].as_str(),
                lower[i - 2].as_str(),
                lower[i - 1].as_str(),
            );
            if w3 == "never" && (so_or_this(w2) || so_or_this(w1)) {
                return valence * 1.25;
            }
            if !(w3 == "without" && (w2 == "doubt" || w1 == "doubt")) && is_negated(w3) {
                return valence * N_SCALAR;
            }
        }
    }
    valence
}

/// Scales everything before the first "but" by 0.5 and everything after it by 1.5.
fn but_check(lower: &[String], sentiments: &mut [f64]) {
    let Some(bi) = lower.iter().position(|w| w == "but") else {
        return;
    };
    for (idx, s) in sentiments.iter_mut().enumerate() {
        if idx < bi {
            *s *= 0.5;
        } else if idx > bi {
            *s *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4);
    let questions = text.matches('?').count();
    let qm = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * 0.18,
        _ => 0.96,
    };
    exclamations as f64 * 0.292 + qm
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZE_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let f = 10f64.powi(places);
    (value * f).round() / f
}

fn score_valence(sentiments: &[f64], text: &str) -> SentimentScore {
    if sentiments.is_empty() {
        return SentimentScore::default();
    }

    let amp = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += amp;
    } else if sum < 0.0 {
        sum -= amp;
    }
    let compound = normalize(sum);

    let (mut pos_sum, mut neg_sum, mut neu_count) = (0.0_f64, 0.0_f64, 0usize);
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += amp;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= amp;
    }

    let total = pos_sum + neg_sum.abs() + neu_count as f64;
    SentimentScore {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to(neu_count as f64 / total, 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}

fn parse_entry(line: &str) -> Result<(String, f64), String> {
    let mut cols = line.split('\t');
    let word = cols
        .next()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .ok_or("missing token")?;
    let raw = cols
        .next()
        .ok_or_else(|| format!("missing valence for '{word}'"))?;
    let valence: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("bad valence '{raw}' for '{word}'"))?;
    Ok((word.to_lowercase(), valence))
}

/// Lexicon based polarity model.
///
/// [`Vader::default`] uses a small bundled lexicon of headline and finance words. It is a
/// curated set, not a slice of the published VADER lexicon: valences sit on the same
/// `[-4, 4]` scale, but the third column is a placeholder and is never read. For the full
/// word list load a complete lexicon file (`token<TAB>mean-valence<TAB>...` per line) with
/// [`Vader::from_path`].
#[derive(Debug, Clone)]
pub struct Vader {
    lexicon: HashMap<String, f64>,
}

impl Default for Vader {
    fn default() -> Self {
        let lexicon = BUNDLED_LEXICON
            .lines()
            .filter(|l| !l.trim().is_empty())
            .filter_map(|l| parse_entry(l).ok())
            .collect();
        Self { lexicon }
    }
}

impl Vader {
    /// Parses a tab-separated lexicon. Blank lines are skipped; extra columns are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SnapError::Lexicon`] naming the first malformed line.
    pub fn from_lexicon(text: &str) -> Result<Self, SnapError> {
        let mut lexicon = HashMap::new();
        for (n, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (word, valence) =
                parse_entry(line).map_err(|e| SnapError::Lexicon(format!("line {}: {e}", n + 1)))?;
            lexicon.insert(word, valence);
        }
        if lexicon.is_empty() {
            return Err(SnapError::Lexicon("lexicon has no entries".into()));
        }
        Ok(Self { lexicon })
    }

    /// Reads and parses a lexicon file.
    ///
    /// # Errors
    ///
    /// Returns [`SnapError::Lexicon`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SnapError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| SnapError::Lexicon(format!("{}: {e}", path.display())))?;
        Self::from_lexicon(&text)
    }

    /// Number of lexicon entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    /// Raw lexicon valence for a word, case-insensitive.
    #[must_use]
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.lexicon.get(&word.to_lowercase()).copied()
    }

    fn in_lexicon(&self, word_lower: &str) -> bool {
        self.lexicon.contains_key(word_lower)
    }

    fn valence_at(&self, words: &[&str], lower: &[String], i: usize, cap_diff: bool) -> f64 {
        let item = lower[i].as_str();
        let Some(&base) = self.lexicon.get(item) else {
            return 0.0;
        };

        let mut valence = base;
        if item == "no" && i + 1 < words.len() && self.in_lexicon(&lower[i + 1]) {
            valence = 0.0;
        }
        if (i > 0 && lower[i - 1] == "no")
            || (i > 1 && lower[i - 2] == "no")
            || (i > 2 && lower[i - 3] == "no" && matches!(lower[i - 1].as_str(), "or" | "nor"))
        {
            valence = base * N_SCALAR;
        }

        if is_upper(words[i]) && cap_diff {
            valence += if valence > 0.0 { C_INCR } else { -C_INCR };
        }

        for start_i in 0..3 {
            if i <= start_i {
                break;
            }
            let j = i - (start_i + 1);
            if self.in_lexicon(&lower[j]) {
                continue;
            }
            let mut s = scalar_inc_dec(words[j], &lower[j], valence, cap_diff);
            if s != 0.0 {
                match start_i {
                    1 => s *= 0.95,
                    2 => s *= 0.9,
                    _ => {}
                }
            }
            valence += s;
            valence = negation_check(valence, lower, start_i, i);
        }

        self.least_check(valence, lower, i)
    }

    fn least_check(&self, valence: f64, lower: &[String], i: usize) -> f64 {
        if i > 1 && !self.in_lexicon(&lower[i - 1]) && lower[i - 1] == "least" {
            if lower[i - 2] != "at" && lower[i - 2] != "very" {
                return valence * N_SCALAR;
            }
        } else if i > 0 && !self.in_lexicon(&lower[i - 1]) && lower[i - 1] == "least" {
            return valence * N_SCALAR;
        }
        valence
    }
}

impl PolarityModel for Vader {
    fn polarity(&self, text: &str) -> SentimentScore {
        let words: Vec<&str> = text.split_whitespace().map(strip_punct).collect();
        let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let cap_diff = allcap_differential(&words);

        let mut sentiments = Vec::with_capacity(words.len());
        for i in 0..words.len() {
            let kind_of = lower[i] == "kind" && lower.get(i + 1).is_some_and(|n| n == "of");
            if booster(&lower[i]).is_some() || kind_of {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.valence_at(&words, &lower, i, cap_diff));
        }

        but_check(&lower, &mut sentiments);
        score_valence(&sentiments, text)
    }
}
