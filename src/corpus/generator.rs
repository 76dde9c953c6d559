//! Synthetic misspellings of exercise names.
//!
//! Used to drive the property tests and benchmarks with queries that look
//! like what people actually type into a search box.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// One keyboard slip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// A letter dropped: "press" → "pess"
    Deletion,
    /// A stray letter: "press" → "presss"
    Insertion,
    /// A wrong letter: "press" → "prwss"
    Substitution,
    /// Two neighbours swapped: "press" → "perss". Costs two under plain
    /// Levenshtein distance.
    Transposition,
}

impl Edit {
    /// Every edit kind.
    pub const ALL: [Edit; 4] = [
        Edit::Deletion,
        Edit::Insertion,
        Edit::Substitution,
        Edit::Transposition,
    ];

    /// Upper bound on the edit distance this slip adds.
    pub fn cost(self) -> usize {
        match self {
            Edit::Transposition => 2,
            _ => 1,
        }
    }
}

/// Seeded generator of misspelled exercise names.
///
/// # Example
///
/// ```rust
/// use fitlex::corpus::TypoGenerator;
/// use fitlex::distance::folded_distance;
///
/// let mut typos = TypoGenerator::new(42);
/// let typo = typos.misspell("Bench Press", 2);
/// assert!(folded_distance(&typo, "Bench Press") <= 4);
/// ```
pub struct TypoGenerator {
    rng: StdRng,
    alphabet: Vec<char>,
    edits: Vec<Edit>,
}

impl TypoGenerator {
    /// Create a generator using every edit kind.
    pub fn new(seed: u64) -> Self {
        Self::with_edits(seed, &Edit::ALL)
    }

    /// Create a generator restricted to the given edit kinds. Unit-cost
    /// kinds only make the distance of a result easy to bound.
    pub fn with_edits(seed: u64, edits: &[Edit]) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            alphabet: "abcdefghijklmnopqrstuvwxyz".chars().collect(),
            edits: if edits.is_empty() {
                Edit::ALL.to_vec()
            } else {
                edits.to_vec()
            },
        }
    }

    /// Apply `slips` random edits to `name`.
    ///
    /// The result is within `slips * 2` of `name`, or `slips` when
    /// transpositions are excluded.
    pub fn misspell(&mut self, name: &str, slips: usize) -> String {
        let mut chars: Vec<char> = name.chars().collect();
        for _ in 0..slips {
            let edit = self.edits.choose(&mut self.rng).copied().unwrap_or(Edit::Deletion);
            self.apply(&mut chars, edit);
        }
        chars.into_iter().collect()
    }

    /// Draw `count` names from `corpus` and misspell each.
    ///
    /// Pairs are `(typo, original)`.
    pub fn sample<'a, S: AsRef<str>>(
        &mut self,
        corpus: &'a [S],
        count: usize,
        slips: usize,
    ) -> Vec<(String, &'a str)> {
        let mut pairs = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(name) = corpus.choose(&mut self.rng) else {
                break;
            };
            let name = name.as_ref();
            pairs.push((self.misspell(name, slips), name));
        }
        pairs
    }

    /// Every string one unit edit away from `name`, lower-case letters only
    /// for insertions and substitutions.
    ///
    /// May contain duplicates (inserting a letter next to the same letter).
    pub fn single_edits(&self, name: &str) -> Vec<String> {
        let chars: Vec<char> = name.chars().collect();
        let mut edits = Vec::with_capacity(chars.len() * (2 * self.alphabet.len() + 1));

        for i in 0..chars.len() {
            let mut deleted = chars.clone();
            deleted.remove(i);
            edits.push(deleted.into_iter().collect());
        }

        for i in 0..=chars.len() {
            for &c in &self.alphabet {
                let mut inserted = chars.clone();
                inserted.insert(i, c);
                edits.push(inserted.into_iter().collect());
            }
        }

        for i in 0..chars.len() {
            for &c in self.alphabet.iter().filter(|&&c| c != chars[i]) {
                let mut substituted = chars.clone();
                substituted[i] = c;
                edits.push(substituted.into_iter().collect());
            }
        }

        edits
    }

    /// A random prefix of `name`, the way a live query looks mid-typing.
    pub fn partial(&mut self, name: &str) -> String {
        let len = name.chars().count();
        if len == 0 {
            return String::new();
        }
        let keep = self.rng.gen_range(1..=len);
        name.chars().take(keep).collect()
    }

    fn random_letter(&mut self) -> char {
        self.alphabet[self.rng.gen_range(0..self.alphabet.len())]
    }

    fn apply(&mut self, chars: &mut Vec<char>, edit: Edit) {
        if chars.is_empty() {
            chars.push(self.random_letter());
            return;
        }

        match edit {
            Edit::Deletion => {
                let i = self.rng.gen_range(0..chars.len());
                chars.remove(i);
            }
            Edit::Insertion => {
                let i = self.rng.gen_range(0..=chars.len());
                let c = self.random_letter();
                chars.insert(i, c);
            }
            Edit::Substitution => {
                let i = self.rng.gen_range(0..chars.len());
                chars[i] = self.random_letter();
            }
            Edit::Transposition if chars.len() >= 2 => {
                let i = self.rng.gen_range(0..chars.len() - 1);
                chars.swap(i, i + 1);
            }
            Edit::Transposition => {
                let c = self.random_letter();
                chars.push(c);
            }
        }
    }
}
