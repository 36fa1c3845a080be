//! Role-aware fuzzy matcher.
//!
//! Scoring treats the pattern as a case-insensitive subsequence of the
//! candidate and finds the best alignment with dynamic programming. The table
//! has two states per `(candidate prefix, pattern prefix)` cell:
//! - `skip`: the last candidate byte is not used by the alignment;
//! - `match`: the last candidate byte is aligned to the last pattern byte.
//!
//! Each cell packs its value with the state of the predecessor that produced
//! it, so the alignment can be walked back to extract matched ranges.
//!
//! Matches are rewarded for exact case, for landing in the last segment of
//! the candidate and for consecutive runs; starting a match in the middle of a
//! word is penalized. A final heuristic vetoes alignments made only of short,
//! disconnected fragments.
//!
//! # Example:
//! ```
//! use fuzzrank::fuzzy_matcher::matcher::Matcher;
//!
//! let mut matcher = Matcher::new("fb");
//! assert_eq!(matcher.score("fooBar"), 0.75);
//! assert_eq!(matcher.matched_ranges(), [0..1, 3..4]);
//!
//! assert_eq!(matcher.score("xyz"), 0.0);
//! ```

use std::fmt::{Debug, Display, Error, Formatter};
use std::ops::{Index, IndexMut};

use crate::fuzzy_matcher::pattern::CompiledPattern;
use crate::fuzzy_matcher::roles::{AsciiRoles, RoleClassifier, RuneRole};
use crate::fuzzy_matcher::{ByteRange, MAX_INPUT_SIZE, MAX_PATTERN_SIZE, ScoreType};

// ---------------------------------------------------------------------------
// Scoring constants
// ---------------------------------------------------------------------------

/// Value of unreachable cells.
const MIN_SCORE: i32 = -10_000;

/// Alignments ending below this value went through an unreachable cell.
const FAILURE_SCORE: i32 = MIN_SCORE / 2;

/// Bonus for extending a run of matched bytes. Also granted to matches at the
/// start of the candidate or of its last segment, so that prefix matches
/// normalize to 1.
const CONSECUTIVE_BONUS: i32 = 2;

/// Penalty for starting a new run inside a word.
const MISALIGNMENT_PENALTY: i32 = 3;

/// Penalty for matching the first pattern byte inside a word.
const MID_WORD_START_PENALTY: i32 = 4;

/// Runs shorter than this starting inside a word are "fragments".
const SHORT_RUN_LEN: usize = 3;

/// Alignments with more fragments than this are vetoed.
const MAX_FRAGMENTS: usize = 1;

// ---------------------------------------------------------------------------
// Alignment table
// ---------------------------------------------------------------------------

const SKIP: usize = 0;
const MATCH: usize = 1;

const COLUMNS: usize = MAX_PATTERN_SIZE + 1;
const ROWS: usize = MAX_INPUT_SIZE + 1;

/// Alignment value packed with the state (`SKIP` or `MATCH`) of its predecessor.
#[derive(Clone, Copy, PartialEq, Eq)]
struct Cell(i32);

impl Cell {
    const UNREACHABLE: Cell = Cell::new(MIN_SCORE, SKIP);

    const fn new(value: i32, prev: usize) -> Self {
        Cell((value << 1) | prev as i32)
    }

    #[inline]
    fn value(self) -> i32 {
        self.0 >> 1
    }

    #[inline]
    fn prev(self) -> usize {
        (self.0 & 1) as usize
    }
}

/// Flat `ROWS × COLUMNS × 2` table, indexed by `(row, column, state)`.
struct Table(Box<[Cell]>);

impl Table {
    fn new() -> Self {
        Table(vec![Cell::UNREACHABLE; ROWS * COLUMNS * 2].into_boxed_slice())
    }

    #[inline]
    fn best_state(&self, i: usize, j: usize) -> usize {
        if self[(i, j, SKIP)].value() < self[(i, j, MATCH)].value() {
            MATCH
        } else {
            SKIP
        }
    }

    #[inline]
    fn best(&self, i: usize, j: usize) -> Cell {
        self[(i, j, self.best_state(i, j))]
    }
}

impl Index<(usize, usize, usize)> for Table {
    type Output = Cell;

    #[inline]
    fn index(&self, (i, j, k): (usize, usize, usize)) -> &Cell {
        &self.0[(i * COLUMNS + j) * 2 + k]
    }
}

impl IndexMut<(usize, usize, usize)> for Table {
    #[inline]
    fn index_mut(&mut self, (i, j, k): (usize, usize, usize)) -> &mut Cell {
        &mut self.0[(i * COLUMNS + j) * 2 + k]
    }
}

/// One step of the walk from the final cell back to the origin.
struct Step {
    /// Candidate byte offset
    byte: usize,
    /// Whether the byte is aligned to a pattern byte
    matched: bool,
    /// Whether the previous byte was skipped
    after_skip: bool,
}

// ---------------------------------------------------------------------------
// Matcher
// ---------------------------------------------------------------------------

/// Fuzzy matcher scoring candidates against a single pattern.
///
/// The matcher owns fixed-size scratch buffers that every scoring call
/// overwrites, so one instance serves one scoring call at a time. Use one
/// matcher per thread (see [`RoleMatcher`](crate::fuzzy_matcher::rank::RoleMatcher)).
pub struct Matcher<C = AsciiRoles> {
    pattern: CompiledPattern,
    classifier: C,

    input: [u8; MAX_INPUT_SIZE],
    lower: [u8; MAX_INPUT_SIZE],
    roles: [RuneRole; MAX_INPUT_SIZE],
    table: Table,

    last_len: usize,
    last_matched: bool,
}

impl Matcher<AsciiRoles> {
    /// Creates a matcher for `pattern`, truncated to [`MAX_PATTERN_SIZE`] bytes.
    pub fn new(pattern: impl AsRef<[u8]>) -> Self {
        Self::with_classifier(pattern, AsciiRoles)
    }
}

impl<C: RoleClassifier> Matcher<C> {
    /// Creates a matcher classifying pattern and candidates with `classifier`.
    pub fn with_classifier(pattern: impl AsRef<[u8]>, classifier: C) -> Self {
        let pattern = CompiledPattern::new(pattern.as_ref(), &classifier);
        debug!("new matcher for pattern {:?}", pattern.to_string());
        Self {
            pattern,
            classifier,
            input: [0; MAX_INPUT_SIZE],
            lower: [0; MAX_INPUT_SIZE],
            roles: [RuneRole::None; MAX_INPUT_SIZE],
            table: Table::new(),
            last_len: 0,
            last_matched: false,
        }
    }

    /// The compiled pattern
    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    /// Score `candidate` against the pattern.
    ///
    /// Returns a score between 0 (no match) and 1 (perfect match).
    pub fn score(&mut self, candidate: impl AsRef<[u8]>) -> ScoreType {
        self.score_chunks([candidate])
    }

    /// Score the concatenation of `chunks` against the pattern, without
    /// allocating. Input beyond [`MAX_INPUT_SIZE`] bytes is ignored.
    pub fn score_chunks<I, S>(&mut self, chunks: I) -> ScoreType
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let len = self.load(chunks);
        self.last_len = len;

        if self.pattern.is_empty() {
            // Empty patterns perfectly match candidates.
            return 1.0;
        }
        self.last_matched = false;

        if !is_subsequence(&self.lower[..len], self.pattern.lower()) {
            return 0.0;
        }
        self.classifier.classify(&self.input[..len], &mut self.roles[..len]);

        let raw = self.align(len);
        if raw <= FAILURE_SCORE {
            trace!("no alignment of {:?} in {:?}", self.pattern.to_string(), self.candidate_lossy());
            return 0.0;
        }
        if self.poor_match() {
            trace!("poor match of {:?} in {:?}", self.pattern.to_string(), self.candidate_lossy());
            return 0.0;
        }
        self.last_matched = true;

        if self.pattern.len() == len {
            return 1.0;
        }
        (raw.max(0) as f32 * self.pattern.scale()).min(1.0)
    }

    /// Byte ranges of the last scored candidate matched by the pattern, in
    /// ascending order. Empty unless the last scoring call found a match.
    ///
    /// A match whose raw score is negative is reported as `0.0` by
    /// [`Matcher::score`] but keeps its ranges here, so check the score first.
    pub fn matched_ranges(&self) -> Vec<ByteRange> {
        if self.pattern.is_empty() || !self.last_matched {
            return Vec::new();
        }
        let (i, j) = (self.last_len, self.pattern.len());
        if self.table[(i, j, SKIP)].value() < FAILURE_SCORE && self.table[(i, j, MATCH)].value() < FAILURE_SCORE {
            return Vec::new();
        }

        let mut ranges: Vec<ByteRange> = Vec::new();
        for step in self.backtrack().filter(|step| step.matched) {
            match ranges.last_mut() {
                Some(range) if range.start == step.byte + 1 => range.start = step.byte,
                _ => ranges.push(step.byte..step.byte + 1),
            }
        }
        ranges.reverse();
        ranges
    }

    /// Debug view of the alignment table of the last scored candidate.
    pub fn score_table(&self) -> ScoreTable<'_, C> {
        ScoreTable { matcher: self }
    }

    fn load<I, S>(&mut self, chunks: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut len = 0;
        for chunk in chunks {
            let chunk = chunk.as_ref();
            let n = chunk.len().min(MAX_INPUT_SIZE - len);
            self.input[len..len + n].copy_from_slice(&chunk[..n]);
            len += n;
            if len == MAX_INPUT_SIZE {
                break;
            }
        }
        self.lower[..len].copy_from_slice(&self.input[..len]);
        self.lower[..len].make_ascii_lowercase();
        len
    }

    fn candidate_lossy(&self) -> String {
        String::from_utf8_lossy(&self.input[..self.last_len]).into_owned()
    }

    /// Fills the table for the candidate of length `cand_len` loaded in the
    /// buffers, and returns the raw score of the best alignment.
    fn align(&mut self, cand_len: usize) -> i32 {
        let pattern = &self.pattern;
        let candidate = &self.input[..cand_len];
        let lower = &self.lower[..cand_len];
        let roles = &self.roles[..cand_len];
        let table = &mut self.table;
        let patt_len = pattern.len();

        for j in 0..=patt_len {
            table[(0, j, SKIP)] = Cell::UNREACHABLE;
            table[(0, j, MATCH)] = Cell::UNREACHABLE;
        }
        table[(0, 0, SKIP)] = Cell::new(0, SKIP);

        let mut segments_left = 1 + roles.iter().filter(|&&r| r == RuneRole::Sep).count();
        let last_seg_start = roles.iter().rposition(|&r| r == RuneRole::Sep).map_or(0, |sep| sep + 1);

        for i in 1..=cand_len {
            let role = roles[i - 1];
            if role == RuneRole::Sep && segments_left > 1 {
                segments_left -= 1;
            }

            // Skipping the start of the first or the last segment.
            let skip_penalty = if i == 1 || i - 1 == last_seg_start { 1 } else { 0 };

            for j in 0..=patt_len {
                table[(i, j, MATCH)] = Cell::UNREACHABLE;

                let k = table.best_state(i - 1, j);
                let mut skip_score = table[(i - 1, j, k)].value();
                // Bytes after a complete alignment are free.
                if j != patt_len {
                    skip_score -= skip_penalty;
                }
                table[(i, j, SKIP)] = Cell::new(skip_score, k);

                if j == 0 || lower[i - 1] != pattern.lower()[j - 1] {
                    continue;
                }
                let p_role = pattern.roles()[j - 1];

                // A word head of the pattern may only land inside a candidate
                // word when it starts the pattern and the short prefix follows.
                let head_on_tail = role == RuneRole::Tail && p_role == RuneRole::Head;
                if head_on_tail && (j > 1 || !lower[i - 1..].starts_with(pattern.short())) {
                    continue;
                }

                let mut char_score = 0;
                if segments_left <= 1 {
                    char_score += 1;
                }
                // An all-lowercase pattern carries no word boundaries, so any
                // head of the candidate is as good as an exact case match.
                if candidate[i - 1] == pattern.bytes()[j - 1] || (role == RuneRole::Head && !pattern.is_case_sensitive())
                {
                    char_score += 1;
                }
                if head_on_tail {
                    char_score -= 1;
                }
                if j == 1 && role == RuneRole::Tail {
                    char_score -= MID_WORD_START_PENALTY;
                }

                for k in [SKIP, MATCH] {
                    let mut sc = table[(i - 1, j - 1, k)].value() + char_score;
                    if k == MATCH || i - 1 == 0 || i - 1 == last_seg_start {
                        sc += CONSECUTIVE_BONUS;
                    }
                    if k == SKIP && matches!(role, RuneRole::Tail | RuneRole::UcTail) {
                        sc -= MISALIGNMENT_PENALTY;
                    }
                    if sc > table[(i, j, MATCH)].value() {
                        table[(i, j, MATCH)] = Cell::new(sc, k);
                    }
                }
            }
        }

        table.best(cand_len, patt_len).value()
    }

    /// Walks the best alignment of the last candidate backwards, from its
    /// last byte to its first.
    fn backtrack(&self) -> impl Iterator<Item = Step> + '_ {
        let (mut i, mut j) = (self.last_len, self.pattern.len());
        let mut k = self.table.best_state(i, j);
        std::iter::from_fn(move || {
            if i == 0 {
                return None;
            }
            let matched = k == MATCH;
            k = self.table[(i, j, k)].prev();
            if matched {
                j = j.saturating_sub(1);
            }
            i -= 1;
            Some(Step {
                byte: i,
                matched,
                after_skip: k == SKIP,
            })
        })
    }

    /// Whether the alignment is only explained by several short runs starting
    /// in the middle of candidate words.
    fn poor_match(&self) -> bool {
        if self.pattern.len() < 2 {
            return false;
        }

        let mut run = 0;
        let mut fragments = 0;
        for step in self.backtrack() {
            if !step.matched {
                run = 0;
                continue;
            }
            run += 1;
            if step.after_skip && run < SHORT_RUN_LEN && self.roles[step.byte] == RuneRole::Tail {
                fragments += 1;
                if fragments > MAX_FRAGMENTS {
                    return true;
                }
            }
        }
        false
    }
}

impl<C> Display for Matcher<C> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", self.pattern)
    }
}

impl<C> Debug for Matcher<C> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.debug_struct("Matcher")
            .field("pattern", &self.pattern.to_string())
            .field("last_len", &self.last_len)
            .field("last_matched", &self.last_matched)
            .finish_non_exhaustive()
    }
}

/// Whether `pattern` is a subsequence of `candidate`.
pub(crate) fn is_subsequence(candidate: &[u8], pattern: &[u8]) -> bool {
    let mut j = 0;
    for &c in candidate {
        if j == pattern.len() {
            break;
        }
        if c == pattern[j] {
            j += 1;
        }
    }
    j == pattern.len()
}

// ---------------------------------------------------------------------------
// Debug output
// ---------------------------------------------------------------------------

/// Alignment table of the last candidate scored by a [`Matcher`].
///
/// Each candidate byte gets two lines: the `S`kip state and the `M`atch
/// state for every pattern byte, as `value(predecessor state)`. Only
/// meaningful after a scoring call that reached the alignment stage.
pub struct ScoreTable<'a, C> {
    matcher: &'a Matcher<C>,
}

fn state_char(state: usize) -> char {
    if state == SKIP { 'S' } else { 'M' }
}

impl<C> Display for ScoreTable<'_, C> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let m = self.matcher;
        let pattern = m.pattern.bytes();
        let separator = "-".repeat(16 * pattern.len());

        write!(f, "\t")?;
        for b in pattern {
            write!(f, "{}\t\t", b.escape_ascii())?;
        }
        writeln!(f)?;
        writeln!(f, "{separator}")?;

        for i in 1..=m.last_len {
            write!(f, "{}\t", m.input[i - 1].escape_ascii())?;
            for j in 1..=pattern.len() {
                let cell = m.table[(i, j, SKIP)];
                write!(f, "S{:6}({})\t", cell.value(), state_char(cell.prev()))?;
            }
            writeln!(f)?;
            write!(f, "\t")?;
            for j in 1..=pattern.len() {
                let cell = m.table[(i, j, MATCH)];
                write!(f, "M{:6}({})\t", cell.value(), state_char(cell.prev()))?;
            }
            writeln!(f)?;
            writeln!(f, "{separator}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
