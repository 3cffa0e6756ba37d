//! Bit-parallel approximate matching automaton
//!
//! Tracks per-pattern-offset match state with three chunked bit vectors
//! (VP, HP, HN) updated once per text character, in the style of Myers'
//! bit-vector edit-distance algorithm. Each step costs `ceil(m/64)` word
//! operations, so scanning a text of length `n` is O(n * ceil(m/64))
//! without ever materializing a DP matrix.
//!
//! Every position of the text is given a quality score blending state
//! coverage, contiguity, how early in the text the position sits, and
//! literal substring containment; the scan keeps the first position where
//! the score peaks and derives the match spans from the state there.

use super::bitvec::BitVec;
use super::charmask;
use smallvec::SmallVec;

/// Outcome of scanning one candidate text with one pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    /// Best per-position quality seen during the scan, in [0, 1].
    pub score: f64,
    /// Text-offset spans derived from the state at the best position,
    /// one per contiguous run of live pattern offsets, in ascending
    /// pattern-offset order. Offsets are signed: a live pattern offset
    /// larger than the scan position maps below the start of the text.
    pub spans: Vec<(isize, isize)>,
}

impl ScanOutcome {
    fn none() -> Self {
        Self {
            score: 0.0,
            spans: Vec::new(),
        }
    }
}

/// Scan `text` with `pattern`, both already normalized.
///
/// An empty pattern scores 0 with no spans and performs no comparison.
/// A text shorter than the pattern needs no special path: the loop just
/// runs out of characters.
#[must_use]
pub fn scan(pattern: &str, text: &str) -> ScanOutcome {
    let pattern_chars: SmallVec<[char; 64]> = pattern.chars().collect();
    let text_chars: SmallVec<[char; 64]> = text.chars().collect();
    let m = pattern_chars.len();
    let n = text_chars.len();

    if m == 0 {
        return ScanOutcome::none();
    }

    let mask = charmask::build_mask(&pattern_chars);
    let zero = BitVec::new();
    // Constant for the whole scan; the per-position formula reads it as a
    // bonus term.
    let contains_pattern = text.contains(pattern);

    let mut vp = BitVec::ones(m);
    let mut hp = BitVec::new();
    let mut best = ScanOutcome::none();

    for (j, ch) in text_chars.iter().enumerate() {
        let eq = mask.get(ch).unwrap_or(&zero);

        let x = eq.or(&hp);
        let sum = vp.add(&x.and(&vp));
        let d0 = sum.xor(&vp).or(&x);

        let hn = vp.and(&d0);
        let hp_next = vp.or(&d0.or(&hn).not());

        hp = hp_next.shift_left().set_lsb();
        let hn = hn.shift_left();

        vp = hp.or(&d0.or(&hn).not()).mask_to(m);

        let score = match_quality(&vp, m, j, n, contains_pattern);
        if score > best.score {
            best.score = score;
            best.spans = match_spans(&vp, m, j);
        }
    }

    best
}

/// Quality of the state `vp` after consuming text position `index`.
///
/// Blends four independently weighted signals: the fraction of pattern
/// offsets still live, whether those offsets form one unbroken run the
/// full width of the pattern, how early in the text the position sits
/// (only once more than half the pattern is live), and literal substring
/// containment. The terms are summed in this exact order so that a full
/// match lands on 1.0 without a rounding residue.
fn match_quality(vp: &BitVec, m: usize, index: usize, text_len: usize, contains_pattern: bool) -> f64 {
    let match_ratio = vp.count_ones() as f64 / m as f64;

    let alignment = if is_contiguous(vp, m) { 1.0 } else { 0.2 };
    let position_bonus = if match_ratio > 0.5 {
        (text_len - index) as f64 / text_len as f64
    } else {
        0.0
    };
    let substring_bonus = if contains_pattern { 1.0 } else { 0.0 };

    (match_ratio * 0.6 + alignment * 0.3 + position_bonus * 0.05 + substring_bonus * 0.05)
        .min(1.0)
}

/// True when the set bits of `vp` below position `m` form a single
/// unbroken run covering exactly `m` offsets.
fn is_contiguous(vp: &BitVec, m: usize) -> bool {
    let mut first = None;
    let mut last = 0;
    for i in 0..m {
        if vp.bit(i) {
            if first.is_none() {
                first = Some(i);
            }
            last = i;
        }
    }
    match first {
        Some(first) => last - first + 1 == m,
        None => false,
    }
}

/// Collapse the live pattern offsets of `vp` into text-offset spans.
///
/// A set bit at pattern offset `i` corresponds to text offset
/// `end_index - i`; consecutive offsets merge into one span, gaps start
/// a new one. The subtraction is deliberately signed and unclamped.
fn match_spans(vp: &BitVec, m: usize, end_index: usize) -> Vec<(isize, isize)> {
    let end_index = end_index as isize;
    let mut spans = Vec::new();
    let mut run: Option<(isize, isize)> = None;

    for i in 0..m {
        if vp.bit(i) {
            let offset = end_index - i as isize;
            run = match run {
                Some((start, _)) => Some((start, offset)),
                None => Some((offset, offset)),
            };
        } else if let Some(span) = run.take() {
            spans.push(span);
        }
    }
    if let Some(span) = run {
        spans.push(span);
    }
    spans
}
