// src/domain/diff/mod.rs
//! Line and word level comparison of two content snapshots.
//!
//! Lines are aligned first. Inside each run of non-matching lines the k-th
//! removed line is paired with the k-th added line as a `Modified` segment,
//! which is then compared word by word; unpaired lines stay `Deleted` or
//! `Inserted`. Comparing `(b, a)` yields the mirror image of `(a, b)`.
mod align;
mod tokenize;

use align::{Chunk, align};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeTag {
    Unchanged,
    Inserted,
    Deleted,
    Modified,
}

impl ChangeTag {
    /// The tag the same change carries when the two sides are swapped.
    pub fn mirrored(self) -> Self {
        match self {
            ChangeTag::Inserted => ChangeTag::Deleted,
            ChangeTag::Deleted => ChangeTag::Inserted,
            other => other,
        }
    }
}

/// Word-level piece of a modified line. Offsets are char offsets into the
/// old and new line; for an inserted or deleted span the offset on the other
/// side is where the change anchors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffSpan {
    pub tag: ChangeTag,
    pub text: String,
    pub old_offset: usize,
    pub new_offset: usize,
}

/// One line of the comparison, terminator included. Line numbers are
/// 1-based and absent on the side the line does not exist on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffSegment {
    pub tag: ChangeTag,
    pub old_line: Option<usize>,
    pub new_line: Option<usize>,
    pub old_text: Option<String>,
    pub new_text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spans: Vec<DiffSpan>,
}

impl DiffSegment {
    /// Text to display: the new side, or the old side for deletions.
    pub fn text(&self) -> &str {
        self.new_text
            .as_deref()
            .or(self.old_text.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub lines_added: usize,
    pub lines_removed: usize,
    pub lines_changed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextDiff {
    pub segments: Vec<DiffSegment>,
    pub stats: DiffStats,
}

impl TextDiff {
    pub fn compute(old: &str, new: &str) -> Self {
        let old_lines = tokenize::lines(old);
        let new_lines = tokenize::lines(new);
        let mut segments = Vec::with_capacity(old_lines.len().max(new_lines.len()));
        let mut stats = DiffStats::default();

        for chunk in align(&old_lines, &new_lines) {
            match chunk {
                Chunk::Equal { old, new } => segments.push(DiffSegment {
                    tag: ChangeTag::Unchanged,
                    old_line: Some(old + 1),
                    new_line: Some(new + 1),
                    old_text: Some(old_lines[old].to_owned()),
                    new_text: Some(new_lines[new].to_owned()),
                    spans: Vec::new(),
                }),
                Chunk::Gap { old, new } => {
                    let paired = old.len().min(new.len());
                    for k in 0..paired {
                        let (o, n) = (old.start + k, new.start + k);
                        segments.push(DiffSegment {
                            tag: ChangeTag::Modified,
                            old_line: Some(o + 1),
                            new_line: Some(n + 1),
                            old_text: Some(old_lines[o].to_owned()),
                            new_text: Some(new_lines[n].to_owned()),
                            spans: word_spans(old_lines[o], new_lines[n]),
                        });
                        stats.lines_changed += 1;
                    }
                    for o in old.start + paired..old.end {
                        segments.push(DiffSegment {
                            tag: ChangeTag::Deleted,
                            old_line: Some(o + 1),
                            new_line: None,
                            old_text: Some(old_lines[o].to_owned()),
                            new_text: None,
                            spans: Vec::new(),
                        });
                        stats.lines_removed += 1;
                    }
                    for n in new.start + paired..new.end {
                        segments.push(DiffSegment {
                            tag: ChangeTag::Inserted,
                            old_line: None,
                            new_line: Some(n + 1),
                            old_text: None,
                            new_text: Some(new_lines[n].to_owned()),
                            spans: Vec::new(),
                        });
                        stats.lines_added += 1;
                    }
                }
            }
        }

        Self { segments, stats }
    }

    pub fn is_identical(&self) -> bool {
        self.stats == DiffStats::default()
    }
}

fn word_spans(old: &str, new: &str) -> Vec<DiffSpan> {
    let old_words = tokenize::words(old);
    let new_words = tokenize::words(new);
    let old_offsets = char_offsets(&old_words);
    let new_offsets = char_offsets(&new_words);
    let mut spans: Vec<DiffSpan> = Vec::new();

    for chunk in align(&old_words, &new_words) {
        match chunk {
            Chunk::Equal { old, new } => push_merged(
                &mut spans,
                DiffSpan {
                    tag: ChangeTag::Unchanged,
                    text: old_words[old].to_owned(),
                    old_offset: old_offsets[old],
                    new_offset: new_offsets[new],
                },
            ),
            Chunk::Gap { old, new } => {
                let old_offset = old_offsets[old.start];
                let new_offset = new_offsets[new.start];
                let deleted = old_words[old].concat();
                let inserted = new_words[new].concat();
                let mut pending = Vec::with_capacity(2);
                if !deleted.is_empty() {
                    pending.push(DiffSpan {
                        tag: ChangeTag::Deleted,
                        text: deleted,
                        old_offset,
                        new_offset,
                    });
                }
                if !inserted.is_empty() {
                    pending.push(DiffSpan {
                        tag: ChangeTag::Inserted,
                        text: inserted,
                        old_offset,
                        new_offset,
                    });
                }
                // Side-independent order keeps swapped comparisons mirrored.
                pending.sort_by(|a, b| a.text.cmp(&b.text));
                spans.extend(pending);
            }
        }
    }
    spans
}

fn push_merged(spans: &mut Vec<DiffSpan>, span: DiffSpan) {
    if let Some(last) = spans.last_mut() {
        if last.tag == ChangeTag::Unchanged && span.tag == ChangeTag::Unchanged {
            last.text.push_str(&span.text);
            return;
        }
    }
    spans.push(span);
}

/// Char offset of each token, plus the total length as a final entry.
fn char_offsets(tokens: &[&str]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(tokens.len() + 1);
    let mut position = 0;
    offsets.push(position);
    for token in tokens {
        position += token.chars().count();
        offsets.push(position);
    }
    offsets
}
