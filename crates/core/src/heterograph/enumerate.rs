//! Walk a segmentation map to list every word sequence covering it.

use std::collections::{HashMap, HashSet};

use crate::error::{HeterographError, Result, Stage};

use super::segment::SegmentationMap;

#[derive(Debug, Clone, Copy)]
struct Frame {
    offset: usize,
    span: usize,
    word: usize,
}

/// Lazy, duplicate-free iterator over heterograph phrases.
///
/// Explores every span length at every offset (depth-first, shorter spans
/// first) but skips spans ending at offsets that cannot reach the end, so
/// each descent yields at least one phrase. Segmentations that render an
/// already-yielded string are still walked, so when many of them coincide
/// prefer [`enumerate_heterographs`], which shares work between them.
pub struct Heterographs<'m, 'a> {
    map: &'m SegmentationMap<'a>,
    completable: Vec<bool>,
    stack: Vec<Frame>,
    /// Word chosen in each frame above the first
    path: Vec<&'a str>,
    seen: HashSet<String>,
    /// Pending empty continuation when starting at the end
    at_end: bool,
}

impl<'m, 'a> Heterographs<'m, 'a> {
    pub fn new(map: &'m SegmentationMap<'a>) -> Self {
        Self::starting_at(map, 0)
    }

    /// Phrases covering `position..map.len()`. At `map.len()` itself this
    /// yields a single empty phrase.
    pub fn starting_at(map: &'m SegmentationMap<'a>, position: usize) -> Self {
        let completable = map.completable();
        let at_end = position == map.len();
        let stack = if !at_end && completable.get(position).copied().unwrap_or(false) {
            vec![Frame {
                offset: position,
                span: 0,
                word: 0,
            }]
        } else {
            Vec::new()
        };
        Heterographs {
            map,
            completable,
            stack,
            path: Vec::new(),
            seen: HashSet::new(),
            at_end,
        }
    }

    fn render(&self, last: &str) -> String {
        let mut phrase = String::new();
        for word in &self.path {
            phrase.push_str(word);
            phrase.push(' ');
        }
        phrase.push_str(last);
        phrase
    }
}

impl<'m, 'a> Iterator for Heterographs<'m, 'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.at_end {
            self.at_end = false;
            return Some(String::new());
        }

        let map = self.map;
        loop {
            let frame = self.stack.last_mut()?;
            let spans = map.spans_at(frame.offset);

            let Some(m) = spans.get(frame.span).copied() else {
                self.stack.pop();
                self.path.pop();
                continue;
            };
            let end = frame.offset + m.len;
            if !self.completable[end] || frame.word >= m.words.len() {
                frame.span += 1;
                frame.word = 0;
                continue;
            }

            let word = m.words[frame.word].as_str();
            frame.word += 1;

            if end == map.len() {
                let phrase = self.render(word);
                if self.seen.insert(phrase.clone()) {
                    return Some(phrase);
                }
            } else {
                self.path.push(word);
                self.stack.push(Frame {
                    offset: end,
                    span: 0,
                    word: 0,
                });
            }
        }
    }
}

/// Collect every heterograph of the mapped sequence, in the order
/// [`Heterographs`] yields them.
///
/// Builds the distinct suffix phrases of each offset once, from the end
/// backwards, so segmentations that render the same string are not walked
/// again. Fails with `CapacityExceeded` as soon as any offset has more than
/// `limit` distinct suffixes: every reachable offset's suffixes extend into
/// distinct full phrases, so the whole result would exceed `limit` too.
/// An empty list is a normal result.
pub fn enumerate_heterographs(map: &SegmentationMap<'_>, limit: usize) -> Result<Vec<String>> {
    let len = map.len();
    let completable = map.completable();
    if len == 0 || !completable[0] {
        return Ok(Vec::new());
    }

    let mut suffixes: HashMap<usize, Vec<String>> = HashMap::new();
    let offsets: Vec<usize> = map.offsets().filter(|&o| completable[o]).collect();
    for &offset in offsets.iter().rev() {
        let mut phrases = Vec::new();
        let mut seen = HashSet::new();
        for m in map.spans_at(offset) {
            let end = offset + m.len;
            if !completable[end] {
                continue;
            }
            for word in m.words {
                let rendered: Vec<String> = if end == len {
                    vec![word.clone()]
                } else {
                    suffixes
                        .get(&end)
                        .map(|rest| rest.iter().map(|s| format!("{} {}", word, s)).collect())
                        .unwrap_or_default()
                };
                for phrase in rendered {
                    if seen.insert(phrase.clone()) {
                        phrases.push(phrase);
                        if phrases.len() > limit {
                            return Err(HeterographError::CapacityExceeded {
                                stage: Stage::Heterographs,
                                limit,
                                reached: phrases.len(),
                            });
                        }
                    }
                }
            }
        }
        suffixes.insert(offset, phrases);
    }

    Ok(suffixes.remove(&0).unwrap_or_default())
}
