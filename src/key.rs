use serde::{Deserialize, Serialize};
use std::fmt;

pub const DELIMITER: char = ':';

/// One non-empty part of a key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub index: usize,
    pub identity: String,
}

impl Segment {
    fn new(key: &str, index: usize, text: &str) -> Self {
        Self {
            text: text.to_string(),
            index,
            identity: segment_identity(key, index),
        }
    }
}

/// Stable identity of the segment at `index` (position within the trail)
/// of `key`. Distinct for every position of a given key.
pub fn segment_identity(key: &str, index: usize) -> String {
    format!("key-value-{}-{}", key, index)
}

/// The ordered, non-empty segments of a key together with the raw key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trail {
    key: String,
    segments: Vec<Segment>,
}

impl Trail {
    pub fn parse(key: &str) -> Self {
        let segments = key
            .split(DELIMITER)
            .filter(|part| !part.is_empty())
            .enumerate()
            .map(|(index, part)| Segment::new(key, index, part))
            .collect();

        Self {
            key: key.to_string(),
            segments,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn separator_count(&self) -> usize {
        self.len().saturating_sub(1)
    }
}

impl fmt::Display for Trail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" > ")?;
            }
            f.write_str(&segment.text)?;
        }
        Ok(())
    }
}
