use std::hash::{Hash, Hasher};
use std::sync::Arc;

use anyhow::{ensure, Result};

use crate::Configuration;

/// An upper-case word, one letter nudged per move (wrapping around the alphabet).
#[derive(Debug, Clone, Eq)]
pub struct StringsConfig {
    current: Box<[u8]>,
    target: Arc<[u8]>,
}

// Every config of one puzzle shares the target.
impl PartialEq for StringsConfig {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}
impl Hash for StringsConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.current.hash(state);
    }
}

fn check_word(word: &str) -> Result<()> {
    ensure!(!word.is_empty(), "Empty string");
    ensure!(
        word.bytes().all(|b| b.is_ascii_uppercase()),
        "Invalid string {word:?}, expecting letters A-Z",
    );
    Ok(())
}

impl StringsConfig {
    pub fn new(start: &str, target: &str) -> Result<Self> {
        check_word(start)?;
        check_word(target)?;
        ensure!(
            start.len() == target.len(),
            "Length mismatch: {start:?} has {}, {target:?} has {}",
            start.len(),
            target.len(),
        );
        Ok(Self {
            current: start.as_bytes().into(),
            target: target.as_bytes().into(),
        })
    }

    pub fn current(&self) -> &str {
        // Only ever holds A-Z.
        std::str::from_utf8(&self.current).unwrap_or_default()
    }

    pub fn target(&self) -> &str {
        std::str::from_utf8(&self.target).unwrap_or_default()
    }

    fn with_letter(&self, idx: usize, letter: u8) -> Self {
        let mut current = self.current.clone();
        current[idx] = letter;
        Self {
            current,
            target: self.target.clone(),
        }
    }
}

fn prev_letter(b: u8) -> u8 {
    if b == b'A' {
        b'Z'
    } else {
        b - 1
    }
}

fn next_letter(b: u8) -> u8 {
    if b == b'Z' {
        b'A'
    } else {
        b + 1
    }
}

impl Configuration for StringsConfig {
    fn is_solution(&self) -> bool {
        *self.current == *self.target
    }

    fn neighbors(&self) -> Vec<Self> {
        let mut neighbors = Vec::with_capacity(self.current.len() * 2);
        for (idx, &b) in self.current.iter().enumerate() {
            for letter in [prev_letter(b), next_letter(b)] {
                let next = self.with_letter(idx, letter);
                if !neighbors.contains(&next) {
                    neighbors.push(next);
                }
            }
        }
        neighbors
    }
}
