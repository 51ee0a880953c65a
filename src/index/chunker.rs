//! Recursive text chunking with overlap
//!
//! Splits on paragraph boundaries first, then sentence boundaries, then raw
//! character windows, so retrieval units stay inside the embedding model's
//! effective context while breaking on the largest natural boundary available.

use unicode_segmentation::UnicodeSegmentation;

/// Text chunker with configurable window size and overlap
pub struct TextChunker {
    /// Target chunk size in characters
    chunk_size: usize,
    /// Overlap carried between consecutive chunks
    overlap: usize,
}

impl TextChunker {
    /// Create a new chunker. The window is floored at one character and the
    /// overlap clamped below it, so every split step advances.
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        Self {
            chunk_size,
            overlap: overlap.min(chunk_size - 1),
        }
    }

    /// Split text into overlapping chunks
    pub fn split(&self, text: &str) -> Vec<String> {
        let units = self.split_units(text);

        let mut chunks = Vec::new();
        let mut current = String::new();

        for unit in units {
            if !current.is_empty() && current.chars().count() + unit.chars().count() > self.chunk_size
            {
                if !current.trim().is_empty() {
                    chunks.push(current.trim().to_string());
                }
                current = self.overlap_tail(&current);
            }
            current.push_str(&unit);
        }

        if !current.trim().is_empty() {
            chunks.push(current.trim().to_string());
        }

        chunks
    }

    /// Break text into units no larger than the chunk size, preferring
    /// paragraph boundaries, then sentences, then character windows.
    fn split_units(&self, text: &str) -> Vec<String> {
        let mut units = Vec::new();

        for paragraph in text.split("\n\n") {
            if paragraph.trim().is_empty() {
                continue;
            }

            if paragraph.chars().count() <= self.chunk_size {
                units.push(format!("{}\n\n", paragraph));
                continue;
            }

            for sentence in paragraph.split_sentence_bounds() {
                if sentence.chars().count() <= self.chunk_size {
                    units.push(sentence.to_string());
                } else {
                    units.extend(self.char_windows(sentence));
                }
            }
            units.push("\n\n".to_string());
        }

        units
    }

    /// Hard-split oversized text into character windows with overlap
    fn char_windows(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let step = self.chunk_size - self.overlap;
        let mut windows = Vec::new();
        let mut start = 0;

        while start < chars.len() {
            let end = (start + self.chunk_size).min(chars.len());
            windows.push(chars[start..end].iter().collect());
            if end == chars.len() {
                break;
            }
            start += step;
        }

        windows
    }

    /// Overlap text carried from the end of the previous chunk, preferring a
    /// sentence boundary, then a word boundary.
    fn overlap_tail(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() <= self.overlap {
            return text.to_string();
        }

        let tail: String = chars[chars.len() - self.overlap..].iter().collect();

        if let Some(pos) = tail.find(". ") {
            let rest = &tail[pos + 2..];
            if !rest.trim().is_empty() {
                return rest.to_string();
            }
        }
        if let Some(pos) = tail.find(' ') {
            let rest = &tail[pos + 1..];
            if !rest.trim().is_empty() {
                return rest.to_string();
            }
        }

        tail
    }
}
