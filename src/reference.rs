//! Structured Bible references.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A resolved reference: one book plus an inclusive chapter and verse range.
///
/// Produced by [`crate::parser::parse`]. Immutable and self-contained: it
/// holds no handle back to the directory it was resolved against, so it can
/// be passed around and serialized freely.
///
/// # Examples
///
/// ```rust
/// use pericope::parser::parse;
/// let reference = parse("Jn 3:16-17").unwrap();
/// assert_eq!(reference.book_name, "John");
/// assert_eq!(reference.from_verse, 16);
/// assert_eq!(reference.to_string(), "John 3:16-17");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Canon index of the book, Genesis = 0 through Revelation = 65.
    pub book_index: usize,
    /// Canonical full book name, e.g. "1 Corinthians".
    pub book_name: String,
    /// First chapter of the range, 1-based.
    pub from_chapter: u32,
    /// First verse of the range, 1-based.
    pub from_verse: u32,
    /// Last chapter of the range, never before `from_chapter`.
    pub to_chapter: u32,
    /// Last verse of the range, or [`Reference::CHAPTER_END`] for a whole
    /// chapter.
    pub to_verse: u32,
}

impl Reference {
    /// Sentinel verse meaning "through the last verse of the chapter".
    ///
    /// The parser does not know real chapter lengths; a caller holding the
    /// actual Bible text must clamp this to the chapter's last verse.
    pub const CHAPTER_END: u32 = 999;

    /// True when the range is exactly one verse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pericope::parser::parse;
    /// assert!(parse("Mt 5:3").unwrap().is_single_verse());
    /// assert!(!parse("Jn 3:16-17").unwrap().is_single_verse());
    /// ```
    pub fn is_single_verse(&self) -> bool {
        self.from_chapter == self.to_chapter && self.from_verse == self.to_verse
    }

    /// True when the range covers a whole chapter via the sentinel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pericope::parser::parse;
    /// assert!(parse("Ps 23").unwrap().is_whole_chapter());
    /// assert!(!parse("Ps 23:1").unwrap().is_whole_chapter());
    /// ```
    pub fn is_whole_chapter(&self) -> bool {
        self.from_verse == 1 && self.to_verse == Self::CHAPTER_END
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole_chapter() {
            write!(f, "{} {}", self.book_name, self.from_chapter)
        } else if self.is_single_verse() {
            write!(f, "{} {}:{}", self.book_name, self.from_chapter, self.from_verse)
        } else if self.from_chapter == self.to_chapter {
            write!(
                f,
                "{} {}:{}-{}",
                self.book_name, self.from_chapter, self.from_verse, self.to_verse
            )
        } else {
            write!(
                f,
                "{} {}:{}-{}:{}",
                self.book_name, self.from_chapter, self.from_verse, self.to_chapter, self.to_verse
            )
        }
    }
}
