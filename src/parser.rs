//! The quick-search reference parser.
//!
//! Converts one free-text line ("Ge 1 2", "Jn 3:16-17", "1Co 13:1-15:58")
//! into a validated [`Reference`]. This parser is purely syntactic apart from
//! the book lookup. It does not know real chapter or verse counts, so a
//! whole-chapter query carries the [`Reference::CHAPTER_END`] sentinel for
//! the caller to clamp.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::canon::BookDirectory;
use crate::errors::ParseError;
use crate::reference::Reference;

// ============================================================================
// GRAMMAR
// ============================================================================

/// The shape of reference a rule produces when it matches.
#[derive(Debug, Clone, Copy)]
enum Shape {
    /// `BOOK CH:VS-CH:VS`, e.g. `1Co 13:1-15:58`
    ChapterRange,
    /// `BOOK CH:VS[-VS]`, e.g. `Jn 3:16-17` or `Mt 5:3`
    ColonVerse,
    /// `BOOK CH VS[-VS]`, e.g. `Ge 1 2` or `Ge 1 2-4`
    SpacedVerse,
    /// `BOOK CH`, e.g. `Ps 23`, meaning the whole chapter
    WholeChapter,
}

/// Grammar rules in priority order, most specific first; the first rule whose
/// pattern matches the whole trimmed input wins.
///
/// Ordering invariant: `ChapterRange` must precede `ColonVerse`, whose shape
/// is a prefix of it; otherwise `1Co 13:1-15:58` would mis-parse as a
/// truncated verse range. The ordering is a tested contract, not an accident.
static GRAMMAR: Lazy<[(Shape, Regex); 4]> = Lazy::new(|| {
    [
        (
            Shape::ChapterRange,
            Regex::new(r"^([A-Za-z0-9 ]+?)\s+(\d+):(\d+)-(\d+):(\d+)$").unwrap(),
        ),
        (
            Shape::ColonVerse,
            Regex::new(r"^([A-Za-z0-9 ]+?)\s+(\d+):(\d+)(?:-(\d+))?$").unwrap(),
        ),
        (
            Shape::SpacedVerse,
            Regex::new(r"^([A-Za-z0-9 ]+?)\s+(\d+)\s+(\d+)(?:-(\d+))?$").unwrap(),
        ),
        (
            Shape::WholeChapter,
            Regex::new(r"^([A-Za-z0-9 ]+?)\s+(\d+)$").unwrap(),
        ),
    ]
});

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parses a quick-search string against the standard book directory.
///
/// # Examples
///
/// ```rust
/// use pericope::parser::parse;
/// let reference = parse("1Co 13:1-15:58").unwrap();
/// assert_eq!(reference.book_name, "1 Corinthians");
/// assert_eq!((reference.from_chapter, reference.to_chapter), (13, 15));
/// ```
pub fn parse(input: &str) -> Result<Reference, ParseError> {
    parse_with(BookDirectory::standard(), input)
}

/// Parses a quick-search string, resolving the book portion in `directory`.
pub fn parse_with(directory: &BookDirectory, input: &str) -> Result<Reference, ParseError> {
    let query = input.trim();
    if query.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    for (shape, pattern) in GRAMMAR.iter() {
        if let Some(captures) = pattern.captures(query) {
            return build_reference(directory, query, *shape, &captures);
        }
    }

    Err(ParseError::UnrecognizedFormat {
        src: query.to_string(),
        span: (0, query.len()).into(),
        help: Some(
            "supported forms: `Ge 1 2`, `Mt 5:3`, `Jn 3:16-17`, `1Co 13:1-15:58`, `Ps 23`".into(),
        ),
    })
}

// ============================================================================
// REFERENCE CONSTRUCTION
// ============================================================================

fn build_reference(
    directory: &BookDirectory,
    query: &str,
    shape: Shape,
    captures: &Captures<'_>,
) -> Result<Reference, ParseError> {
    let book = captures.get(1).unwrap(); // every rule has the book group
    let token = book.as_str().trim();

    let book_index = directory.index_of(token).ok_or_else(|| ParseError::UnknownBook {
        token: token.to_string(),
        src: query.to_string(),
        span: (book.start(), token.len()).into(),
        help: Some("try an abbreviation like `Ge`, `Mt`, or `Jn`".into()),
    })?;
    let book_name = directory.name_at(book_index).unwrap().to_string(); // index came from the directory

    let reference = match shape {
        Shape::ChapterRange => {
            let from_chapter = number(query, captures.get(2).unwrap())?;
            let from_verse = number(query, captures.get(3).unwrap())?;
            let to_chapter = number(query, captures.get(4).unwrap())?;
            let to_verse = number(query, captures.get(5).unwrap())?;
            Reference {
                book_index,
                book_name,
                from_chapter,
                from_verse,
                to_chapter,
                to_verse,
            }
        }
        Shape::ColonVerse | Shape::SpacedVerse => {
            let from_chapter = number(query, captures.get(2).unwrap())?;
            let from_verse = number(query, captures.get(3).unwrap())?;
            let to_verse = match captures.get(4) {
                Some(end) => number(query, end)?,
                None => from_verse,
            };
            Reference {
                book_index,
                book_name,
                from_chapter,
                from_verse,
                to_chapter: from_chapter,
                to_verse,
            }
        }
        Shape::WholeChapter => {
            let chapter = number(query, captures.get(2).unwrap())?;
            Reference {
                book_index,
                book_name,
                from_chapter: chapter,
                from_verse: 1,
                to_chapter: chapter,
                to_verse: Reference::CHAPTER_END,
            }
        }
    };

    check_ordered(query, &reference)?;
    Ok(reference)
}

/// Parses one chapter or verse token. Chapters and verses are 1-based, so
/// zero is rejected along with anything that does not fit `u32`.
fn number(query: &str, token: regex::Match<'_>) -> Result<u32, ParseError> {
    match token.as_str().parse::<u32>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(ParseError::NumberOutOfRange {
            token: token.as_str().to_string(),
            src: query.to_string(),
            span: (token.start(), token.as_str().len()).into(),
            help: Some("chapter and verse numbers are 1-based and must fit in 32 bits".into()),
        }),
    }
}

/// The grammar alone cannot rule out backwards ranges; the data model does.
fn check_ordered(query: &str, reference: &Reference) -> Result<(), ParseError> {
    let backwards = reference.to_chapter < reference.from_chapter
        || (reference.to_chapter == reference.from_chapter
            && reference.to_verse < reference.from_verse);
    if backwards {
        return Err(ParseError::UnrecognizedFormat {
            src: query.to_string(),
            span: (0, query.len()).into(),
            help: Some(format!(
                "the range runs backwards: {}:{} comes before {}:{}",
                reference.to_chapter,
                reference.to_verse,
                reference.from_chapter,
                reference.from_verse
            )),
        });
    }
    Ok(())
}
