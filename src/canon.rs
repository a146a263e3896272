//! The canonical book directory.
//!
//! A static, immutable table mapping case-insensitive book names and common
//! abbreviations to their canon index (Genesis = 0 through Revelation = 65,
//! standard 66-book Protestant order).
//!
//! Directory invariant: the directory is a single source of truth. It is
//! built once via [`BookDirectory::standard`] and passed by shared read-only
//! reference to all parsing code; there is no mutation API. Lookup misses are
//! `None`, never errors.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Number of books in the standard Protestant canon.
pub const BOOK_COUNT: usize = 66;

/// Canonical books in canon order, each with its curated abbreviation list.
///
/// The full name is always accepted as well; it is inserted as an alias of
/// itself when the directory is built. Every abbreviation resolves to exactly
/// one book (verified by test, not checked at runtime): `Ez` belongs to
/// Ezekiel rather than Ezra, `Nh` to Nahum rather than Nehemiah, and `Hb` to
/// Hebrews rather than Habakkuk.
const BOOKS: [(&str, &[&str]); BOOK_COUNT] = [
    ("Genesis", &["Ge", "Gen", "Gn"]),
    ("Exodus", &["Ex", "Exo", "Exod"]),
    ("Leviticus", &["Le", "Lev", "Lv"]),
    ("Numbers", &["Nu", "Num", "Nm", "Nb"]),
    ("Deuteronomy", &["De", "Deut", "Dt"]),
    ("Joshua", &["Jos", "Josh", "Jsh"]),
    ("Judges", &["Jdg", "Judg", "Jg"]),
    ("Ruth", &["Ru", "Rut", "Rth"]),
    ("1 Samuel", &["1Sa", "1Sam", "1S", "1 Sa", "1 Sam"]),
    ("2 Samuel", &["2Sa", "2Sam", "2S", "2 Sa", "2 Sam"]),
    ("1 Kings", &["1Ki", "1Kgs", "1K", "1 Ki", "1 Kgs"]),
    ("2 Kings", &["2Ki", "2Kgs", "2K", "2 Ki", "2 Kgs"]),
    ("1 Chronicles", &["1Ch", "1Chr", "1 Ch", "1 Chr"]),
    ("2 Chronicles", &["2Ch", "2Chr", "2 Ch", "2 Chr"]),
    ("Ezra", &["Ezr"]),
    ("Nehemiah", &["Ne", "Neh"]),
    ("Esther", &["Es", "Est", "Eth"]),
    ("Job", &["Jb"]),
    ("Psalms", &["Ps", "Psa", "Psalm"]),
    ("Proverbs", &["Pr", "Pro", "Prov"]),
    ("Ecclesiastes", &["Ec", "Ecc", "Eccl"]),
    ("Song of Songs", &["So", "SoS", "Song", "SS"]),
    ("Isaiah", &["Is", "Isa", "Ish"]),
    ("Jeremiah", &["Je", "Jer", "Jr"]),
    ("Lamentations", &["La", "Lam", "Lm"]),
    ("Ezekiel", &["Eze", "Ezk", "Ez"]),
    ("Daniel", &["Da", "Dan", "Dn"]),
    ("Hosea", &["Ho", "Hos", "Hs"]),
    ("Joel", &["Joe", "Jl"]),
    ("Amos", &["Am", "Amo"]),
    ("Obadiah", &["Ob", "Oba", "Abd"]),
    ("Jonah", &["Jon", "Jnh"]),
    ("Micah", &["Mic", "Mi"]),
    ("Nahum", &["Na", "Nah", "Nh"]),
    ("Habakkuk", &["Hab"]),
    ("Zephaniah", &["Zep", "Zph"]),
    ("Haggai", &["Hag", "Hg"]),
    ("Zechariah", &["Zec", "Zch", "Zc"]),
    ("Malachi", &["Mal", "Ml"]),
    ("Matthew", &["Mt", "Mat", "Matt"]),
    ("Mark", &["Mk", "Mar", "Mrk"]),
    ("Luke", &["Lk", "Luk", "Lu"]),
    ("John", &["Jn", "Joh", "Jo"]),
    ("Acts", &["Ac", "Act"]),
    ("Romans", &["Ro", "Rom", "Rm"]),
    ("1 Corinthians", &["1Co", "1Cor", "1C", "1 Co", "1 Cor"]),
    ("2 Corinthians", &["2Co", "2Cor", "2C", "2 Co", "2 Cor"]),
    ("Galatians", &["Ga", "Gal", "Gl"]),
    ("Ephesians", &["Ep", "Eph", "Ephes"]),
    ("Philippians", &["Php", "Phil", "Phi"]),
    ("Colossians", &["Col", "Cl"]),
    ("1 Thessalonians", &["1Th", "1Thes", "1T", "1 Th", "1 Thes"]),
    ("2 Thessalonians", &["2Th", "2Thes", "2T", "2 Th", "2 Thes"]),
    ("1 Timothy", &["1Ti", "1Tim", "1Tm", "1 Ti", "1 Tim"]),
    ("2 Timothy", &["2Ti", "2Tim", "2Tm", "2 Ti", "2 Tim"]),
    ("Titus", &["Tit", "Ti"]),
    ("Philemon", &["Phm", "Phlm", "Pm"]),
    ("Hebrews", &["He", "Heb", "Hb"]),
    ("James", &["Ja", "Jam", "Jas"]),
    ("1 Peter", &["1Pe", "1Pet", "1P", "1 Pe", "1 Pet"]),
    ("2 Peter", &["2Pe", "2Pet", "2P", "2 Pe", "2 Pet"]),
    ("1 John", &["1Jn", "1Jo", "1J", "1 Jn", "1 Jo"]),
    ("2 John", &["2Jn", "2Jo", "2J", "2 Jn", "2 Jo"]),
    ("3 John", &["3Jn", "3Jo", "3J", "3 Jn", "3 Jo"]),
    ("Jude", &["Jud", "Jd"]),
    ("Revelation", &["Re", "Rev", "Rv"]),
];

static STANDARD: Lazy<BookDirectory> = Lazy::new(BookDirectory::new);

/// Case-insensitive book name and abbreviation lookup.
///
/// # Examples
///
/// ```rust
/// use pericope::canon::BookDirectory;
/// let directory = BookDirectory::standard();
/// assert_eq!(directory.index_of("Ge"), Some(0));
/// assert_eq!(directory.full_name_of(" jn "), Some("John"));
/// assert_eq!(directory.index_of("XYZ"), None);
/// ```
#[derive(Debug)]
pub struct BookDirectory {
    aliases: HashMap<String, usize>,
}

impl BookDirectory {
    /// Builds a directory from the canonical table.
    pub fn new() -> Self {
        let mut aliases = HashMap::new();
        for (index, (name, abbreviations)) in BOOKS.iter().enumerate() {
            aliases.insert(name.to_lowercase(), index);
            for abbreviation in *abbreviations {
                aliases.insert(abbreviation.to_lowercase(), index);
            }
        }
        Self { aliases }
    }

    /// Returns the shared directory, built on first use and immutable after.
    pub fn standard() -> &'static BookDirectory {
        &STANDARD
    }

    /// Resolves a name or abbreviation to its canon index.
    ///
    /// Matching trims surrounding whitespace and ignores case. An empty or
    /// unrecognized token is `None`.
    pub fn index_of(&self, token: &str) -> Option<usize> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        self.aliases.get(&token.to_lowercase()).copied()
    }

    /// Resolves a name or abbreviation to the canonical full name.
    pub fn full_name_of(&self, token: &str) -> Option<&'static str> {
        self.index_of(token).map(|index| BOOKS[index].0)
    }

    /// Returns the canonical full name at a canon index, or `None` when the
    /// index is outside the canon.
    pub fn name_at(&self, index: usize) -> Option<&'static str> {
        BOOKS.get(index).map(|(name, _)| *name)
    }

    /// Whether the token resolves to any book.
    pub fn contains(&self, token: &str) -> bool {
        self.index_of(token).is_some()
    }

    /// The curated abbreviations for the book at a canon index, excluding the
    /// full name itself.
    pub fn aliases_of(&self, index: usize) -> Option<&'static [&'static str]> {
        BOOKS.get(index).map(|(_, abbreviations)| *abbreviations)
    }
}

impl Default for BookDirectory {
    fn default() -> Self {
        Self::new()
    }
}
