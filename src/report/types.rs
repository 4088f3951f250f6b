//! Report record types
//!
//! A `SeoReport` is built once per run by the extractor and read once by the
//! text writer.

/// Highest HTML heading level (`h6`)
pub const MAX_HEADING_LEVEL: u8 = 6;

/// A heading element with its level and trimmed text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    level: u8,
    pub text: String,
}

impl Heading {
    /// Creates a heading, returning `None` for levels outside 1..=6
    pub fn new(level: u8, text: impl Into<String>) -> Option<Self> {
        if (1..=MAX_HEADING_LEVEL).contains(&level) {
            Some(Self {
                level,
                text: text.into(),
            })
        } else {
            None
        }
    }

    /// The heading level, always in 1..=6
    pub fn level(&self) -> u8 {
        self.level
    }
}

/// An `<img>` element's source and alt text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLink {
    /// The `src` attribute, empty if absent
    pub src: String,

    /// The `alt` attribute, empty if absent
    pub alt_text: String,
}

/// An anchor target with the anchor's `alt` attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    /// Absolute URL for internal links, the raw href for external ones
    pub url: String,

    /// The anchor's `alt` attribute, empty if absent
    pub alt_text: String,
}

/// Word statistics over the visible text of a page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStats {
    /// Whitespace-delimited tokens before stopword removal
    pub word_count: usize,

    /// Most frequent non-stopwords, highest count first
    pub common_words: Vec<(String, usize)>,
}

/// On-page SEO signals extracted from a single document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoReport {
    pub title: String,
    pub meta_description: String,

    /// All h1s, then all h2s, and so on; document order within a level
    pub headings: Vec<Heading>,

    pub images: Vec<ImageLink>,
    pub internal_links: Vec<PageLink>,
    pub external_links: Vec<PageLink>,
    pub word_count: usize,
    pub common_words: Vec<(String, usize)>,
}

impl SeoReport {
    /// Total number of reported links
    pub fn total_links(&self) -> usize {
        self.internal_links.len() + self.external_links.len()
    }

    /// Number of images with an empty or missing alt attribute
    pub fn images_missing_alt(&self) -> usize {
        self.images
            .iter()
            .filter(|image| image.alt_text.trim().is_empty())
            .count()
    }
}
