/// One linked entry in the table of contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocEntry {
    pub title: &'static str,
    /// Href relative to the `chapters/` directory.
    pub href: &'static str,
}

/// A part heading with its chapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocSection {
    pub title: &'static str,
    pub entries: &'static [TocEntry],
}

/// The complete table of contents for "The First Life".
///
/// Hrefs are written as a chapter page sees them; `resolve_href` adjusts
/// them for the page the sidebar is rendered into.
pub const BOOK_CONTENTS: &[TocSection] = &[
    TocSection {
        title: "Front Matter",
        entries: &[
            TocEntry { title: "A Note on Process", href: "00-front-matter.html" },
            TocEntry { title: "Preface", href: "00-front-matter.html#preface" },
            TocEntry { title: "Introduction", href: "00-front-matter.html#introduction" },
        ],
    },
    TocSection {
        title: "Part I: The Question",
        entries: &[
            TocEntry { title: "Chapter 1: The Mismatch", href: "01-part-i.html#chapter-1" },
            TocEntry { title: "Chapter 2: The Dream", href: "01-part-i.html#chapter-2" },
        ],
    },
    TocSection {
        title: "Part II: The Philosophy",
        entries: &[
            TocEntry { title: "Chapter 3: The Purpose", href: "02-part-ii.html#chapter-3" },
            TocEntry { title: "Chapter 4: The Three Freedoms", href: "02-part-ii.html#chapter-4" },
            TocEntry { title: "Chapter 5: The Peril", href: "02-part-ii.html#chapter-5" },
            TocEntry { title: "Chapter 6: The Synthesis", href: "02-part-ii.html#chapter-6" },
        ],
    },
    TocSection {
        title: "Part III: The Global Context",
        entries: &[
            TocEntry { title: "Chapter 7: The Burden", href: "03-part-iii.html#chapter-7" },
            TocEntry { title: "Chapter 8: The Paradox", href: "03-part-iii.html#chapter-8" },
            TocEntry { title: "Chapter 9: The Limits", href: "03-part-iii.html#chapter-9" },
        ],
    },
    TocSection {
        title: "Part IV: The Architecture",
        entries: &[
            TocEntry { title: "Chapter 10: How It Works", href: "04-part-iv.html#chapter-10" },
            TocEntry { title: "Chapter 11: Training Your Partner", href: "04-part-iv.html#chapter-11" },
            TocEntry { title: "Chapter 12: The Memory Problem", href: "04-part-iv.html#chapter-12" },
        ],
    },
    TocSection {
        title: "Part V: The Applications",
        entries: &[
            TocEntry { title: "Chapter 13: Economic Agency", href: "05-part-v.html#chapter-13" },
            TocEntry { title: "Chapter 14: Education", href: "05-part-v.html#chapter-14" },
            TocEntry { title: "Chapter 15: Legacy", href: "05-part-v.html#chapter-15" },
        ],
    },
    TocSection {
        title: "Part VI: The Principles",
        entries: &[
            TocEntry { title: "Chapter 16: For Individuals", href: "06-part-vi.html#chapter-16" },
            TocEntry { title: "Chapter 17: For Builders", href: "06-part-vi.html#chapter-17" },
            TocEntry { title: "Chapter 18: For Society", href: "06-part-vi.html#chapter-18" },
        ],
    },
    TocSection {
        title: "Part VII: The Vision",
        entries: &[
            TocEntry { title: "Chapter 19: The Unburdened Life", href: "07-part-vii.html#chapter-19" },
            TocEntry { title: "Chapter 20: The Invitation", href: "07-part-vii.html#chapter-20" },
        ],
    },
    TocSection {
        title: "Additional Materials",
        entries: &[
            TocEntry { title: "Vignettes", href: "08-vignettes.html" },
        ],
    },
];

/// Which kind of book page the reader is enhancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageContext {
    /// The top-level index page, one directory above `chapters/`.
    BookIndex,
    /// A page inside the `chapters/` directory.
    Chapter,
}

impl PageContext {
    /// Classifies a page by its path.
    pub fn from_path(path: &str) -> PageContext {
        if path.contains("/chapters/") || path.ends_with("/chapters") {
            PageContext::Chapter
        } else {
            PageContext::BookIndex
        }
    }
}

impl Default for PageContext {
    fn default() -> Self {
        PageContext::BookIndex
    }
}

/// Adjusts a contents href for the page it will be rendered into.
///
/// Chapter pages sit next to the targets, so hrefs pass through. The index
/// page sits one directory up and needs the `chapters/` prefix, except for
/// hrefs that are already prefixed, parent-relative, or absolute.
pub fn resolve_href(href: &str, context: PageContext) -> String {
    match context {
        PageContext::Chapter => href.to_string(),
        PageContext::BookIndex => {
            if href.starts_with("chapters/") || href.starts_with("../") || href.starts_with("http")
            {
                href.to_string()
            } else {
                format!("chapters/{}", href)
            }
        }
    }
}
