//! Matchable item models for browser lists.
//!
//! The ranking pass sees items through the [`MatchItem`] capability;
//! [`FileItem`] and [`MemberItem`] are the two concrete models, each with
//! its own display ordering.

use crate::search::acronym;
use std::cmp::Ordering;

/// Whether an item counts as code for the ranking bonus.
///
/// An explicit tag rather than a runtime capability check; [`crate::lang`]
/// derives it from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    Code,
    NonCode,
}

/// What a candidate item exposes to the ranking pass.
///
/// `matched` and `rank` are outputs owned exclusively by the ranking pass;
/// nothing else mutates them. Both are reset to `(true, 0)` before a fresh
/// pass so re-filtering without new input is pure.
pub trait MatchItem {
    /// The primary string matched against (file name or member name).
    fn display_text(&self) -> &str;

    /// Byte index marking the end of the core portion of `display_text`,
    /// before any generic-type or extension suffix. `None` when the suffix
    /// marker is absent.
    fn data_ending_index(&self) -> Option<usize>;

    /// Precomputed pascal-case acronym of `display_text`.
    fn acronym_text(&self) -> &str;

    fn category(&self) -> ItemCategory;

    /// True when the item satisfied every active search token, or when no
    /// search is active.
    fn matched(&self) -> bool;

    /// Cumulative score from the last ranking pass; higher sorts first.
    fn rank(&self) -> i32;

    fn set_match(&mut self, matched: bool, rank: i32);

    /// The portion of `display_text` used for exact and prefix matching.
    fn core_text(&self) -> &str {
        match self.data_ending_index() {
            Some(end) => &self.display_text()[..end],
            None => self.display_text(),
        }
    }
}

/// A file entry in a file-browser list.
#[derive(Debug, Clone)]
pub struct FileItem {
    name: String,
    project_name: String,
    category: ItemCategory,
    ending_index: Option<usize>,
    acronym: String,
    matched: bool,
    rank: i32,
}

impl FileItem {
    /// Creates a file item, precomputing its acronym and the extension
    /// boundary (the final `.` in the name).
    pub fn new(
        name: impl Into<String>,
        project_name: impl Into<String>,
        category: ItemCategory,
    ) -> Self {
        let name = name.into();
        let ending_index = name.rfind('.');
        let acronym = acronym::compute(&name);

        Self {
            name,
            project_name: project_name.into(),
            category,
            ending_index,
            acronym,
            matched: true,
            rank: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The owning container, typically a project name.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }
}

impl MatchItem for FileItem {
    fn display_text(&self) -> &str {
        &self.name
    }

    fn data_ending_index(&self) -> Option<usize> {
        self.ending_index
    }

    fn acronym_text(&self) -> &str {
        &self.acronym
    }

    fn category(&self) -> ItemCategory {
        self.category
    }

    fn matched(&self) -> bool {
        self.matched
    }

    fn rank(&self) -> i32 {
        self.rank
    }

    fn set_match(&mut self, matched: bool, rank: i32) {
        self.matched = matched;
        self.rank = rank;
    }
}

impl Ord for FileItem {
    /// Rank descending, then project name, then file name, both
    /// case-insensitive ascending.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .rank
            .cmp(&self.rank)
            .then_with(|| cmp_ignore_case(&self.project_name, &other.project_name))
            .then_with(|| cmp_ignore_case(&self.name, &other.name))
    }
}

impl PartialOrd for FileItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FileItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FileItem {}

/// Kinds of code members surfaced in a member-browser list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Class,
    Struct,
    Enum,
    Interface,
    Method,
    Property,
    Field,
    Event,
    Delegate,
}

/// A code member entry in a member-browser list. Always `Code` category.
#[derive(Debug, Clone)]
pub struct MemberItem {
    name: String,
    line: u32,
    kind: MemberKind,
    ending_index: Option<usize>,
    acronym: String,
    matched: bool,
    rank: i32,
}

impl MemberItem {
    /// Creates a member item, precomputing its acronym and the generics
    /// boundary (the first `<` in the name).
    pub fn new(name: impl Into<String>, line: u32, kind: MemberKind) -> Self {
        let name = name.into();
        let ending_index = name.find('<');
        let acronym = acronym::compute(&name);

        Self {
            name,
            line,
            kind,
            ending_index,
            acronym,
            matched: true,
            rank: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source line the member is declared on.
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }
}

impl MatchItem for MemberItem {
    fn display_text(&self) -> &str {
        &self.name
    }

    fn data_ending_index(&self) -> Option<usize> {
        self.ending_index
    }

    fn acronym_text(&self) -> &str {
        &self.acronym
    }

    fn category(&self) -> ItemCategory {
        ItemCategory::Code
    }

    fn matched(&self) -> bool {
        self.matched
    }

    fn rank(&self) -> i32 {
        self.rank
    }

    fn set_match(&mut self, matched: bool, rank: i32) {
        self.matched = matched;
        self.rank = rank;
    }
}

impl Ord for MemberItem {
    /// Rank descending, then declaration line ascending. Kind is tracked on
    /// the item but does not break ties; the code bonus is applied during
    /// rank computation, not here.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .rank
            .cmp(&self.rank)
            .then_with(|| self.line.cmp(&other.line))
    }
}

impl PartialOrd for MemberItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for MemberItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MemberItem {}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
