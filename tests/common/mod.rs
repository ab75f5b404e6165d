//! Shared fixtures for integration tests.
//!
//! Fixtures build small, realistic browser collections: a mixed solution
//! with code and non-code files across two projects, and the members of one
//! class. Categories come from the built-in language registry rather than
//! being hard-coded, so the file fixture exercises the same path a real
//! browsing session does. Fixtures also initialize tracing so ranking-pass
//! debug output shows up in test logs.

use browse_match::{FileItem, LanguageRegistry, MatchItem, MemberItem, MemberKind};
use rstest::fixture;

/// Files across two projects; extensions decide the category.
#[fixture]
pub fn solution_files() -> Vec<FileItem> {
    browse_match::tracing::init();
    let registry = LanguageRegistry::builtin();
    let file = |name: &str, project: &str| FileItem::new(name, project, registry.category_for(name));

    vec![
        file("TestCodeFile2.cs", "Demo"),
        file("TestFile1.txt", "Demo"),
        file("Program.cs", "App"),
        file("Helpers.vb", "App"),
        file("readme.md", "App"),
        file("styles.css", "Demo"),
    ]
}

/// Members of one class, in declaration order.
#[allow(dead_code)] // Used across different integration test crates
#[fixture]
pub fn class_members() -> Vec<MemberItem> {
    browse_match::tracing::init();
    vec![
        MemberItem::new("OrderProcessor", 10, MemberKind::Class),
        MemberItem::new("ProcessOrder", 25, MemberKind::Method),
        MemberItem::new("ProcessOrderBatch", 48, MemberKind::Method),
        MemberItem::new("Lookup<TKey>", 73, MemberKind::Method),
        MemberItem::new("order_count", 91, MemberKind::Field),
    ]
}

/// Applies the UI-side protocol: keep matched items, sort for display,
/// return display names. Ranking must already have run.
#[allow(dead_code)] // Used across different integration test crates
pub fn visible_names<T: MatchItem + Ord + Clone>(items: &[T]) -> Vec<String> {
    let mut visible: Vec<T> = items.iter().filter(|i| i.matched()).cloned().collect();
    visible.sort();
    visible
        .iter()
        .map(|item| item.display_text().to_string())
        .collect()
}
