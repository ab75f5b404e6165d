mod common;

use assert2::check;
use browse_match::{
    CategoryFilter, FileItem, ItemCategory, MatchItem, MatchRanker, MemberItem, RANK_CODE,
    RANK_EXACT, RANK_FROM_START, RANK_PARTIAL, RANK_PASCAL_CASE_EXACT, passes_filter,
};
use common::{class_members, solution_files, visible_names};
use rstest::rstest;

fn rank_of(items: &[FileItem], name: &str) -> i32 {
    items
        .iter()
        .find(|item| item.name() == name)
        .map(MatchItem::rank)
        .unwrap_or_else(|| panic!("no item named {}", name))
}

/// Test: Prefix matches keep both categories visible, code ranked above
/// non-code.
#[rstest]
fn prefix_filter_favors_code(mut solution_files: Vec<FileItem>) {
    MatchRanker::default().match_items("test", &mut solution_files);

    check!(rank_of(&solution_files, "TestCodeFile2.cs") == RANK_FROM_START + RANK_CODE);
    check!(rank_of(&solution_files, "TestFile1.txt") == RANK_FROM_START);

    let visible = visible_names(&solution_files);
    check!(visible == ["TestCodeFile2.cs", "TestFile1.txt"]);
}

/// Test: Exact core match beats every other tier and hides everything else.
#[rstest]
fn exact_name_filter(mut solution_files: Vec<FileItem>) {
    MatchRanker::default().match_items("TestFile1", &mut solution_files);

    check!(rank_of(&solution_files, "TestFile1.txt") == RANK_EXACT);
    // Code items that fail the token still carry only their bonus.
    check!(rank_of(&solution_files, "TestCodeFile2.cs") == RANK_CODE);

    check!(visible_names(&solution_files) == ["TestFile1.txt"]);
}

/// Test: Acronym abbreviation finds the file.
#[rstest]
fn acronym_filter(mut solution_files: Vec<FileItem>) {
    MatchRanker::default().match_items("TF1", &mut solution_files);

    check!(rank_of(&solution_files, "TestFile1.txt") == RANK_PASCAL_CASE_EXACT);
    check!(visible_names(&solution_files) == ["TestFile1.txt"]);
}

/// Test: A blank filter shows everything, ordered by project then name.
#[rstest]
#[case("")]
#[case("   ")]
fn blank_filter_shows_all(#[case] filter: &str, mut solution_files: Vec<FileItem>) {
    MatchRanker::default().match_items(filter, &mut solution_files);

    for item in &solution_files {
        check!(item.matched());
        check!(item.rank() == 0);
    }

    let visible = visible_names(&solution_files);
    check!(
        visible
            == [
                "Helpers.vb",
                "Program.cs",
                "readme.md",
                "styles.css",
                "TestCodeFile2.cs",
                "TestFile1.txt",
            ]
    );
}

/// Test: Glob filter selects by extension; rank ties fall back to project
/// order.
#[rstest]
fn glob_filter_by_extension(mut solution_files: Vec<FileItem>) {
    MatchRanker::default().match_items("*.cs", &mut solution_files);

    check!(rank_of(&solution_files, "Program.cs") == RANK_PARTIAL + RANK_CODE);
    check!(rank_of(&solution_files, "TestCodeFile2.cs") == RANK_PARTIAL + RANK_CODE);
    // "styles.css" does not end in ".cs"; anchored glob rejects it.
    check!(visible_names(&solution_files) == ["Program.cs", "TestCodeFile2.cs"]);
}

/// Test: Every token must match; scores add up across tokens.
#[rstest]
fn multi_token_and_semantics(mut solution_files: Vec<FileItem>) {
    MatchRanker::default().match_items("test cs", &mut solution_files);

    check!(visible_names(&solution_files) == ["TestCodeFile2.cs"]);
    check!(rank_of(&solution_files, "TestCodeFile2.cs") == RANK_FROM_START + RANK_PARTIAL + RANK_CODE);
}

/// Test: Member browsing ranks prefix matches above substring matches and
/// breaks ties by declaration order.
#[rstest]
fn member_filter_orders_by_rank_then_line(mut class_members: Vec<MemberItem>) {
    MatchRanker::default().match_items("process", &mut class_members);

    let visible = visible_names(&class_members);
    check!(visible == ["ProcessOrder", "ProcessOrderBatch", "OrderProcessor"]);
}

/// Test: Member acronym matching, including the generics-suffix exclusion.
#[rstest]
fn member_acronym_filter(mut class_members: Vec<MemberItem>) {
    MatchRanker::default().match_items("PO", &mut class_members);

    let visible = visible_names(&class_members);
    check!(visible == ["ProcessOrder", "ProcessOrderBatch"]);

    let process_order = class_members
        .iter()
        .find(|m| m.name() == "ProcessOrder")
        .unwrap();
    check!(process_order.rank() == RANK_PASCAL_CASE_EXACT + RANK_CODE);
}

/// Test: The category filter is applied by the caller, outside ranking.
#[rstest]
fn category_filter_is_a_separate_gate(mut solution_files: Vec<FileItem>) {
    MatchRanker::default().match_items("test", &mut solution_files);

    let code_only: Vec<&FileItem> = solution_files
        .iter()
        .filter(|item| item.matched() && passes_filter(item.category(), CategoryFilter::CodeOnly))
        .collect();

    check!(code_only.len() == 1);
    check!(code_only[0].name() == "TestCodeFile2.cs");
    // Ranking still saw the non-code item; the gate merely hid it.
    check!(rank_of(&solution_files, "TestFile1.txt") == RANK_FROM_START);
}

/// Test: Switching filters back and forth leaves no stale state behind.
#[rstest]
fn refilter_is_pure(mut solution_files: Vec<FileItem>) {
    let ranker = MatchRanker::default();

    ranker.match_items("test", &mut solution_files);
    let first = visible_names(&solution_files);

    ranker.match_items("readme", &mut solution_files);
    check!(visible_names(&solution_files) == ["readme.md"]);

    ranker.match_items("test", &mut solution_files);
    check!(visible_names(&solution_files) == first);
}

/// Test: Ranking an empty collection is a no-op.
#[test]
fn empty_collection_is_a_noop() {
    let mut items: Vec<FileItem> = vec![];
    MatchRanker::default().match_items("test", &mut items);
    check!(items.is_empty());
}

/// Test: Category derives from the registry, not from hard-coded names.
#[rstest]
fn fixture_categories_come_from_extensions(solution_files: Vec<FileItem>) {
    let categories: Vec<ItemCategory> = solution_files.iter().map(MatchItem::category).collect();
    check!(
        categories
            == [
                ItemCategory::Code,    // .cs
                ItemCategory::NonCode, // .txt
                ItemCategory::Code,    // .cs
                ItemCategory::Code,    // .vb
                ItemCategory::NonCode, // .md
                ItemCategory::NonCode, // .css
            ]
    );
}
