//! End-to-end: select sheets in a session, then renumber them

mod common;

use sheetnum::config::{Config, DialogConfig};
use sheetnum::renumber::{RenumberEngine, SkipReason};
use sheetnum::selection::{ConfirmError, DialogState, SelectionDialog};
use sheetnum::{Sheet, SheetDocument, SheetId};

use common::{numbers, sample_document};

fn open(document: &SheetDocument, config: &DialogConfig) -> SelectionDialog<Sheet, SheetId> {
    let mut dialog = SelectionDialog::new(config.clone());
    dialog.load(
        document.sorted_sheets(),
        |sheet| sheet.id,
        Sheet::display_name,
        document.group_catalog("All Sheets"),
    );
    dialog
}

#[test]
fn test_increment_permit_set() {
    let mut document = sample_document();
    let config = Config::with_defaults();
    let mut dialog = open(&document, &config.increment);

    dialog.set_group("Permit");
    dialog.check_visible();
    let result = dialog.confirm().expect("selection should confirm");

    assert_eq!(result.operand, Some(1));
    assert_eq!(result.selected_group.as_deref(), Some("Permit"));

    let batch = document.sheets_by_ids(&result.selected_keys);
    let outcome = RenumberEngine::apply_and_commit(&batch, 1, &mut document);

    assert!(outcome.skipped.is_empty(), "unexpected skips: {:?}", outcome.skipped);
    assert_eq!(
        numbers(&document),
        vec!["A004", "A005s", "A2", "A3", "A4", "COVER"]
    );
    assert_eq!(outcome.summary(), "Incremented 3 of 3 sheets by 1");
}

#[test]
fn test_decrement_by_operand_with_partial_failure() {
    let mut document = sample_document();
    let config = Config::with_defaults();
    let mut dialog = open(&document, &config.decrement);

    dialog.set_query_text("details");
    dialog.check_visible();
    dialog.clear_query();
    dialog.set_selected(&1, true);
    dialog.set_operand_text("4");

    let result = dialog.confirm().unwrap();
    assert_eq!(result.selected_keys, vec![4, 5, 1]);

    let delta = -result.operand.unwrap();
    let batch = document.sheets_by_ids(&result.selected_keys);
    let outcome = RenumberEngine::apply_and_commit(&batch, delta, &mut document);

    let renames: Vec<_> = outcome
        .succeeded
        .iter()
        .map(|r| (r.from.as_str(), r.to.as_str()))
        .collect();
    assert_eq!(renames, vec![("A004", "A000"), ("A005s", "A001s")]);
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].key, 1);
    assert_eq!(outcome.skipped[0].reason, SkipReason::WouldGoNegative);
    assert_eq!(
        outcome.summary(),
        "Decremented 2 of 3 sheets by 4; 1 skipped: would-go-negative"
    );
}

#[test]
fn test_unnumbered_sheet_gets_number_on_increment() {
    let mut document = sample_document();
    let cover = document.sheet(6).cloned().unwrap();

    let outcome = RenumberEngine::apply_and_commit(&[cover.clone()], 2, &mut document);
    assert_eq!(outcome.succeeded[0].to, "COVE2R");

    let outcome = RenumberEngine::apply_and_commit(&[cover], -1, &mut document);
    assert!(outcome.succeeded.is_empty());
    assert_eq!(outcome.skipped[0].reason, SkipReason::NoOp);
}

#[test]
fn test_increment_into_unselected_sheet_is_reported() {
    let mut document = sample_document();
    let batch = vec![document.sheet(2).cloned().unwrap()];

    let outcome = RenumberEngine::apply_and_commit(&batch, 1, &mut document);

    assert!(outcome.succeeded.is_empty());
    assert!(matches!(outcome.skipped[0].reason, SkipReason::WriteFailed(_)));
    assert_eq!(document.sheet(2).unwrap().number, "A2");
}

#[test]
fn test_invalid_operand_keeps_session_open() {
    let document = sample_document();
    let config = Config::with_defaults();
    let mut dialog = open(&document, &config.increment);
    dialog.check_visible();
    dialog.set_operand_text("1.5");

    assert!(matches!(
        dialog.confirm(),
        Err(ConfirmError::InvalidOperand { .. })
    ));
    assert_eq!(dialog.state(), DialogState::Filtering);

    dialog.set_operand_text("5");
    assert_eq!(dialog.confirm().unwrap().operand, Some(5));
}

#[test]
fn test_batch_order_does_not_matter() {
    let base = sample_document();

    for picks in [[1, 2, 3], [3, 1, 2], [2, 3, 1], [3, 2, 1]] {
        let mut document = base.clone();
        let batch = document.sheets_by_ids(&picks);
        let outcome = RenumberEngine::apply_and_commit(&batch, 1, &mut document);

        assert!(outcome.skipped.is_empty(), "picks {:?}: {:?}", picks, outcome.skipped);
        assert_eq!(
            numbers(&document),
            vec!["A004", "A005s", "A2", "A3", "A4", "COVER"]
        );
    }
}

#[test]
fn test_dry_run_plan_matches_commit() {
    let document = sample_document();
    let batch: Vec<Sheet> = document.sorted_sheets();

    let planned = RenumberEngine::apply(&batch, 3);
    let mut committed_doc = document.clone();
    let committed = RenumberEngine::apply_and_commit(&batch, 3, &mut committed_doc);

    assert_eq!(planned, committed);
    // Planning never touches the document
    assert_eq!(numbers(&document), numbers(&sample_document()));
}
