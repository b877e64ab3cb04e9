use super::*;
use crate::config::OperandConfig;

type Row = (u32, &'static str);

fn rows() -> Vec<Row> {
    vec![
        (1, "A101 - Floor Plan"),
        (2, "A102 - Roof Plan"),
        (3, "S201 - Foundation"),
        (4, "E301 - Lighting"),
    ]
}

fn groups() -> GroupCatalog<u32> {
    let mut groups = GroupCatalog::default();
    groups.insert("Architectural", [1, 2]);
    groups.insert("Engineering", [3, 4]);
    groups
}

fn open(config: DialogConfig) -> SelectionDialog<Row, u32> {
    let mut dialog = SelectionDialog::new(config);
    dialog.load(rows(), |r| r.0, |r| r.1.to_string(), groups());
    dialog
}

fn sheet_config() -> DialogConfig {
    DialogConfig {
        show_reset_button: true,
        ..DialogConfig::sheets("Select Sheets", "Select")
    }
}

fn visible_keys(dialog: &SelectionDialog<Row, u32>) -> Vec<u32> {
    dialog.visible().iter().map(|e| e.key).collect()
}

#[test]
fn test_load_enters_filtering_with_all_scope() {
    let mut dialog: SelectionDialog<Row, u32> = SelectionDialog::new(sheet_config());
    assert_eq!(dialog.state(), DialogState::Idle);

    dialog.load(rows(), |r| r.0, |r| r.1.to_string(), groups());

    assert_eq!(dialog.state(), DialogState::Filtering);
    assert_eq!(dialog.scope(), &GroupScope::All);
    assert_eq!(visible_keys(&dialog), vec![1, 2, 3, 4]);
    assert_eq!(
        dialog.group_options(),
        vec!["All Sheets", "Architectural", "Engineering"]
    );
}

#[test]
fn test_default_group_applies_on_load() {
    let config = DialogConfig {
        default_group: Some("Engineering".to_string()),
        ..sheet_config()
    };
    let dialog = open(config);
    assert_eq!(visible_keys(&dialog), vec![3, 4]);
    assert_eq!(dialog.scope_label(), "Engineering");
}

#[test]
fn test_query_narrows_visible_view() {
    let mut dialog = open(sheet_config());
    dialog.set_query_text("plan");
    assert_eq!(visible_keys(&dialog), vec![1, 2]);

    dialog.toggle_regex();
    dialog.set_query_text(r"^[AE]\d{3}");
    assert_eq!(visible_keys(&dialog), vec![1, 2, 4]);

    dialog.set_query_text("[");
    assert_eq!(visible_keys(&dialog), vec![1, 2, 3, 4]);

    dialog.clear_query();
    assert!(dialog.query().text.is_empty());
    assert_eq!(dialog.query().mode, FilterMode::Regex);
}

#[test]
fn test_group_then_query() {
    let mut dialog = open(sheet_config());
    dialog.set_query_text("plan");
    dialog.set_group("Engineering");
    assert!(dialog.visible().is_empty());
    assert_eq!(dialog.candidates().len(), 2);

    dialog.set_group("Architectural");
    assert_eq!(visible_keys(&dialog), vec![1, 2]);
}

#[test]
fn test_unknown_group_equals_all() {
    let mut dialog = open(sheet_config());
    dialog.set_group("No Such Set");
    let unknown = visible_keys(&dialog);
    dialog.set_group("All Sheets");
    assert_eq!(unknown, visible_keys(&dialog));
    assert_eq!(dialog.scope(), &GroupScope::All);
}

#[test]
fn test_bulk_ops_only_touch_visible_entries() {
    let mut dialog = open(sheet_config());
    dialog.set_query_text("plan");
    dialog.check_visible();
    dialog.clear_query();

    let selected: Vec<u32> = dialog
        .visible()
        .iter()
        .filter(|e| e.selected)
        .map(|e| e.key)
        .collect();
    assert_eq!(selected, vec![1, 2]);

    dialog.toggle_visible();
    assert_eq!(dialog.selected_count(), 2);

    dialog.uncheck_visible();
    assert_eq!(dialog.selected_count(), 0);
}

#[test]
fn test_group_change_resets_selection() {
    let mut dialog = open(sheet_config());
    dialog.set_selected(&1, true);
    dialog.set_group("Architectural");
    assert_eq!(dialog.selected_count(), 0);
}

#[test]
fn test_confirm_collects_selection_hidden_by_filter() {
    let mut dialog = open(sheet_config());
    dialog.set_selected(&3, true);
    dialog.set_selected(&1, true);
    dialog.set_query_text("roof");

    let result = dialog.confirm().unwrap();
    assert!(result.confirmed);
    assert_eq!(result.selected_keys, vec![1, 3]);
    assert_eq!(result.operand, None);
    assert_eq!(result.selected_group.as_deref(), Some("All Sheets"));
    assert_eq!(dialog.state(), DialogState::Confirmed);
}

#[test]
fn test_confirm_guard_on_empty_selection() {
    let mut dialog = open(sheet_config());
    assert_eq!(dialog.confirm(), Err(ConfirmError::EmptySelection));
    assert_eq!(dialog.state(), DialogState::Filtering);

    dialog.set_selected(&2, true);
    assert!(dialog.confirm().is_ok());
}

#[test]
fn test_empty_selection_allowed_when_not_required() {
    let config = DialogConfig {
        require_selection: false,
        ..sheet_config()
    };
    let mut dialog = open(config);
    let result = dialog.confirm().unwrap();
    assert!(result.selected_keys.is_empty());
}

#[test]
fn test_operand_validation() {
    let config = sheet_config().with_operand(OperandConfig::labeled("Increment by:"));
    let mut dialog = open(config);
    dialog.check_visible();
    assert_eq!(dialog.operand_text(), "1");

    dialog.set_operand_text("two");
    assert_eq!(
        dialog.confirm(),
        Err(ConfirmError::InvalidOperand {
            label: "Increment by:".to_string(),
            value: "two".to_string()
        })
    );
    assert!(dialog.is_active());

    dialog.set_operand_text("0");
    assert!(matches!(
        dialog.confirm(),
        Err(ConfirmError::InvalidOperand { .. })
    ));

    dialog.set_operand_text(" 3 ");
    let result = dialog.confirm().unwrap();
    assert_eq!(result.operand, Some(3));
    assert_eq!(result.selected_keys.len(), 4);
}

#[test]
fn test_negative_operand_allowed_when_configured() {
    let operand = OperandConfig {
        require_positive: false,
        ..OperandConfig::default()
    };
    let mut dialog = open(sheet_config().with_operand(operand));
    dialog.check_visible();
    dialog.set_operand_text("-2");
    assert_eq!(dialog.confirm().unwrap().operand, Some(-2));
}

#[test]
fn test_cancel_discards_everything() {
    let mut dialog = open(sheet_config());
    dialog.check_visible();
    let result = dialog.cancel();

    assert!(!result.confirmed);
    assert!(result.selected_keys.is_empty());
    assert_eq!(dialog.state(), DialogState::Cancelled);
    assert_eq!(dialog.confirm(), Err(ConfirmError::NotActive));
}

#[test]
fn test_edits_ignored_after_close() {
    let mut dialog = open(sheet_config());
    dialog.set_selected(&1, true);
    dialog.confirm().unwrap();

    dialog.set_query_text("roof");
    dialog.uncheck_visible();
    assert_eq!(dialog.query().text, "");
    assert_eq!(dialog.selected_count(), 1);
}

#[test]
fn test_reset_restores_defaults() {
    let config = DialogConfig {
        default_select_all: true,
        ..sheet_config()
    };
    let mut dialog = open(config);
    dialog.set_group("Engineering");
    dialog.set_query_text("light");
    dialog.uncheck_visible();

    dialog.reset();

    assert_eq!(dialog.scope(), &GroupScope::All);
    assert!(dialog.query().text.is_empty());
    assert_eq!(dialog.selected_count(), 4);
}

#[test]
fn test_disabled_controls_are_ignored() {
    let config = DialogConfig {
        show_search: false,
        show_check_buttons: false,
        show_group_scope: false,
        ..DialogConfig::titled("Pick", "OK")
    };
    let mut dialog = open(config);

    dialog.set_query_text("plan");
    dialog.set_group("Engineering");
    dialog.check_visible();
    dialog.reset();

    assert_eq!(visible_keys(&dialog), vec![1, 2, 3, 4]);
    assert_eq!(dialog.selected_count(), 0);

    dialog.set_selected(&4, true);
    let result = dialog.confirm().unwrap();
    assert_eq!(result.selected_keys, vec![4]);
    assert_eq!(result.selected_group, None);
}

#[test]
fn test_derive_view_is_pure() {
    let mut store = SelectableItemStore::new();
    store.load(rows(), |r| r.0, |r| r.1.to_string(), false);
    let groups = groups();
    let scope = groups.resolve("Architectural");
    let query = FilterQuery::substring("roof");

    let first = derive_view(store.entries(), &groups, &scope, &query);
    let second = derive_view(store.entries(), &groups, &scope, &query);
    assert_eq!(first, second);
    assert_eq!(first, (vec![0, 1], vec![1]));
}

#[test]
fn test_derive_view_matches_scope_then_filter() {
    use crate::selection::filter_entries;

    let mut store = SelectableItemStore::new();
    store.load(rows(), |r| r.0, |r| r.1.to_string(), false);
    let groups = groups();

    for name in ["All Sheets", "Architectural", "Engineering", "Unknown"] {
        for query in [
            FilterQuery::substring(""),
            FilterQuery::substring("PLAN"),
            FilterQuery::regex(r"^[ae]\d"),
            FilterQuery::regex("("),
        ] {
            let (_, visible) = derive_view(store.entries(), &groups, &groups.resolve(name), &query);
            let visible_keys: Vec<u32> = visible.iter().map(|&idx| store.entries()[idx].key).collect();

            let expected: Vec<u32> = filter_entries(groups.scope(&store, name), &query)
                .iter()
                .map(|entry| entry.key)
                .collect();
            assert_eq!(visible_keys, expected, "{} / {:?}", name, query);
        }
    }
}
