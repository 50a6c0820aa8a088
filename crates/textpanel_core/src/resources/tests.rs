use super::*;
use std::cell::RefCell;
use std::rc::Rc;

type Calls = Rc<RefCell<Vec<Vec<Resource>>>>;

fn recording_editor(
    value: Option<Vec<Resource>>,
) -> (ResourcesEditor<impl FnMut(Vec<Resource>)>, Calls) {
    let calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let sink_calls = calls.clone();
    let editor = ResourcesEditor::new(value, move |next: Vec<Resource>| {
        sink_calls.borrow_mut().push(next)
    });
    (editor, calls)
}

fn urls(items: &[Resource]) -> Vec<&str> {
    items.iter().map(|item| item.url.as_str()).collect()
}

fn add_url<S: ChangeSink<Vec<Resource>>>(editor: &mut ResourcesEditor<S>, url: &str) -> String {
    editor.set_pending_input(url);
    editor.add().expect("add enabled")
}

#[test]
fn seeds_from_external_value_or_empty() {
    let (empty, _) = recording_editor(None);
    assert!(empty.items().is_empty());

    let seeded = vec![Resource::new("a.css"), Resource::new("b.css")];
    let (editor, calls) = recording_editor(Some(seeded.clone()));
    assert_eq!(editor.items(), seeded.as_slice());
    assert!(calls.borrow().is_empty());
}

#[test]
fn add_is_unavailable_for_empty_input() {
    let (mut editor, calls) = recording_editor(None);
    assert!(!editor.can_add());
    assert_eq!(editor.add(), None);
    assert!(editor.items().is_empty());
    assert!(calls.borrow().is_empty());
}

#[test]
fn add_appends_clears_input_and_notifies_once() {
    let (mut editor, calls) = recording_editor(None);
    editor.set_pending_input("http://x");
    assert!(editor.can_add());

    let id = editor.add().expect("added");

    assert_eq!(editor.items().len(), 1);
    assert_eq!(editor.items()[0].id, id);
    assert_eq!(editor.items()[0].url, "http://x");
    assert_eq!(editor.pending_input(), "");
    assert!(!editor.can_add());
    assert_eq!(calls.borrow().len(), 1);
    assert_eq!(calls.borrow()[0], editor.items());
}

#[test]
fn added_ids_are_fresh() {
    let (mut editor, _) = recording_editor(None);
    let first = add_url(&mut editor, "same");
    let second = add_url(&mut editor, "same");
    assert_ne!(first, second);
    assert_eq!(urls(editor.items()), vec!["same", "same"]);
}

#[test]
fn newly_added_item_is_expanded() {
    let (mut editor, _) = recording_editor(None);
    let id = add_url(&mut editor, "http://x");
    assert!(editor.is_expanded(&id));
    assert!(!editor.is_expanded("http://x"));
}

#[test]
fn remove_is_idempotent() {
    let (mut editor, calls) = recording_editor(None);
    let id = add_url(&mut editor, "a");
    add_url(&mut editor, "b");
    calls.borrow_mut().clear();

    assert!(editor.remove(&id));
    assert!(!editor.remove(&id));

    assert_eq!(urls(editor.items()), vec!["b"]);
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn remove_keeps_stale_collapse_entry() {
    let (mut editor, _) = recording_editor(None);
    let id = add_url(&mut editor, "a");
    editor.remove(&id);
    assert_eq!(editor.collapse_state().len(), 1);
}

#[test]
fn edit_replaces_url_in_place() {
    let (mut editor, calls) = recording_editor(None);
    add_url(&mut editor, "a");
    let id = add_url(&mut editor, "b");
    add_url(&mut editor, "c");
    calls.borrow_mut().clear();

    assert!(editor.edit(&id, "bee"));

    assert_eq!(urls(editor.items()), vec!["a", "bee", "c"]);
    assert_eq!(editor.items()[1].id, id);
    assert_eq!(calls.borrow().len(), 1);
    assert_eq!(calls.borrow()[0], editor.items());
}

#[test]
fn edit_unknown_id_is_noop() {
    let (mut editor, calls) = recording_editor(Some(vec![Resource::new("a")]));
    let before = editor.items().to_vec();
    assert!(!editor.edit("missing", "z"));
    assert_eq!(editor.items(), before.as_slice());
    assert!(calls.borrow().is_empty());
}

#[test]
fn add_add_reorder_swaps_and_keeps_ids() {
    let (mut editor, calls) = recording_editor(None);
    let a = add_url(&mut editor, "a");
    let b = add_url(&mut editor, "b");

    assert!(editor.reorder(DropResult::new(0, Some(1))));

    assert_eq!(urls(editor.items()), vec!["b", "a"]);
    assert_eq!(editor.items()[0].id, b);
    assert_eq!(editor.items()[1].id, a);
    assert_eq!(calls.borrow().len(), 3);
    assert_eq!(calls.borrow()[2], editor.items());
}

#[test]
fn drop_outside_list_changes_nothing() {
    let (mut editor, calls) = recording_editor(None);
    add_url(&mut editor, "a");
    add_url(&mut editor, "b");
    let before = editor.items().to_vec();
    calls.borrow_mut().clear();

    assert!(!editor.reorder(DropResult::new(0, None)));

    assert_eq!(editor.items(), before.as_slice());
    assert!(calls.borrow().is_empty());
}

#[test]
fn out_of_range_drop_changes_nothing() {
    let (mut editor, calls) = recording_editor(Some(vec![Resource::new("a")]));
    assert!(!editor.reorder(DropResult::new(0, Some(3))));
    assert!(!editor.reorder(DropResult::new(2, Some(0))));
    assert!(calls.borrow().is_empty());
}

#[test]
fn toggle_collapse_starts_collapsed() {
    let (mut editor, _) = recording_editor(Some(vec![Resource::new("a")]));
    let id = editor.items()[0].id.clone();
    assert!(!editor.is_expanded(&id));
    assert!(editor.toggle_collapse(&id));
    assert!(editor.is_expanded(&id));
    assert!(!editor.toggle_collapse(&id));
    assert!(!editor.is_expanded(&id));
}

#[test]
fn reorder_helper_matches_remove_then_insert() {
    let list = vec!['a', 'b', 'c', 'd'];
    assert_eq!(reorder(&list, 0, 3), Some(vec!['b', 'c', 'd', 'a']));
    assert_eq!(reorder(&list, 3, 0), Some(vec!['d', 'a', 'b', 'c']));
    assert_eq!(reorder(&list, 1, 1), Some(list.clone()));
    assert_eq!(reorder(&list, 4, 0), None);
}
