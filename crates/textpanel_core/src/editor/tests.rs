use super::*;
use crate::error::PanelError;
use crate::host::StaticVariables;
use crate::models::{Format, SuggestionKind, VariableDescriptor};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct CountingAction {
    runs: Rc<Cell<usize>>,
    disposed: Rc<Cell<bool>>,
}

impl FormatAction for CountingAction {
    fn run(&mut self) -> Result<(), PanelError> {
        if self.disposed.get() {
            return Err(PanelError::SurfaceDisposed);
        }
        self.runs.set(self.runs.get() + 1);
        Ok(())
    }
}

fn counting_action() -> (Box<dyn FormatAction>, Rc<Cell<usize>>, Rc<Cell<bool>>) {
    let runs = Rc::new(Cell::new(0));
    let disposed = Rc::new(Cell::new(false));
    let action = CountingAction {
        runs: runs.clone(),
        disposed: disposed.clone(),
    };
    (Box::new(action), runs, disposed)
}

fn options(format: Format) -> EditorOptions {
    EditorOptions {
        format,
        ..EditorOptions::default()
    }
}

fn registry() -> StaticVariables {
    StaticVariables::new(vec![
        VariableDescriptor::new("host", "Host").with_description("Selected host"),
        VariableDescriptor::new("env", "Environment"),
    ])
}

fn discard(_: String) {}

#[test]
fn language_follows_mode_and_primary_language() {
    for primary in [CodeLanguage::Html, CodeLanguage::Markdown] {
        assert_eq!(resolve_language(EditorMode::Helpers, primary), CodeLanguage::Javascript);
        assert_eq!(resolve_language(EditorMode::Styles, primary), CodeLanguage::Scss);
        assert_eq!(resolve_language(EditorMode::Text, primary), primary);
    }
}

#[test]
fn language_updates_without_remount_when_primary_changes() {
    let editor = ContentEditor::text(discard);
    let mut opts = EditorOptions::default();
    opts.language = CodeLanguage::Html;
    assert_eq!(editor.props(Some("x"), &opts).language, CodeLanguage::Html);
    opts.language = CodeLanguage::Markdown;
    assert_eq!(editor.props(Some("x"), &opts).language, CodeLanguage::Markdown);
}

#[test]
fn autoformat_switches_track_format_for_every_mode() {
    for mode in [EditorMode::Text, EditorMode::Helpers, EditorMode::Styles] {
        let editor = ContentEditor::new(mode, discard);
        assert_eq!(
            editor.autoformat(&options(Format::Auto)),
            AutoformatOptions {
                format_on_paste: true,
                format_on_type: true
            }
        );
        assert_eq!(
            editor.autoformat(&options(Format::Manual)),
            AutoformatOptions {
                format_on_paste: false,
                format_on_type: false
            }
        );
    }
}

#[test]
fn text_mode_never_suggests() {
    let editor = ContentEditor::text(discard);
    assert!(editor.suggestions(&registry()).is_empty());
}

#[test]
fn styles_mode_suggests_one_reference_per_variable() {
    let editor = ContentEditor::styles(discard);
    let items = editor.suggestions(&registry());
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].label, "${host}");
    assert_eq!(items[0].detail, "Selected host");
    assert_eq!(items[0].kind, SuggestionKind::Property);
    assert_eq!(items[1].label, "${env}");
    assert_eq!(items[1].detail, "Environment");
}

#[test]
fn helpers_mode_puts_catalog_before_variables() {
    let editor = ContentEditor::helpers(discard);
    let vars = registry();
    let items = editor.suggestions(&vars);
    let catalog: Vec<SuggestionItem> = HELPER_SUGGESTIONS.iter().map(SuggestionItem::from).collect();
    assert_eq!(items.len(), catalog.len() + 2);
    assert_eq!(&items[..catalog.len()], catalog.as_slice());
    assert_eq!(&items[catalog.len()..], variable_suggestions(&vars).as_slice());
}

#[test]
fn suggestions_pick_up_registry_changes_between_renders() {
    let editor = ContentEditor::styles(discard);
    let mut vars = registry();
    assert_eq!(editor.suggestions(&vars).len(), 2);
    vars.replace(vec![VariableDescriptor::new("only", "Only")]);
    let items = editor.suggestions(&vars);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label, "${only}");
}

#[test]
fn empty_description_falls_back_to_label() {
    let vars = vec![VariableDescriptor::new("x", "Label X").with_description("")];
    let items = ContentEditor::styles(discard).suggestions(&vars);
    assert_eq!(items[0].detail, "Label X");
}

#[test]
fn props_handle_missing_value_and_minimap_threshold() {
    let editor = ContentEditor::text(discard);
    let opts = EditorOptions::default();

    let empty = editor.props(None, &opts);
    assert_eq!(empty.value, "");
    assert!(!empty.show_minimap);
    assert!(empty.show_line_numbers);
    assert_eq!(empty.height_px, 200);

    let at_threshold = "a".repeat(MINIMAP_THRESHOLD);
    assert!(!editor.props(Some(&at_threshold), &opts).show_minimap);
    let over = "a".repeat(MINIMAP_THRESHOLD + 1);
    assert!(editor.props(Some(&over), &opts).show_minimap);
}

#[test]
fn minimap_threshold_counts_characters_not_bytes() {
    let editor = ContentEditor::helpers(discard);
    let opts = EditorOptions::default();
    let accented = "é".repeat(60);
    assert_eq!(accented.len(), 120);
    assert!(!editor.props(Some(&accented), &opts).show_minimap);

    let over = "é".repeat(MINIMAP_THRESHOLD + 1);
    assert!(editor.props(Some(&over), &opts).show_minimap);
}

#[test]
fn props_clamp_height_to_slider_range() {
    let editor = ContentEditor::text(discard);
    let mut opts = EditorOptions::default();
    opts.height = 20;
    assert_eq!(editor.props(None, &opts).height_px, 100);
    opts.height = 9000;
    assert_eq!(editor.props(None, &opts).height_px, 2000);
}

#[test]
fn blur_and_save_both_commit_text() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink_seen = seen.clone();
    let mut editor = ContentEditor::text(move |text: String| sink_seen.borrow_mut().push(text));

    editor.on_blur("first".to_string());
    editor.on_save("second".to_string());

    assert_eq!(*seen.borrow(), vec!["first".to_string(), "second".to_string()]);
}

#[test]
fn format_on_mount_fires_once_after_delay() {
    let mut editor = ContentEditor::helpers(discard).with_format_delay(Duration::from_millis(100));
    let (action, runs, _) = counting_action();
    let t0 = Instant::now();

    editor.on_mount(action, &options(Format::Auto), t0);
    assert_eq!(editor.next_format_deadline(), Some(t0 + Duration::from_millis(100)));
    assert_eq!(editor.poll_format(t0 + Duration::from_millis(50)), FormatOutcome::Waiting);
    assert_eq!(runs.get(), 0);

    assert_eq!(editor.poll_format(t0 + Duration::from_millis(100)), FormatOutcome::Formatted);
    assert_eq!(editor.poll_format(t0 + Duration::from_secs(5)), FormatOutcome::Idle);
    assert_eq!(runs.get(), 1);
    assert_eq!(editor.next_format_deadline(), None);
}

#[test]
fn format_on_mount_never_fires_when_manual_at_mount() {
    let mut editor = ContentEditor::text(discard);
    let (action, runs, _) = counting_action();
    let t0 = Instant::now();

    editor.on_mount(action, &options(Format::Manual), t0);
    assert!(editor.is_mounted());
    assert_eq!(editor.next_format_deadline(), None);
    assert_eq!(editor.poll_format(t0 + Duration::from_secs(1)), FormatOutcome::Idle);
    assert_eq!(runs.get(), 0);
}

#[test]
fn unmount_before_deadline_drops_pending_format() {
    let mut editor = ContentEditor::styles(discard);
    let (action, runs, _) = counting_action();
    let t0 = Instant::now();

    editor.on_mount(action, &options(Format::Auto), t0);
    editor.on_unmount();

    assert!(!editor.is_mounted());
    assert_eq!(editor.poll_format(t0 + Duration::from_secs(1)), FormatOutcome::Idle);
    assert_eq!(runs.get(), 0);
}

#[test]
fn disposed_surface_failure_is_swallowed() {
    let mut editor = ContentEditor::text(discard);
    let (action, runs, disposed) = counting_action();
    let t0 = Instant::now();

    editor.on_mount(action, &options(Format::Auto), t0);
    disposed.set(true);

    assert_eq!(editor.poll_format(t0 + Duration::from_secs(1)), FormatOutcome::Suppressed);
    assert_eq!(editor.poll_format(t0 + Duration::from_secs(2)), FormatOutcome::Idle);
    assert_eq!(runs.get(), 0);
}

#[test]
fn remount_arms_a_new_one_shot() {
    let mut editor = ContentEditor::text(discard);
    let t0 = Instant::now();
    let (first, first_runs, _) = counting_action();
    editor.on_mount(first, &options(Format::Auto), t0);
    editor.poll_format(t0 + Duration::from_secs(1));
    editor.on_unmount();

    let (second, second_runs, _) = counting_action();
    editor.on_mount(second, &options(Format::Auto), t0 + Duration::from_secs(2));
    editor.poll_format(t0 + Duration::from_secs(3));

    assert_eq!(first_runs.get(), 1);
    assert_eq!(second_runs.get(), 1);
}
