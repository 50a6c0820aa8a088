//! Options file compatibility through the root facade.

use tempfile::TempDir;
use textpanel::models::{CodeLanguage, Format, PanelOptions};

#[test]
fn stored_panel_options_load_with_wire_names() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("options.json");
    let stored = serde_json::json!({
        "editor": { "language": "html", "format": "none", "height": 320 },
        "content": "<h1>{{title}}</h1>",
        "defaultContent": "Nothing here",
        "externalStyles": [{ "id": "s-1", "url": "https://cdn.example.com/a.css" }],
        "wrap": true
    });
    std::fs::write(&path, stored.to_string()).expect("write options");

    let options = PanelOptions::load(&path).expect("load options");
    assert_eq!(options.editor.language, CodeLanguage::Html);
    assert_eq!(options.editor.format, Format::Manual);
    assert_eq!(options.editor.height_px(), 320);
    assert_eq!(options.default_content, "Nothing here");
    assert_eq!(options.external_styles[0].id, "s-1");
    assert!(options.external_scripts.is_empty());

    options.save(&path).expect("save options");
    let raw = std::fs::read_to_string(&path).expect("read back");
    let written: serde_json::Value = serde_json::from_str(&raw).expect("parse back");
    assert_eq!(written["editor"]["format"], "none");
    assert_eq!(written["wrap"], true);
}
