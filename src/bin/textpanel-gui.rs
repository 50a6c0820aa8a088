#![cfg(feature = "gui")]
//! Desktop editor sidebar entrypoint.

fn main() {
    if let Err(err) = textpanel::gui::run() {
        eprintln!("textpanel gui failed: {}", err);
        std::process::exit(1);
    }
}
