use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;

pub fn show_instructions_dialog(app: &adw::Application) -> adw::AlertDialog {
    let dialog = adw::AlertDialog::new(
        Some("Instructions"),
        Some(
            "Arrange the 16 cards so that every row, every column and both\n\
diagonals contain each rank and each suit exactly once.\n\
Tap two cards to swap them, or drag one card onto another.",
        ),
    );
    dialog.add_response("ok", "Got it");
    dialog.set_default_response(Some("ok"));
    dialog.set_close_response("ok");
    dialog.present(app.active_window().as_ref());
    dialog
}

pub fn show_about_dialog(app: &adw::Application) -> adw::AboutDialog {
    let dialog = adw::AboutDialog::builder()
        .application_name("Quadrille")
        .application_icon("io.github.quadrille.quadrille")
        .developer_name("Quadrille contributors")
        .developers(vec!["Quadrille contributors"])
        .version("1.0.0")
        .comments("A 4\u{d7}4 card-arrangement puzzle.")
        .issue_url("https://github.com/quadrille/quadrille/issues")
        .website("https://github.com/quadrille/quadrille")
        .build();
    dialog.add_legal_section(
        "Quadrille",
        Some("\u{a9} 2026 Quadrille contributors"),
        gtk::License::MitX11,
        None,
    );
    dialog.present(app.active_window().as_ref());
    dialog
}
