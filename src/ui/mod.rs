//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod layout;

use crate::app::{App, Focus};
use crate::state::FieldName;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let banner = app.form.status().banner();
    let layout = layout::create_layout(frame.area(), banner.map(|(_, message)| message));

    layout::draw_header(frame, layout.header);

    let fields = app.form.fields();
    for (name, area) in FieldName::ALL.into_iter().zip(layout.fields) {
        field_renderer::draw_field(
            frame,
            area,
            name,
            fields.get(name),
            app.focus == Focus::Field(name),
        );
    }

    if let Some((kind, message)) = banner {
        components::render_banner(frame, layout.banner, kind, message);
    }

    let label = if app.form.status().is_submitting() {
        "Submitting..."
    } else {
        "Submit Admission"
    };
    components::render_button(
        frame,
        layout.button,
        label,
        app.focus == Focus::SubmitButton,
        app.submit_enabled(),
    );

    if let Some(hint) = &app.hint {
        layout::draw_hint(frame, layout.hint, hint);
    }

    layout::draw_status_bar(frame, layout.status_bar, app);
}
