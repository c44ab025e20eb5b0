//! Colours for the `visual.conf` companion file.

use super::grammar::AnnotationSchema;

/// A random light colour as `#rrggbb`; every channel lies in `131..=255`.
pub fn pastel_color() -> String {
    pastel_color_with(&mut fastrand::Rng::new())
}

/// Like [`pastel_color`], drawing from the given generator.
pub fn pastel_color_with(rng: &mut fastrand::Rng) -> String {
    let (r, g, b) = (rng.u8(131..=255), rng.u8(131..=255), rng.u8(131..=255));
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Render a `visual.conf` giving every entity and event type a background
/// colour.
pub fn render_visual_config(schema: &AnnotationSchema) -> String {
    render_visual_config_with(schema, &mut fastrand::Rng::new())
}

/// Like [`render_visual_config`], drawing colours from the given generator.
pub fn render_visual_config_with(schema: &AnnotationSchema, rng: &mut fastrand::Rng) -> String {
    let mut out = String::from("[labels]\n\n[drawing]\n\n");
    let events = schema.events.keys().map(String::as_str);
    for label in schema.plain_entity_types().into_iter().chain(events) {
        out.push_str(&format!("{}\tbgColor:{}\n", label, pastel_color_with(rng)));
    }
    out
}
