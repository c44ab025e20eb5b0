//! Schema inference for `annotation.conf` and `visual.conf`.

mod grammar;
mod visual;

pub use grammar::{AnnotationSchema, merge_argument_types};
pub use visual::{pastel_color, pastel_color_with, render_visual_config, render_visual_config_with};
