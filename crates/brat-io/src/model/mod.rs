//! In-memory annotation model.

mod annotation;
mod document;
mod entity;
mod event;
mod relation;
mod sentence;

pub use annotation::{Annotation, AnnotationKind, Attribute, BratRecord};
pub use document::Document;
pub use entity::{Entity, EntityIndex, EntityKey};
pub(crate) use entity::is_within;
pub use event::Event;
pub use relation::{DEFAULT_ARG, Relation, STAR_ID};
pub use sentence::Sentence;
