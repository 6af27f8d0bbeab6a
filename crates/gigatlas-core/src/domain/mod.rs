//! Domain entities - the core business objects.

mod category;
mod locale;
mod post;

pub use category::{Category, EnrichedCategory, Slug};
pub use locale::Locale;
pub use post::{Post, PostStatus};
