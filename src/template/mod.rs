//! Two-section templates and placeholder substitution.
//!
//! A template file holds a query section and a code section separated by a
//! line containing exactly `---`:
//!
//! ```text
//! Generate a {model} completion with temperature {temperature}
//! ---
//! openai.ChatCompletion.create(model="{model}", temperature={temperature})
//! ```
//!
//! `{name}` placeholders are replaced per parameter record. Use `{{` and `}}`
//! for literal braces.

mod loader;
mod render;

pub use loader::{SEPARATOR, Template};
pub use render::{
    RenderedPair, TemplateError, is_placeholder_name, placeholders, render_pairs,
    render_template,
};
