//! User interface building blocks shared by the terminal pages
//!
//! This module contains the page router, the bilingual string table, markdown
//! rendering and the loading spinner.

pub mod markdown;
pub mod pages;
pub mod spinner;
pub mod text;

pub use markdown::{MarkdownRenderer, render_markdown};
pub use pages::{Page, PageRouter};
pub use spinner::Spinner;
pub use text::UiText;
