//! Federated search for dx.
//!
//! Queries several sites at once through a [`SearchBackend`] and renders the
//! grouped hits. Only the home site (the first configured one) is shown
//! until the reader asks for results from every site.
//!
//! Hit titles and snippets come from the backend as HTML with `<mark>`
//! highlights; they are sanitized with `ammonia` so nothing but `<mark>`
//! survives.

mod backend;
mod model;
mod sanitize;
mod widget;

pub use backend::{HttpSearchBackend, SearchBackend, SearchError};
pub use model::{Hit, HitContext, SearchResult};
pub use sanitize::{sanitize_highlight, to_plain_text};
pub use widget::{SEARCH_LOADING, SearchWidget, Ticket};
