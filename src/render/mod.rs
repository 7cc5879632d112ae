//! Rendering: content schema in, HTML documents out.
//!
//! Everything here is pure string synthesis. The page shell walks the
//! schema and emits markup; [`verify`] re-parses rendered output to
//! confirm the shell's structural invariants.

mod blocks;
pub mod css;
mod escape;
mod page;
pub mod slug;
pub mod verify;

pub use css::{STYLESHEET, stylesheet_filename, stylesheet_route};
pub use escape::{escape_attr, escape_html};
pub use page::{render_page, render_site_index, render_track_index};
