//! Static website export for a movie collection.
//!
//! Renders one profile's collection into a standalone HTML page (styles
//! embedded, no assets to copy around). The page shows whatever it is
//! given; deciding that an empty collection is not worth exporting is the
//! caller's call.

pub mod error;
pub mod page;

pub use error::SiteError;
pub use page::{render_page, write_site};
