//! Helper functions shared by the page renderer and the display layer

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
