//! Configuration section definitions.
//!
//! Each module corresponds to a section in `feed-preview.toml`:
//!
//! | Module   | TOML Section | Purpose                                |
//! |----------|--------------|----------------------------------------|
//! | `page`   | `[page]`     | Language and fixed labels of the page  |
//! | `assets` | `[assets]`   | Stylesheet, icon, logo, viewer script  |
//! | `feed`   | `[feed]`     | Namespace feed elements are read from  |

mod assets;
mod feed;
mod page;

pub use assets::AssetsConfig;
pub use feed::FeedConfig;
pub use page::PageConfig;
