//! Tab content: `page` wraps one open tab, `registry` maps its key to a view.

pub mod page;
pub mod registry;

pub use page::TabPage;
