//! Zoon renderer of the poets page.
//!
//! Renders the scenes built by `poets-scene` and feeds DOM events back into
//! its [`App`](poets_scene::App).

pub mod automation;
pub mod config;
pub mod dom;
pub mod form;
pub mod page;
pub mod table;
pub mod view;

pub use config::{LOG_DEBUG, MOUNT_ID, PageConfig};
pub use page::PoetsPage;
pub use view::PoetView;

pub use poets_scene;
pub use zoon;
