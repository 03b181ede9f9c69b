//! Compile-time and startup configuration of the page.

use poets_scene::field::DEFAULT_HEADERS;

/// Id of the element the app mounts into.
pub const MOUNT_ID: &str = "app";

/// Console tracing of submits, toggle changes and table renders.
/// Enable with the `debug-events` feature.
pub const LOG_DEBUG: bool = cfg!(feature = "debug-events");

#[derive(Clone, Debug)]
pub struct PageConfig {
    /// Table headers in column order. The `"Szerelme"` header spans two columns.
    pub headers: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            headers: DEFAULT_HEADERS.iter().map(|header| header.to_string()).collect(),
        }
    }
}

impl PageConfig {
    pub fn with_headers<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
        }
    }
}
