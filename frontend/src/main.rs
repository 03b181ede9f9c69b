use poets_renderer_zoon::zoon::*;
use poets_renderer_zoon::{MOUNT_ID, PageConfig, PoetsPage};

fn main() {
    start_app(MOUNT_ID, || PoetsPage::new(PageConfig::default()));
}
