// crates/framematch-ui/src/preview.rs
//
// PreviewBackend over egui's loader cache. An image preview is the file's
// bytes registered under a unique bytes:// URI, decoded lazily by the
// egui_extras image loader; releasing forgets both the bytes and any decoded
// texture. Videos are not decoded, so their reference carries no bytes.

use std::path::Path;

use framematch_core::error::PreviewError;
use framematch_core::media_types::{MediaKind, PreviewRef};
use framematch_core::preview::PreviewBackend;

pub struct EguiPreviewBackend {
    ctx: egui::Context,
}

impl EguiPreviewBackend {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl PreviewBackend for EguiPreviewBackend {
    fn acquire(&mut self, kind: MediaKind, path: &Path) -> Result<PreviewRef, PreviewError> {
        let preview = PreviewRef::new(kind, path);
        if kind == MediaKind::Image {
            let bytes = std::fs::read(path).map_err(|source| PreviewError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;
            self.ctx.include_bytes(preview.uri().to_string(), bytes);
        }
        Ok(preview)
    }

    fn release(&mut self, preview: &PreviewRef) {
        self.ctx.forget_image(preview.uri());
    }
}
