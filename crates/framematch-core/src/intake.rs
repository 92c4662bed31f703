// crates/framematch-core/src/intake.rs
//
// FileIntake: one slot per MediaKind, filled from either the file picker or
// an OS drag-and-drop. Both paths end in assign(), which reads the file's
// metadata, swaps the preview and stores the slot.
//
// Type filtering is advisory. The picker shows MediaKind::extensions(), but a
// dropped .txt on the image zone is still accepted here; the UI only flags it.

use std::path::{Path, PathBuf};

use crate::error::IntakeError;
use crate::media_types::{DroppedFile, MediaKind, SelectedFile};
use crate::preview::{PreviewBackend, PreviewManager};

pub struct FileIntake<B: PreviewBackend> {
    previews: PreviewManager<B>,
    slots:    [Option<SelectedFile>; 2],
}

impl<B: PreviewBackend> FileIntake<B> {
    pub fn new(backend: B) -> Self {
        Self {
            previews: PreviewManager::new(backend),
            slots:    [None, None],
        }
    }

    /// Picker result. `None` means the dialog was cancelled.
    /// Returns whether the slot changed.
    pub fn select_file(&mut self, kind: MediaKind, path: Option<PathBuf>) -> Result<bool, IntakeError> {
        match path {
            Some(path) => self.assign(kind, &path).map(|_| true),
            None       => Ok(false),
        }
    }

    /// Drop onto the `kind` zone. The first entry carrying a path wins; an
    /// empty transfer is a no-op.
    pub fn drop_file(&mut self, kind: MediaKind, files: &[DroppedFile]) -> Result<bool, IntakeError> {
        match files.iter().find_map(|f| f.path.as_deref()) {
            Some(path) => self.assign(kind, path).map(|_| true),
            None => {
                tracing::debug!(kind = ?kind, "drop without a file path ignored");
                Ok(false)
            }
        }
    }

    fn assign(&mut self, kind: MediaKind, path: &Path) -> Result<(), IntakeError> {
        let meta = std::fs::metadata(path).map_err(|source| IntakeError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;
        if !meta.is_file() {
            return Err(IntakeError::NotAFile { path: path.to_path_buf() });
        }

        // The old slot goes away together with its preview, even if the new
        // preview cannot be produced.
        self.slots[kind.index()] = None;
        let preview = self
            .previews
            .set_preview(kind, Some(path))?
            .ok_or_else(|| IntakeError::NotAFile { path: path.to_path_buf() })?;

        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        if !kind.accepts(path) {
            tracing::warn!(kind = ?kind, file = %name, "selected file does not look like the expected type");
        }
        tracing::info!(kind = ?kind, file = %name, bytes = meta.len(), "file selected");

        self.slots[kind.index()] = Some(SelectedFile {
            kind,
            path: path.to_path_buf(),
            name,
            size_bytes: meta.len(),
            preview,
        });
        Ok(())
    }

    pub fn clear(&mut self, kind: MediaKind) {
        self.slots[kind.index()] = None;
        // Clearing never acquires, so it cannot fail.
        let _ = self.previews.set_preview(kind, None);
    }

    pub fn slot(&self, kind: MediaKind) -> Option<&SelectedFile> {
        self.slots[kind.index()].as_ref()
    }

    pub fn both_selected(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Form teardown.
    pub fn release_all(&mut self) {
        self.slots = [None, None];
        self.previews.release_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::tests::FakeBackend;
    use std::io::Write;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let p = dir.join(name);
        let mut f = std::fs::File::create(&p).unwrap();
        f.write_all(b"0123456789").unwrap();
        p
    }

    #[test]
    fn picker_and_drop_fill_the_same_slot() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(dir.path(), "a.png");
        let b = touch(dir.path(), "b.png");
        let backend = FakeBackend::default();
        let ledger = backend.0.clone();
        let mut intake = FileIntake::new(backend);

        assert!(intake.select_file(MediaKind::Image, Some(a.clone())).unwrap());
        let first = intake.slot(MediaKind::Image).unwrap().preview.clone();
        assert_eq!(intake.slot(MediaKind::Image).unwrap().name, "a.png");
        assert_eq!(intake.slot(MediaKind::Image).unwrap().size_bytes, 10);

        let drop = [DroppedFile { path: Some(b.clone()), name: "b.png".into() }];
        assert!(intake.drop_file(MediaKind::Image, &drop).unwrap());
        let slot = intake.slot(MediaKind::Image).unwrap();
        assert_eq!(slot.path, b);
        assert_ne!(slot.preview, first);
        assert_eq!(ledger.borrow().released, vec![first]);
        assert_eq!(ledger.borrow().live.len(), 1);
    }

    #[test]
    fn empty_drop_and_cancelled_picker_are_noops() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(dir.path(), "a.mp4");
        let mut intake = FileIntake::new(FakeBackend::default());
        intake.select_file(MediaKind::Video, Some(a.clone())).unwrap();

        assert!(!intake.drop_file(MediaKind::Video, &[]).unwrap());
        assert!(!intake.drop_file(MediaKind::Video, &[DroppedFile::default()]).unwrap());
        assert!(!intake.select_file(MediaKind::Video, None).unwrap());
        assert_eq!(intake.slot(MediaKind::Video).unwrap().path, a);
    }

    #[test]
    fn mismatched_type_is_not_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let txt = touch(dir.path(), "notes.txt");
        let mut intake = FileIntake::new(FakeBackend::default());
        assert!(intake.select_file(MediaKind::Image, Some(txt)).unwrap());
        assert!(intake.slot(MediaKind::Image).is_some());
    }

    #[test]
    fn missing_file_is_an_error_and_keeps_previous() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(dir.path(), "a.png");
        let mut intake = FileIntake::new(FakeBackend::default());
        intake.select_file(MediaKind::Image, Some(a.clone())).unwrap();

        let err = intake.select_file(MediaKind::Image, Some(dir.path().join("nope.png")));
        assert!(matches!(err, Err(IntakeError::Metadata { .. })));
        assert_eq!(intake.slot(MediaKind::Image).unwrap().path, a);
    }

    #[test]
    fn directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut intake = FileIntake::new(FakeBackend::default());
        let err = intake.select_file(MediaKind::Video, Some(dir.path().to_path_buf()));
        assert!(matches!(err, Err(IntakeError::NotAFile { .. })));
    }

    #[test]
    fn clear_and_teardown_release_previews() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(dir.path(), "a.png");
        let v = touch(dir.path(), "v.mp4");
        let backend = FakeBackend::default();
        let ledger = backend.0.clone();
        let mut intake = FileIntake::new(backend);
        intake.select_file(MediaKind::Image, Some(a)).unwrap();
        intake.select_file(MediaKind::Video, Some(v)).unwrap();
        assert!(intake.both_selected());

        intake.clear(MediaKind::Image);
        assert!(!intake.both_selected());
        assert_eq!(ledger.borrow().live.len(), 1);

        intake.release_all();
        assert!(ledger.borrow().live.is_empty());
        assert_eq!(ledger.borrow().released.len(), 2);
    }
}
