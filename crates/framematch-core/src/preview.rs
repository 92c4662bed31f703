// crates/framematch-core/src/preview.rs
//
// PreviewManager: per-kind acquire/release discipline for preview references.
//
// The backend does the actual resource work (framematch-ui registers image
// bytes with the egui loader cache and forgets them on release). The manager
// guarantees that at most one reference per kind is live, and that the old
// reference is released before a new one is acquired.
//
// Callers must only invoke set_preview() between frames (the app processes
// form commands after the UI pass), so the reference being replaced has
// already had its last read when it is released.

use std::path::Path;

use crate::error::PreviewError;
use crate::media_types::{MediaKind, PreviewRef};

/// Resource side of a preview reference.
pub trait PreviewBackend {
    fn acquire(&mut self, kind: MediaKind, path: &Path) -> Result<PreviewRef, PreviewError>;
    fn release(&mut self, preview: &PreviewRef);
}

pub struct PreviewManager<B: PreviewBackend> {
    backend: B,
    live:    [Option<PreviewRef>; 2],
}

impl<B: PreviewBackend> PreviewManager<B> {
    pub fn new(backend: B) -> Self {
        Self { backend, live: [None, None] }
    }

    /// Replace the preview for `kind`. `None` clears it.
    ///
    /// The previous reference is released first, even if acquiring the new
    /// one then fails; in that case the slot is left empty.
    pub fn set_preview(
        &mut self,
        kind: MediaKind,
        path: Option<&Path>,
    ) -> Result<Option<PreviewRef>, PreviewError> {
        if let Some(old) = self.live[kind.index()].take() {
            tracing::debug!(kind = ?kind, uri = old.uri(), "releasing preview");
            self.backend.release(&old);
        }
        let Some(path) = path else { return Ok(None) };

        let fresh = self.backend.acquire(kind, path)?;
        tracing::debug!(kind = ?kind, uri = fresh.uri(), "acquired preview");
        self.live[kind.index()] = Some(fresh.clone());
        Ok(Some(fresh))
    }

    pub fn current(&self, kind: MediaKind) -> Option<&PreviewRef> {
        self.live[kind.index()].as_ref()
    }

    pub fn live_count(&self) -> usize {
        self.live.iter().filter(|p| p.is_some()).count()
    }

    /// Release every live reference (form teardown).
    pub fn release_all(&mut self) {
        for slot in &mut self.live {
            if let Some(old) = slot.take() {
                self.backend.release(&old);
            }
        }
    }
}

impl<B: PreviewBackend> Drop for PreviewManager<B> {
    fn drop(&mut self) {
        self.release_all();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    /// Records every acquire/release so tests can check the live set and
    /// that nothing is released twice.
    #[derive(Default)]
    pub(crate) struct Ledger {
        pub live:     HashSet<PreviewRef>,
        pub released: Vec<PreviewRef>,
        pub fail_on:  Option<String>,
    }

    #[derive(Clone, Default)]
    pub(crate) struct FakeBackend(pub Rc<RefCell<Ledger>>);

    impl PreviewBackend for FakeBackend {
        fn acquire(&mut self, kind: MediaKind, path: &Path) -> Result<PreviewRef, PreviewError> {
            let mut ledger = self.0.borrow_mut();
            if ledger.fail_on.as_deref() == path.to_str() {
                return Err(PreviewError::Unreadable {
                    path:   path.to_path_buf(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
                });
            }
            let p = PreviewRef::new(kind, path);
            ledger.live.insert(p.clone());
            Ok(p)
        }

        fn release(&mut self, preview: &PreviewRef) {
            let mut ledger = self.0.borrow_mut();
            assert!(ledger.live.remove(preview), "released a reference that was not live");
            ledger.released.push(preview.clone());
        }
    }

    #[test]
    fn replacing_releases_previous_exactly_once() {
        let backend = FakeBackend::default();
        let ledger = backend.0.clone();
        let mut mgr = PreviewManager::new(backend);

        let mut issued = Vec::new();
        for name in ["a.png", "b.png", "c.png", "d.png"] {
            issued.push(mgr.set_preview(MediaKind::Image, Some(Path::new(name))).unwrap().unwrap());
            assert_eq!(ledger.borrow().live.len(), 1);
        }

        let l = ledger.borrow();
        assert_eq!(l.released, issued[..3].to_vec());
        assert!(l.live.contains(&issued[3]));
        assert_eq!(mgr.current(MediaKind::Image), Some(&issued[3]));
    }

    #[test]
    fn kinds_are_independent() {
        let backend = FakeBackend::default();
        let ledger = backend.0.clone();
        let mut mgr = PreviewManager::new(backend);

        mgr.set_preview(MediaKind::Image, Some(Path::new("a.png"))).unwrap();
        mgr.set_preview(MediaKind::Video, Some(Path::new("a.mp4"))).unwrap();
        mgr.set_preview(MediaKind::Video, Some(Path::new("b.mp4"))).unwrap();

        assert_eq!(mgr.live_count(), 2);
        assert_eq!(ledger.borrow().live.len(), 2);
        assert_eq!(ledger.borrow().released.len(), 1);
    }

    #[test]
    fn clearing_releases_and_leaves_empty() {
        let backend = FakeBackend::default();
        let ledger = backend.0.clone();
        let mut mgr = PreviewManager::new(backend);

        mgr.set_preview(MediaKind::Image, Some(Path::new("a.png"))).unwrap();
        assert_eq!(mgr.set_preview(MediaKind::Image, None).unwrap(), None);
        assert!(mgr.current(MediaKind::Image).is_none());
        assert!(ledger.borrow().live.is_empty());
    }

    #[test]
    fn failed_acquire_still_releases_old() {
        let backend = FakeBackend::default();
        let ledger = backend.0.clone();
        let mut mgr = PreviewManager::new(backend);

        mgr.set_preview(MediaKind::Image, Some(Path::new("a.png"))).unwrap();
        ledger.borrow_mut().fail_on = Some("broken.png".into());
        assert!(mgr.set_preview(MediaKind::Image, Some(Path::new("broken.png"))).is_err());

        assert!(mgr.current(MediaKind::Image).is_none());
        assert!(ledger.borrow().live.is_empty());
    }

    #[test]
    fn drop_releases_everything() {
        let backend = FakeBackend::default();
        let ledger = backend.0.clone();
        {
            let mut mgr = PreviewManager::new(backend);
            mgr.set_preview(MediaKind::Image, Some(Path::new("a.png"))).unwrap();
            mgr.set_preview(MediaKind::Video, Some(Path::new("a.mp4"))).unwrap();
        }
        assert!(ledger.borrow().live.is_empty());
        assert_eq!(ledger.borrow().released.len(), 2);
    }
}
