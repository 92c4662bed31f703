// crates/framematch-core/src/notify.rs
//
// Fire-and-forget user notifications. Implementations must never fail the
// caller; the upload flow does not look at what happens to a notice.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Sticky "work in progress" notice, removed by dismiss_pending().
    Loading,
    Info,
    Success,
    Error,
}

pub trait Notifier {
    fn notify(&mut self, level: NoticeLevel, message: &str);
    /// Remove any pending `Loading` notice.
    fn dismiss_pending(&mut self);
}
