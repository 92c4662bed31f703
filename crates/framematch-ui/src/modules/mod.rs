// crates/framematch-ui/src/modules/mod.rs
//
// Panel registry. Panels read a FormView snapshot and push FormCommands;
// app.rs applies the commands after the UI pass.

pub mod results;
pub mod upload_form;

use egui::Ui;
use framematch_core::commands::FormCommand;
use framematch_core::media_types::{MediaKind, SelectedFile};
use framematch_core::state::{PageState, UploadState};

/// Read-only view of everything a panel may draw from.
pub struct FormView<'a> {
    pub image:    Option<&'a SelectedFile>,
    pub video:    Option<&'a SelectedFile>,
    pub upload:   &'a UploadState,
    pub page:     &'a PageState,
}

impl FormView<'_> {
    pub fn slot(&self, kind: MediaKind) -> Option<&SelectedFile> {
        match kind {
            MediaKind::Image => self.image,
            MediaKind::Video => self.video,
        }
    }
}

/// Every panel implements this trait.
pub trait PanelModule {
    fn name(&self) -> &str;
    fn ui(&mut self, ui: &mut Ui, view: &FormView, cmd: &mut Vec<FormCommand>);
}
