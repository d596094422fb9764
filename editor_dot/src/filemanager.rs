use std::path::PathBuf;

use lib_dot::FileFilter;
use log::{debug, warn};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageHandlingError {
    #[error("File dialog was canceled")]
    DialogCanceled,

    #[error("Message box was dismissed without confirmation")]
    MessageDismissed,
}

fn dialog(filters: &[FileFilter]) -> FileDialog {
    filters
        .iter()
        .fold(FileDialog::new(), |dialog, (name, extensions)| {
            dialog.add_filter(*name, *extensions)
        })
}

pub fn pick_open_path(filters: &[FileFilter]) -> Result<PathBuf, ImageHandlingError> {
    let path = dialog(filters)
        .pick_file()
        .ok_or(ImageHandlingError::DialogCanceled)?;
    debug!("Open dialog chose {}", path.display());
    Ok(path)
}

pub fn pick_save_path(filters: &[FileFilter]) -> Result<PathBuf, ImageHandlingError> {
    let path = dialog(filters)
        .save_file()
        .ok_or(ImageHandlingError::DialogCanceled)?;
    debug!("Save dialog chose {}", path.display());
    Ok(path)
}

/// Blocks until the user closes the message box.
pub fn show_error(message: &str) -> Result<(), ImageHandlingError> {
    let result = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Error")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();

    match result {
        MessageDialogResult::Ok => Ok(()),
        other => {
            warn!("Error box closed with {:?}", other);
            Err(ImageHandlingError::MessageDismissed)
        }
    }
}
