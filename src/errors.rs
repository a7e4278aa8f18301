use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LangCheckError {
    #[error("Directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    #[error("No valid language files found in {}", .0.display())]
    NoValidDocuments(PathBuf),
}
