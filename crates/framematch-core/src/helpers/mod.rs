pub mod progress;
pub mod url;
