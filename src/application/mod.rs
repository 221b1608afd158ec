pub mod auto_upload;
pub mod editor;
