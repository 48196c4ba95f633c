pub mod fs_types;
pub mod history_types;
pub mod predict_types;
