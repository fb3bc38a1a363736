pub mod dialogs;
pub mod format;
pub mod project_dialog;
pub mod project_table;
pub mod summary_tiles;
pub mod theme;
pub mod toolbar;
