pub mod create_form;
pub mod detail;
pub mod list_header;
pub mod list_pane;
