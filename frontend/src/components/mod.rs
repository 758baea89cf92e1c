pub mod confirm_dialog;
pub mod empty_state;
pub mod filters;
pub mod forms;
pub mod guard;
pub mod layout;
pub mod master_detail;
pub mod pagination;
pub mod toast;
