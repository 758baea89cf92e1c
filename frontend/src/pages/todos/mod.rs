pub mod components;
pub mod panel;
pub mod repository;
pub mod utils;

pub use panel::{TodoCreatePage, TodoDetailPage, TodosIndex, TodosPage};
