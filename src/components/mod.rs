//! UI Components
//!
//! Pages and the pieces they are built from.

mod delete_confirm_button;
mod header;
mod log_panel;
mod login;
mod messages;
mod project_detail;
mod project_list;
mod register;
mod task_form;
mod task_row;

pub use delete_confirm_button::DeleteConfirmButton;
pub use header::Header;
pub use log_panel::LogPanel;
pub use login::Login;
pub use messages::{ErrorMessage, SuccessMessage};
pub use project_detail::ProjectDetail;
pub use project_list::ProjectList;
pub use register::Register;
pub use task_form::TaskForm;
pub use task_row::TaskRow;
