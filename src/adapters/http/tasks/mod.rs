//! HTTP adapter for ClickUp task endpoints.
//!
//! - `GET /api/titleorder/tasks` - Tasks of the title order list
//! - `GET /api/titleorder/tasks/:task_id/pdf` - PDF generated from a task
//! - `GET /api/data` - Authorized ClickUp user

pub mod handlers;
pub mod routes;

pub use handlers::TasksApiError;
pub use routes::task_routes;
