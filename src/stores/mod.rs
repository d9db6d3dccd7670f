pub mod session_manager;
pub mod complaint_list_store;

pub use session_manager::SessionManager;
pub use complaint_list_store::{ComplaintListStore, FetchParams};
