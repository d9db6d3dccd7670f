pub mod login_viewmodel;
pub mod register_viewmodel;
pub mod dashboard_viewmodel;
pub mod deleted_viewmodel;
pub mod complaint_viewmodel;

pub use login_viewmodel::LoginViewModel;
pub use register_viewmodel::RegisterViewModel;
pub use dashboard_viewmodel::DashboardViewModel;
pub use deleted_viewmodel::DeletedViewModel;
pub use complaint_viewmodel::ComplaintViewModel;
