pub mod auth;
pub mod complaint;
pub mod page;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, UserProfile};
pub use complaint::{
    ComplaintDetail, ComplaintPriority, ComplaintStatus, ComplaintSummary, ComplaintUpdate,
    NewComplaint, PriorityFilter,
};
pub use page::{Page, PageRequest};
