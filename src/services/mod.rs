pub mod api_client;
pub mod auth_service;
pub mod complaint_service;
pub mod platform;
pub mod transport;

pub use api_client::{ApiClient, AuthInterceptor, Interceptor};
pub use auth_service::AuthService;
pub use complaint_service::ComplaintService;
pub use platform::{NotificationLevel, Navigator, Notifier, Platform, Scheduler};
pub use transport::{GlooTransport, HttpMethod, HttpRequest, HttpResponse, Transport};
