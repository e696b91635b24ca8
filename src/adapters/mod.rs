// Trait definitions
pub mod slack_service;
pub mod slack_transport;

// Type definitions
pub mod api_response;
pub mod platform_error;
pub mod retry_policy;

// Implementations
pub mod http_slack_transport;
pub mod slack_client;

// Re-exports for convenience
pub use http_slack_transport::HttpSlackTransport;
pub use platform_error::{ErrorContext, PlatformError};
pub use retry_policy::RetryPolicy;
pub use slack_client::SlackClient;
pub use slack_service::SlackService;
pub use slack_transport::{SlackTransport, TransportFailure, TransportResponse};
