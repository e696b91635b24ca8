// Mock implementations for adapter layer testing
#![allow(dead_code)]

pub mod mock_progress;
pub mod mock_slack_service;
pub mod scripted_transport;

pub use mock_progress::RecordingProgress;
pub use mock_slack_service::MockSlackService;
pub use scripted_transport::ScriptedTransport;
