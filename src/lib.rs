pub mod config;
pub mod error;
pub mod explorer;
pub mod logging;
pub mod posture_client;
pub mod query_params;
pub mod response_handling;
pub mod response_logging;
pub mod session;
pub mod string_extraction;
pub mod view;
