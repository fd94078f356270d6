pub mod connect;
pub mod consent;
pub mod host;
pub mod processing;
pub mod review;
pub mod welcome;

pub use connect::ConnectStep;
pub use consent::ConsentStep;
pub use host::HostPage;
pub use processing::ProcessingStep;
pub use review::ReviewStep;
pub use welcome::WelcomeStep;
