// Shared Kernel
// Cross-cutting pieces used by every bounded context

pub mod application; // Shared application layer patterns (pagination)
pub mod config; // Environment configuration
pub mod errors; // Shared error types
pub mod utils; // Logging, validation, date/time helpers

// Re-exports for convenience
pub use config::AppConfig;
pub use errors::{AppError, AppResult};
