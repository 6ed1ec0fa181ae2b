pub mod repository;
pub mod sample_data;

pub use repository::JobRepositoryImpl;
