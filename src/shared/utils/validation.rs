use crate::shared::application::PaginationParams;
use crate::shared::errors::AppError;

/// Largest page a caller may request
pub const MAX_PAGE_SIZE: u32 = 100;

pub struct Validator;

impl Validator {
    pub fn validate_pagination(params: &PaginationParams) -> Result<(), AppError> {
        if params.page == 0 {
            return Err(AppError::ValidationError(
                "Page numbers start at 1".to_string(),
            ));
        }
        if params.page_size == 0 {
            return Err(AppError::ValidationError(
                "Page size must be positive".to_string(),
            ));
        }
        if params.page_size > MAX_PAGE_SIZE {
            return Err(AppError::ValidationError(format!(
                "Page size cannot exceed {}",
                MAX_PAGE_SIZE
            )));
        }
        Ok(())
    }
}
