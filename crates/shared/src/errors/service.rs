use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repo(#[from] RepositoryError),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Repo(e) if e.is_not_found())
    }

    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(self, ServiceError::Repo(RepositoryError::DeadlineExceeded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_repository_errors() {
        let missing = ServiceError::from(RepositoryError::NotFound("product"));
        assert!(missing.is_not_found());
        assert!(!missing.is_deadline_exceeded());
        assert_eq!(missing.to_string(), "product not found");

        let late = ServiceError::from(RepositoryError::DeadlineExceeded);
        assert!(late.is_deadline_exceeded());
        assert!(!late.is_not_found());
    }
}
