use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

/// Failures surfaced by the service layer. The messages are shown to API
/// clients as-is.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Esse registro de profissional não existe na nossa base de dados.")]
    ProfessionalNotFound,

    #[error("Esse registro de contato não existe na nossa base de dados.")]
    ContactNotFound,

    #[error(
        "Telefone inválido, telefone precisa ter entre 10 e 11 caracteres e não pode ter caracteres especiais nem letras"
    )]
    InvalidPhone,

    #[error("Telefone já cadastrado na base de dados")]
    DuplicatePhone,

    #[error(
        "O cargo não foi digitado corretamente, cargos disponiveis: Desenvolvedor, Designer, Suporte, Tester"
    )]
    InvalidRole,

    #[error("{0}")]
    Form(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        ServiceError::Internal(err.to_string())
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        match err {
            TypeConstraintError::InvalidPhone => ServiceError::InvalidPhone,
            TypeConstraintError::InvalidRole(_) => ServiceError::InvalidRole,
            other => ServiceError::Form(other.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::Form(err.to_string())
    }
}
