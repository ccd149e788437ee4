//! Unified error taxonomy for the SDK.
//!
//! Store actions either set a store-scoped error string and re-throw, or log
//! and swallow - the choice is per-action, documented on each store. This
//! module only defines the error values themselves.

use indexmap::IndexMap;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by stores and services.
#[derive(Debug, Error)]
pub enum Error {
    /// The action requires a session and none is present.
    #[error("Usuário não autenticado. Faça login para continuar.")]
    NotAuthenticated,

    /// The login endpoint rejected the credentials.
    #[error("Falha na autenticação")]
    Authentication,

    /// A success response was structurally invalid (missing token or user).
    #[error("Resposta da API inválida.")]
    InvalidResponse,

    /// Server-reported rejection carrying a user-facing message.
    #[error("{0}")]
    Validation(String),

    /// Non-success HTTP status, with whatever the server said about it.
    #[error("API error: {status}")]
    Api {
        status: StatusCode,
        /// Top-level `message` field of the error body, when present.
        message: Option<String>,
        /// Per-field validation errors (`errors` map), when present.
        /// Insertion-ordered so the payload's first field stays first.
        field_errors: IndexMap<String, Vec<String>>,
    },

    /// Transport failure.
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON (de)serialization failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status associated with the error, when any.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network(err) => err.status(),
            _ => None,
        }
    }

    /// True for 401/403 responses, i.e. the session is no longer accepted.
    #[must_use]
    pub fn is_auth_rejection(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        )
    }

    /// The server-provided top-level message, when any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// The first message of the first field in the server's validation
    /// error map, when any. "First" is the payload's field order, not
    /// alphabetical.
    #[must_use]
    pub fn first_field_error(&self) -> Option<&str> {
        match self {
            Self::Api { field_errors, .. } => field_errors
                .values()
                .next()
                .and_then(|messages| messages.first())
                .map(String::as_str),
            _ => None,
        }
    }
}

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::InvalidResponse.to_string(),
            "Resposta da API inválida."
        );
        assert_eq!(Error::Authentication.to_string(), "Falha na autenticação");
        assert_eq!(
            Error::Validation("Validation failed".to_string()).to_string(),
            "Validation failed"
        );
    }

    #[test]
    fn test_auth_rejection() {
        let unauthorized = Error::Api {
            status: StatusCode::UNAUTHORIZED,
            message: None,
            field_errors: IndexMap::new(),
        };
        assert!(unauthorized.is_auth_rejection());

        let forbidden = Error::Api {
            status: StatusCode::FORBIDDEN,
            message: None,
            field_errors: IndexMap::new(),
        };
        assert!(forbidden.is_auth_rejection());

        let server_error = Error::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
            field_errors: IndexMap::new(),
        };
        assert!(!server_error.is_auth_rejection());
        assert!(!Error::NotAuthenticated.is_auth_rejection());
    }

    #[test]
    fn test_first_field_error() {
        let mut field_errors = IndexMap::new();
        field_errors.insert(
            "Name".to_string(),
            vec!["Nome é obrigatório".to_string(), "ignored".to_string()],
        );
        field_errors.insert("Price".to_string(), vec!["Preço inválido".to_string()]);

        let err = Error::Api {
            status: StatusCode::BAD_REQUEST,
            message: None,
            field_errors,
        };
        assert_eq!(err.first_field_error(), Some("Nome é obrigatório"));
    }

    #[test]
    fn test_first_field_error_keeps_insertion_order() {
        // "Preco" sorts after "Nome"; the first inserted field must win.
        let mut field_errors = IndexMap::new();
        field_errors.insert("Preco".to_string(), vec!["Preço inválido".to_string()]);
        field_errors.insert("Nome".to_string(), vec!["Nome é obrigatório".to_string()]);

        let err = Error::Api {
            status: StatusCode::BAD_REQUEST,
            message: None,
            field_errors,
        };
        assert_eq!(err.first_field_error(), Some("Preço inválido"));
    }

    #[test]
    fn test_first_field_error_empty() {
        let err = Error::Api {
            status: StatusCode::BAD_REQUEST,
            message: Some("boom".to_string()),
            field_errors: IndexMap::new(),
        };
        assert_eq!(err.first_field_error(), None);
        assert_eq!(err.server_message(), Some("boom"));
    }
}
