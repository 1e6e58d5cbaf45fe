//! Error types

use thiserror::Error;

/// Failure classes the dashboard distinguishes when reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected call or non-2xx response
    Network,
    /// Guard violation such as an empty selection
    Validation,
    /// Response to a fetch that was superseded by a newer one
    StaleData,
    /// Local configuration or decoding problem
    Local,
}

/// Shared error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP {status}: {message}")]
    Network { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Stale response for fetch #{ticket} (latest is #{latest})")]
    StaleData { ticket: u64, latest: u64 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Build a network error from a status code and a raw response body.
    ///
    /// FastAPI error bodies look like `{"detail": "..."}`; the detail text is
    /// preferred over the raw body when present.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
            .unwrap_or_else(|| body.trim().to_string());
        Error::Network { status, message }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Network { .. } | Error::Transport(_) => ErrorKind::Network,
            Error::Validation(_) => ErrorKind::Validation,
            Error::StaleData { .. } => ErrorKind::StaleData,
            Error::Json(_) | Error::Config(_) => ErrorKind::Local,
        }
    }

    /// Message shown to the user in the page or snackbar
    pub fn user_message(&self) -> String {
        match self {
            Error::Network { status: 401, .. } => {
                "Sessão expirada ou não autorizada. Faça login novamente.".to_string()
            }
            Error::Network { message, .. } if !message.is_empty() => message.clone(),
            Error::Network { .. } | Error::Transport(_) => {
                "Falha ao comunicar com a API. Verifique se a API está em execução.".to_string()
            }
            Error::Validation(message) => message.clone(),
            Error::StaleData { .. } => "Dados desatualizados descartados.".to_string(),
            Error::Json(_) => "Resposta inválida da API.".to_string(),
            Error::Config(message) => format!("Erro de configuração: {}", message),
        }
    }
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;
