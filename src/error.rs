use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Core(#[from] processos_common::Error),

    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Processo não encontrado: {0}")]
    ProcessNotFound(i64),

    #[error("Pasta não encontrada: {0}")]
    FolderNotFound(i64),

    #[error("Página {page} fora do intervalo (total de páginas: {pages})")]
    PageOutOfRange { page: usize, pages: usize },

    #[error("Falha ao carregar os dados: {0}")]
    FetchFailed(String),

    #[error("Status do processo {id} não foi alterado: {message}")]
    StatusRejected { id: i64, message: String },

    #[error("Erro ao adicionar processos: {0}")]
    AssignFailed(String),

    #[error("Erro ao criar cliente HTTP: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Erro de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
