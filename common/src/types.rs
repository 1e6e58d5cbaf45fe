//! Wire and domain types
//!
//! Shared by the browser dashboard and the native client:
//! - ProcessRecord: one legal case row of the table
//! - Folder: destination of the batch assignment
//! - ProcessPage: paged list envelope returned by `GET /processos/`

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review status of a process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProcessStatus {
    #[default]
    Pendente,
    Aprovado,
    Rejeitado,
}

impl ProcessStatus {
    pub const ALL: [ProcessStatus; 3] = [
        ProcessStatus::Pendente,
        ProcessStatus::Aprovado,
        ProcessStatus::Rejeitado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessStatus::Pendente => "PENDENTE",
            ProcessStatus::Aprovado => "APROVADO",
            ProcessStatus::Rejeitado => "REJEITADO",
        }
    }

    /// Human label used by the table and the CLI
    pub fn label(&self) -> &'static str {
        match self {
            ProcessStatus::Pendente => "Pendente",
            ProcessStatus::Aprovado => "Aprovado",
            ProcessStatus::Rejeitado => "Rejeitado",
        }
    }

    /// Result of clicking the control for `clicked` while the row holds `self`.
    ///
    /// Clicking the active control resets to PENDENTE, any other control
    /// sets its value directly.
    pub fn toggled_by(self, clicked: ProcessStatus) -> ProcessStatus {
        if self == clicked {
            ProcessStatus::Pendente
        } else {
            clicked
        }
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pendente" | "p" => Ok(ProcessStatus::Pendente),
            "aprovado" | "a" => Ok(ProcessStatus::Aprovado),
            "rejeitado" | "r" => Ok(ProcessStatus::Rejeitado),
            _ => Err(format!(
                "Unknown status: {}. Use pendente, aprovado, or rejeitado",
                s
            )),
        }
    }
}

/// One process row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub id: i64,

    #[serde(default, deserialize_with = "lenient_string")]
    pub numero_processo: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub nome_reu: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub cpf_cnpj_reu: String,

    /// Claim value in pt-BR format ("1.234,56")
    #[serde(default, deserialize_with = "lenient_string")]
    pub valor_causa: String,

    #[serde(default)]
    pub status: ProcessStatus,
}

/// Strings pass through; null, numbers and anything else become empty
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}

/// Folder offered by the assignment dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: i64,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,

    #[serde(default)]
    pub processos: Vec<ProcessRecord>,
}

/// `GET /processos/` response envelope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessPage {
    #[serde(default)]
    pub data: Vec<ProcessRecord>,

    #[serde(default)]
    pub total_count: u64,
}

impl ProcessPage {
    /// True when the server holds more rows than it returned
    pub fn is_truncated(&self) -> bool {
        self.total_count > self.data.len() as u64
    }
}

/// `PATCH /processos/{id}/status` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: ProcessStatus,
}

/// `POST /folders/{id}/add_processos/` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddProcessosRequest {
    pub processo_ids: Vec<i64>,
}
