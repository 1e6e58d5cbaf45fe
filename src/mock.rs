//! In-memory `ProcessApi` for tests
//!
//! Records every call and can be told to fail a given operation with an
//! HTTP status, the way a FastAPI backend would.

use std::sync::Mutex;

use async_trait::async_trait;
use processos_common::{Error, Folder, ProcessPage, ProcessRecord, ProcessStatus, Result};

use crate::client::ProcessApi;

/// A recorded call to the mock API.
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    ListProcessos { skip: u64, limit: u64 },
    ListFolders,
    PatchStatus { id: i64, status: ProcessStatus },
    AddProcessos { folder_id: i64, processo_ids: Vec<i64> },
}

#[derive(Debug, Clone)]
struct Failure {
    status: u16,
    detail: String,
}

impl Failure {
    fn to_error(&self) -> Error {
        Error::from_response(self.status, &format!(r#"{{"detail": "{}"}}"#, self.detail))
    }
}

#[derive(Default)]
pub struct MockApi {
    processos: Mutex<Vec<ProcessRecord>>,
    folders: Mutex<Vec<Folder>>,
    calls: Mutex<Vec<MockCall>>,
    list_error: Mutex<Option<Failure>>,
    status_error: Mutex<Option<Failure>>,
    assign_error: Mutex<Option<Failure>>,
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    match m.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_processo(self, record: ProcessRecord) -> Self {
        lock(&self.processos).push(record);
        self
    }

    pub fn with_folder(self, id: i64, name: &str) -> Self {
        lock(&self.folders).push(Folder {
            id,
            name: name.to_string(),
            owner_id: None,
            processos: Vec::new(),
        });
        self
    }

    /// Fail the next process listing
    pub fn with_list_error(self, status: u16, detail: &str) -> Self {
        *lock(&self.list_error) = Some(Failure { status, detail: detail.into() });
        self
    }

    /// Fail the next status patch
    pub fn with_status_error(self, status: u16, detail: &str) -> Self {
        *lock(&self.status_error) = Some(Failure { status, detail: detail.into() });
        self
    }

    /// Fail the next batch assignment
    pub fn with_assign_error(self, status: u16, detail: &str) -> Self {
        *lock(&self.assign_error) = Some(Failure { status, detail: detail.into() });
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Server-side status of `id`
    pub fn status_of(&self, id: i64) -> Option<ProcessStatus> {
        lock(&self.processos).iter().find(|r| r.id == id).map(|r| r.status)
    }

    /// Server-side members of folder `id`
    pub fn folder_members(&self, id: i64) -> Vec<i64> {
        lock(&self.folders)
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.processos.iter().map(|p| p.id).collect())
            .unwrap_or_default()
    }

    fn record(&self, call: MockCall) {
        lock(&self.calls).push(call);
    }

    fn take_error(slot: &Mutex<Option<Failure>>) -> Option<Error> {
        lock(slot).take().map(|f| f.to_error())
    }
}

#[async_trait]
impl ProcessApi for MockApi {
    async fn list_processos(&self, skip: u64, limit: u64) -> Result<ProcessPage> {
        self.record(MockCall::ListProcessos { skip, limit });
        if let Some(err) = Self::take_error(&self.list_error) {
            return Err(err);
        }

        let all = lock(&self.processos);
        let data = all
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok(ProcessPage { data, total_count: all.len() as u64 })
    }

    async fn list_folders(&self) -> Result<Vec<Folder>> {
        self.record(MockCall::ListFolders);
        Ok(lock(&self.folders).clone())
    }

    async fn patch_status(&self, id: i64, status: ProcessStatus) -> Result<()> {
        self.record(MockCall::PatchStatus { id, status });
        if let Some(err) = Self::take_error(&self.status_error) {
            return Err(err);
        }

        let mut all = lock(&self.processos);
        match all.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.status = status;
                Ok(())
            }
            None => Err(Error::from_response(404, r#"{"detail": "Processo não encontrado"}"#)),
        }
    }

    async fn add_processos(&self, folder_id: i64, processo_ids: &[i64]) -> Result<()> {
        self.record(MockCall::AddProcessos {
            folder_id,
            processo_ids: processo_ids.to_vec(),
        });
        if let Some(err) = Self::take_error(&self.assign_error) {
            return Err(err);
        }

        let records: Vec<ProcessRecord> = lock(&self.processos)
            .iter()
            .filter(|r| processo_ids.contains(&r.id))
            .cloned()
            .collect();
        let mut folders = lock(&self.folders);
        let folder = folders.iter_mut().find(|f| f.id == folder_id).ok_or_else(|| {
            Error::from_response(
                404,
                r#"{"detail": "Pasta não encontrada ou não pertence ao usuário."}"#,
            )
        })?;
        for record in records {
            if !folder.processos.iter().any(|p| p.id == record.id) {
                folder.processos.push(record);
            }
        }
        Ok(())
    }
}
