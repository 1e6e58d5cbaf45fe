//! Headless dashboard session
//!
//! Drives a [`ViewController`] against a [`ProcessApi`] the same way the
//! browser app does: the controller decides, the session performs the IO and
//! reports the outcome back.

use crate::client::ProcessApi;
use crate::error::{DashboardError, Result};
use processos_common::{
    assign::EMPTY_SELECTION_MESSAGE, pagination::page_count, Error, FetchOutcome, FetchPayload,
    LoadPhase, Notice, ProcessStatus, SortSpec, StatusSettle, ValueTab, ViewController,
    FETCH_ALL_LIMIT,
};

/// View parameters for a one-shot listing
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    pub tab: ValueTab,
    pub search: Option<String>,
    pub sort: Option<SortSpec>,
    pub page: usize,
    pub rows_per_page: Option<usize>,
}

pub struct Session<A: ProcessApi> {
    api: A,
    controller: ViewController,
}

impl<A: ProcessApi> Session<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            controller: ViewController::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    /// Fetch processes and folders and apply them to the view
    pub async fn refresh(&mut self) -> Result<usize> {
        let ticket = self.controller.begin_fetch();
        let result = tokio::try_join!(
            self.api.list_processos(0, FETCH_ALL_LIMIT),
            self.api.list_folders(),
        )
        .map(|(processos, folders)| FetchPayload { processos, folders });

        match self.controller.finish_fetch(ticket, result) {
            FetchOutcome::Applied { rows } => Ok(rows),
            FetchOutcome::Failed => {
                let message = match self.controller.phase() {
                    LoadPhase::Failed(message) => message.clone(),
                    _ => String::new(),
                };
                Err(DashboardError::FetchFailed(message))
            }
            FetchOutcome::Stale => Err(DashboardError::FetchFailed("resposta desatualizada".into())),
        }
    }

    /// Apply tab, search, sort and paging in the order the UI would
    pub fn apply_view(&mut self, options: &ViewOptions) -> Result<()> {
        let c = &mut self.controller;
        c.set_tab(options.tab);
        if let Some(search) = &options.search {
            c.set_search_input(search.clone(), 0);
            c.flush_search();
        }
        if let Some(sort) = options.sort {
            c.set_sort(sort);
        }
        if let Some(rows) = options.rows_per_page {
            c.set_rows_per_page(rows);
        }
        if !c.set_page(options.page) {
            let pages = page_count(c.filtered().len(), c.state().rows_per_page);
            return Err(DashboardError::PageOutOfRange {
                page: options.page,
                pages,
            });
        }
        Ok(())
    }

    /// Click the status control for `clicked` on process `id`.
    ///
    /// Returns the status the server confirmed.
    pub async fn set_status(&mut self, id: i64, clicked: ProcessStatus) -> Result<ProcessStatus> {
        let patch = self
            .controller
            .click_status(id, clicked)
            .ok_or(DashboardError::ProcessNotFound(id))?;

        let result = self.api.patch_status(patch.id, patch.status).await;
        let failure = result.as_ref().err().map(|e| e.user_message());

        match self.controller.finish_status(patch, result) {
            StatusSettle::Confirmed { status, .. } => Ok(status),
            StatusSettle::RolledBack { id, .. } => Err(DashboardError::StatusRejected {
                id,
                message: failure.unwrap_or_default(),
            }),
            StatusSettle::Superseded { .. } | StatusSettle::Unknown => Ok(patch.status),
        }
    }

    /// Select `ids` and add them to `folder_id` in one batch call.
    ///
    /// Returns the number of processes sent.
    pub async fn assign(&mut self, folder_id: i64, ids: &[i64]) -> Result<usize> {
        if !self.controller.folders().iter().any(|f| f.id == folder_id) {
            return Err(DashboardError::FolderNotFound(folder_id));
        }
        for id in ids {
            if !self.controller.is_selected(*id) && !self.controller.toggle_row(*id) {
                return Err(DashboardError::ProcessNotFound(*id));
            }
        }

        if !self.controller.open_assign() {
            return Err(Error::Validation(EMPTY_SELECTION_MESSAGE.into()).into());
        }
        let request = self
            .controller
            .choose_folder(folder_id)
            .ok_or_else(|| DashboardError::AssignFailed("seleção vazia".into()))?;

        let result = self
            .api
            .add_processos(request.folder_id, &request.processo_ids)
            .await;
        let failure = result.as_ref().err().map(|e| e.user_message());

        if self.controller.finish_assign(result) {
            Ok(request.processo_ids.len())
        } else {
            Err(DashboardError::AssignFailed(failure.unwrap_or_default()))
        }
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.controller.drain_notices()
    }
}
