//! Process table view controller
//!
//! Owns the fetched records and every piece of view state, and is the only
//! place that mutates them. It performs no IO: callers ask it for the request
//! to issue (a fetch ticket, a status patch, an assignment request), run the
//! call however their platform does, and hand the outcome back.
//!
//! Reset rules enforced here:
//! - tab, debounced search or rows-per-page change → page 0, and selection
//!   pruned to the rows still in the filtered view
//! - successful refetch → records replaced, selection cleared, pending status
//!   patches forgotten, page clamped. While a batch assignment is in flight
//!   the selection is only pruned to rows that still exist; the batch result
//!   decides whether it is cleared.
//! - successful assignment → selection cleared
//! - only the newest fetch's response is applied

use crate::assign::{AssignRequest, AssignState, AssignWorkflow};
use crate::bucket::{tab_counts, ValueTab};
use crate::debounce::{Debouncer, SEARCH_DEBOUNCE_MS};
use crate::error::{Error, Result};
use crate::notice::{Notice, NoticeQueue};
use crate::pagination::{page_in_bounds, paginate, PageWindow, DEFAULT_ROWS_PER_PAGE};
use crate::pipeline::{compute_view, SortKey, SortSpec};
use crate::selection::{HeaderCheck, SelectionTracker};
use crate::status::{StatusMutator, StatusPatch, StatusSettle};
use crate::types::{Folder, ProcessPage, ProcessRecord, ProcessStatus};
use std::collections::HashSet;

pub const FETCH_ERROR_MESSAGE: &str =
    "Falha ao buscar os dados. Verifique se a API está em execução.";
pub const ASSIGN_SUCCESS_MESSAGE: &str = "Processos adicionados à pasta com sucesso!";
pub const ASSIGN_ERROR_MESSAGE: &str = "Erro ao adicionar processos.";

/// Page-level load state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Handle for one issued fetch; only the newest one is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(pub u64);

/// Everything one fetch cycle loads
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchPayload {
    pub processos: ProcessPage,
    pub folders: Vec<Folder>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied { rows: usize },
    Failed,
    Stale,
}

/// User-controlled view parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub active_tab: ValueTab,
    /// Raw text in the search box
    pub search_input: String,
    /// Term the pipeline actually filters by
    pub debounced_search: String,
    pub sort: SortSpec,
    pub page: usize,
    pub rows_per_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_tab: ValueTab::All,
            search_input: String::new(),
            debounced_search: String::new(),
            sort: SortSpec::default(),
            page: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

/// Everything the filter and sort pipeline reads.
///
/// Equal keys mean `filtered()` would return the same rows, so a caller can
/// cache the ordered ids and recompute only when the key changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewKey {
    pub revision: u64,
    pub tab: ValueTab,
    pub search: String,
    pub sort: SortSpec,
}

/// Ordered, filtered rows for the current view state
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    pub rows: Vec<&'a ProcessRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ids(&self) -> HashSet<i64> {
        self.rows.iter().map(|r| r.id).collect()
    }

    pub fn window(&self, page: usize, rows_per_page: usize) -> PageWindow<'_, &'a ProcessRecord> {
        paginate(&self.rows, page, rows_per_page)
    }
}

#[derive(Debug, Clone)]
pub struct ViewController {
    records: Vec<ProcessRecord>,
    folders: Vec<Folder>,
    total_count: u64,
    phase: LoadPhase,
    state: ViewState,
    search: Debouncer<String>,
    selection: SelectionTracker,
    status: StatusMutator,
    assign: AssignWorkflow,
    notices: NoticeQueue,
    latest_fetch: u64,
    context: Option<String>,
    /// Bumped whenever `records` changes
    revision: u64,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewController {
    pub fn new() -> Self {
        Self::with_debounce(SEARCH_DEBOUNCE_MS)
    }

    pub fn with_debounce(delay_ms: u64) -> Self {
        Self {
            records: Vec::new(),
            folders: Vec::new(),
            total_count: 0,
            phase: LoadPhase::Idle,
            state: ViewState::default(),
            search: Debouncer::new(delay_ms),
            selection: SelectionTracker::new(),
            status: StatusMutator::new(),
            assign: AssignWorkflow::new(),
            notices: NoticeQueue::default(),
            latest_fetch: 0,
            context: None,
            revision: 0,
        }
    }

    // =============================================
    // Accessors
    // =============================================

    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    pub fn record(&self, id: i64) -> Option<&ProcessRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// The table is rendered only once a fetch has succeeded
    pub fn table_visible(&self) -> bool {
        self.phase == LoadPhase::Ready
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn selected_count(&self) -> usize {
        self.selection.count()
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selection.contains(id)
    }

    pub fn is_status_pending(&self, id: i64) -> bool {
        self.status.is_pending(id)
    }

    pub fn assign_state(&self) -> AssignState {
        self.assign.state()
    }

    pub fn search_deadline(&self) -> Option<u64> {
        self.search.deadline()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn tab_counts(&self) -> [usize; 4] {
        tab_counts(&self.records)
    }

    // =============================================
    // Derived view
    // =============================================

    pub fn filtered(&self) -> FilteredView<'_> {
        FilteredView {
            rows: compute_view(
                &self.records,
                self.state.active_tab,
                &self.state.debounced_search,
                self.state.sort,
            ),
        }
    }

    /// Rows on the current page, in display order
    pub fn page_rows(&self) -> Vec<&ProcessRecord> {
        let view = self.filtered();
        let window = view.window(self.state.page, self.state.rows_per_page);
        window.rows.to_vec()
    }

    pub fn visible_ids(&self) -> Vec<i64> {
        self.page_rows().iter().map(|r| r.id).collect()
    }

    pub fn header_check(&self) -> HeaderCheck {
        self.selection.header_state(&self.visible_ids())
    }

    pub fn view_key(&self) -> ViewKey {
        ViewKey {
            revision: self.revision,
            tab: self.state.active_tab,
            search: self.state.debounced_search.clone(),
            sort: self.state.sort,
        }
    }

    /// Ids of the filtered view in display order
    pub fn filtered_ids(&self) -> Vec<i64> {
        self.filtered().rows.iter().map(|r| r.id).collect()
    }

    /// Current page of `ordered`, as returned by [`Self::filtered_ids`]
    pub fn page_window<'a>(&self, ordered: &'a [i64]) -> PageWindow<'a, i64> {
        paginate(ordered, self.state.page, self.state.rows_per_page)
    }

    /// Records on the current page of a cached id ordering
    pub fn page_rows_of(&self, ordered: &[i64]) -> Vec<&ProcessRecord> {
        self.page_window(ordered)
            .rows
            .iter()
            .filter_map(|id| self.record(*id))
            .collect()
    }

    pub fn header_check_of(&self, ordered: &[i64]) -> HeaderCheck {
        self.selection.header_state(self.page_window(ordered).rows)
    }

    // =============================================
    // Fetch cycle
    // =============================================

    /// Issue a new fetch; any older one still in flight becomes stale
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_fetch += 1;
        self.phase = LoadPhase::Loading;
        tracing::debug!(ticket = self.latest_fetch, "fetch issued");
        FetchTicket(self.latest_fetch)
    }

    /// Refetch when the navigation context (route, hash) changes
    pub fn navigate(&mut self, context: impl Into<String>) -> Option<FetchTicket> {
        let context = context.into();
        if self.context.as_deref() == Some(context.as_str()) {
            return None;
        }
        self.context = Some(context);
        Some(self.begin_fetch())
    }

    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: Result<FetchPayload>) -> FetchOutcome {
        if ticket.0 != self.latest_fetch {
            let stale = Error::StaleData { ticket: ticket.0, latest: self.latest_fetch };
            tracing::warn!(error = %stale, "discarding stale fetch response");
            return FetchOutcome::Stale;
        }

        match result {
            Ok(payload) => {
                if payload.processos.is_truncated() {
                    tracing::warn!(
                        received = payload.processos.data.len(),
                        total = payload.processos.total_count,
                        "process listing truncated"
                    );
                }
                self.records = payload.processos.data;
                self.revision += 1;
                self.total_count = payload.processos.total_count;
                self.folders = payload.folders;
                if matches!(self.assign.state(), AssignState::Submitting { .. }) {
                    let present: HashSet<i64> = self.records.iter().map(|r| r.id).collect();
                    self.selection.retain(&present);
                } else {
                    self.selection.clear();
                }
                self.status.reset();
                self.assign.cancel();
                if !self.page_fits() {
                    self.state.page = 0;
                }
                self.phase = LoadPhase::Ready;
                tracing::info!(ticket = ticket.0, rows = self.records.len(), "fetch applied");
                FetchOutcome::Applied { rows: self.records.len() }
            }
            Err(err) => {
                tracing::error!(ticket = ticket.0, error = %err, "fetch failed");
                let message = match &err {
                    Error::Network { status: 401, .. } => err.user_message(),
                    _ => FETCH_ERROR_MESSAGE.to_string(),
                };
                self.phase = LoadPhase::Failed(message);
                FetchOutcome::Failed
            }
        }
    }

    // =============================================
    // Filters, sort, pagination
    // =============================================

    pub fn set_tab(&mut self, tab: ValueTab) {
        if self.state.active_tab == tab {
            return;
        }
        self.state.active_tab = tab;
        self.state.page = 0;
        self.prune_selection();
    }

    /// Record a keystroke; the pipeline sees it after the debounce delay
    pub fn set_search_input(&mut self, input: impl Into<String>, now_ms: u64) {
        let input = input.into();
        self.state.search_input = input.clone();
        self.search.push(input, now_ms);
    }

    /// Advance the debounce clock; returns true when the filter changed
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.search.poll(now_ms) {
            Some(term) => self.apply_search(term),
            None => false,
        }
    }

    /// Apply pending search input immediately
    pub fn flush_search(&mut self) -> bool {
        match self.search.flush() {
            Some(term) => self.apply_search(term),
            None => false,
        }
    }

    fn apply_search(&mut self, term: String) -> bool {
        if self.state.debounced_search == term {
            return false;
        }
        self.state.debounced_search = term;
        self.state.page = 0;
        self.prune_selection();
        true
    }

    pub fn sort_by(&mut self, key: SortKey) {
        self.state.sort = self.state.sort.toggled(key);
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.state.sort = sort;
    }

    /// Move to `page`; refused when it addresses no row
    pub fn set_page(&mut self, page: usize) -> bool {
        let total = self.filtered().len();
        if !page_in_bounds(total, page, self.state.rows_per_page) {
            return false;
        }
        self.state.page = page;
        true
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        if rows_per_page == 0 {
            return;
        }
        self.state.rows_per_page = rows_per_page;
        self.state.page = 0;
    }

    fn page_fits(&self) -> bool {
        page_in_bounds(self.filtered().len(), self.state.page, self.state.rows_per_page)
    }

    fn prune_selection(&mut self) {
        let addressable = self.filtered().ids();
        let dropped = self.selection.retain(&addressable);
        if dropped > 0 {
            tracing::debug!(dropped, "selection pruned to filtered view");
        }
        if !self.page_fits() {
            self.state.page = 0;
        }
    }

    // =============================================
    // Selection
    // =============================================

    /// Flip a row's checkbox; rows outside the filtered view are ignored
    pub fn toggle_row(&mut self, id: i64) -> bool {
        if !self.filtered().rows.iter().any(|r| r.id == id) {
            return false;
        }
        self.selection.toggle(id);
        true
    }

    /// Header checkbox: select exactly the current page, or clear everything
    pub fn select_all_visible(&mut self, flag: bool) {
        let visible = self.visible_ids();
        self.selection.select_all_visible(flag, visible);
    }

    // =============================================
    // Status mutation
    // =============================================

    /// Optimistically apply a status control click and return the patch to send
    pub fn click_status(&mut self, id: i64, clicked: ProcessStatus) -> Option<StatusPatch> {
        let patch = self.status.apply(&mut self.records, id, clicked)?;
        self.revision += 1;
        Some(patch)
    }

    pub fn finish_status(&mut self, patch: StatusPatch, result: Result<()>) -> StatusSettle {
        let error = result.err();
        let settle = self.status.settle(&mut self.records, patch, error.is_none());
        if let StatusSettle::RolledBack { .. } = settle {
            self.revision += 1;
        }
        if let StatusSettle::RolledBack { id, .. } = settle {
            let numero = self
                .record(id)
                .map(|r| r.numero_processo.clone())
                .unwrap_or_else(|| id.to_string());
            let reason = error.map(|e| e.user_message()).unwrap_or_default();
            self.notices.error(format!(
                "Não foi possível atualizar o status do processo {}. {}",
                numero, reason
            ).trim_end().to_string());
        }
        settle
    }

    // =============================================
    // Batch assignment
    // =============================================

    pub fn open_assign(&mut self) -> bool {
        match self.assign.open(&self.selection) {
            Ok(()) => true,
            Err(err) => {
                self.notices.error(err.user_message());
                false
            }
        }
    }

    pub fn cancel_assign(&mut self) -> bool {
        self.assign.cancel()
    }

    /// Folder picked: returns the single batch call to issue
    pub fn choose_folder(&mut self, folder_id: i64) -> Option<AssignRequest> {
        match self.assign.choose_folder(folder_id, &self.selection) {
            Ok(request) => {
                tracing::debug!(folder_id, count = request.processo_ids.len(), "assignment submitted");
                Some(request)
            }
            Err(err) => {
                self.notices.error(err.user_message());
                None
            }
        }
    }

    /// Batch call finished; returns whether it succeeded
    pub fn finish_assign(&mut self, result: Result<()>) -> bool {
        let folder_id = self.assign.finish();
        match result {
            Ok(()) => {
                tracing::info!(?folder_id, "processes assigned to folder");
                self.selection.clear();
                self.notices.success(ASSIGN_SUCCESS_MESSAGE);
                true
            }
            Err(err) => {
                tracing::warn!(?folder_id, error = %err, "folder assignment failed");
                self.notices.error(ASSIGN_ERROR_MESSAGE);
                false
            }
        }
    }

    // =============================================
    // Notifications
    // =============================================

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.current()
    }

    pub fn dismiss_notice(&mut self, id: u64) -> bool {
        self.notices.dismiss(id)
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }
}
