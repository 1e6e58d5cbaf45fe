//! Processos dashboard shared library
//!
//! Model types, the client-side view pipeline and the view controller,
//! shared by the native CLI and the browser (WASM) frontend. Nothing in
//! this crate performs IO.

pub mod api;
pub mod assign;
pub mod bucket;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod notice;
pub mod pagination;
pub mod parser;
pub mod pipeline;
pub mod selection;
pub mod status;
pub mod types;

pub use api::{Endpoint, Method, RequestContext, DEFAULT_BASE_URL, FETCH_ALL_LIMIT};
pub use assign::{AssignRequest, AssignState, AssignWorkflow};
pub use bucket::{classify, tab_counts, ValueTab};
pub use controller::{
    FetchOutcome, FetchPayload, FetchTicket, LoadPhase, ViewController, ViewKey, ViewState,
};
pub use debounce::{Debouncer, SEARCH_DEBOUNCE_MS};
pub use error::{Error, ErrorKind, Result};
pub use notice::{Notice, NoticeLevel, NoticeQueue, NOTICE_AUTO_HIDE_MS};
pub use pagination::{paginate, PageWindow, DEFAULT_ROWS_PER_PAGE, ROWS_PER_PAGE_OPTIONS};
pub use parser::{parse_valor_causa, parse_value};
pub use pipeline::{compute_view, matches_search, SortDirection, SortKey, SortSpec};
pub use selection::{HeaderCheck, SelectionTracker};
pub use status::{StatusMutator, StatusPatch, StatusSettle};
pub use types::{AddProcessosRequest, Folder, ProcessPage, ProcessRecord, ProcessStatus, StatusUpdate};
