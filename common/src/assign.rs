//! Batch assignment of selected processes into a folder
//!
//! `Closed -> Open -> Submitting -> Closed`. Every exit from `Submitting`
//! goes back to `Closed`, whatever the outcome.

use crate::error::{Error, Result};
use crate::selection::SelectionTracker;
use crate::types::AddProcessosRequest;

pub const EMPTY_SELECTION_MESSAGE: &str = "Nenhum processo selecionado.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssignState {
    #[default]
    Closed,
    Open,
    Submitting { folder_id: i64 },
}

/// Single batch call to issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignRequest {
    pub folder_id: i64,
    pub processo_ids: Vec<i64>,
}

impl AssignRequest {
    pub fn body(&self) -> AddProcessosRequest {
        AddProcessosRequest { processo_ids: self.processo_ids.clone() }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AssignWorkflow {
    state: AssignState,
}

impl AssignWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AssignState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, AssignState::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, AssignState::Submitting { .. })
    }

    /// Open the folder dialog; refused while nothing is selected
    pub fn open(&mut self, selection: &SelectionTracker) -> Result<()> {
        if selection.is_empty() {
            return Err(Error::Validation(EMPTY_SELECTION_MESSAGE.into()));
        }
        if self.state == AssignState::Closed {
            self.state = AssignState::Open;
        }
        Ok(())
    }

    /// Folder picked in the dialog: move to `Submitting` and build the call
    pub fn choose_folder(
        &mut self,
        folder_id: i64,
        selection: &SelectionTracker,
    ) -> Result<AssignRequest> {
        match self.state {
            AssignState::Open => {}
            AssignState::Closed => {
                return Err(Error::Validation("Diálogo de pastas não está aberto.".into()))
            }
            AssignState::Submitting { .. } => {
                return Err(Error::Validation("Atribuição já em andamento.".into()))
            }
        }

        if selection.is_empty() {
            self.state = AssignState::Closed;
            return Err(Error::Validation(EMPTY_SELECTION_MESSAGE.into()));
        }

        self.state = AssignState::Submitting { folder_id };
        Ok(AssignRequest {
            folder_id,
            processo_ids: selection.ids(),
        })
    }

    /// Close after the batch call returns; yields the folder that was targeted
    pub fn finish(&mut self) -> Option<i64> {
        let folder = match self.state {
            AssignState::Submitting { folder_id } => Some(folder_id),
            _ => None,
        };
        self.state = AssignState::Closed;
        folder
    }

    /// Dismiss the dialog; ignored while a submission is in flight
    pub fn cancel(&mut self) -> bool {
        match self.state {
            AssignState::Open => {
                self.state = AssignState::Closed;
                true
            }
            _ => false,
        }
    }
}
