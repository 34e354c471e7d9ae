use crate::domain::model::{FairnessDisplay, ResolvedUris};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

/// Everything the tool shows at one moment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    pub search_text: String,
    pub uris: Option<ResolvedUris>,
    pub fairness: Option<FairnessDisplay>,
    pub loading: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Search,
    Assessment,
}

/// Identity of one dispatched action. Cancelled once a newer action of the
/// same kind begins.
#[derive(Debug, Clone)]
pub struct ActionTicket {
    id: u64,
    kind: ActionKind,
    token: CancellationToken,
}

impl ActionTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome<T> {
    Applied(T),
    Superseded,
}

impl<T> ActionOutcome<T> {
    pub fn applied(self) -> Option<T> {
        match self {
            ActionOutcome::Applied(value) => Some(value),
            ActionOutcome::Superseded => None,
        }
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, ActionOutcome::Superseded)
    }
}

#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    next_id: u64,
    search: Option<ActionTicket>,
    assessment: Option<ActionTicket>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    fn slot(&mut self, kind: ActionKind) -> &mut Option<ActionTicket> {
        match kind {
            ActionKind::Search => &mut self.search,
            ActionKind::Assessment => &mut self.assessment,
        }
    }

    fn begin(&mut self, kind: ActionKind) -> ActionTicket {
        self.next_id += 1;
        let ticket = ActionTicket {
            id: self.next_id,
            kind,
            token: CancellationToken::new(),
        };
        if let Some(previous) = self.slot(kind).replace(ticket.clone()) {
            tracing::debug!("Action #{} superseded by #{}", previous.id, ticket.id);
            previous.token.cancel();
        }
        ticket
    }

    pub fn is_current(&self, ticket: &ActionTicket) -> bool {
        let current = match ticket.kind {
            ActionKind::Search => &self.search,
            ActionKind::Assessment => &self.assessment,
        };
        current.as_ref().is_some_and(|t| t.id == ticket.id)
    }

    fn finish(&mut self, ticket: &ActionTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        *self.slot(ticket.kind) = None;
        true
    }

    pub fn begin_search(&mut self, input: &str) -> ActionTicket {
        self.state.search_text = input.to_string();
        self.begin(ActionKind::Search)
    }

    /// Stores the resolution unless a newer search has started.
    pub fn apply_resolution(&mut self, ticket: &ActionTicket, uris: ResolvedUris) -> bool {
        if !self.finish(ticket) {
            return false;
        }
        self.state.uris = Some(uris);
        true
    }

    pub fn begin_assessment(&mut self) -> ActionTicket {
        self.state.fairness = None;
        self.state.loading = true;
        self.begin(ActionKind::Assessment)
    }

    /// Stores the display and clears `loading` unless a newer assessment owns it.
    pub fn apply_assessment(&mut self, ticket: &ActionTicket, display: FairnessDisplay) -> bool {
        if !self.finish(ticket) {
            return false;
        }
        self.state.fairness = Some(display);
        self.state.loading = false;
        true
    }
}
