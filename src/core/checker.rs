use crate::core::evaluator::{evaluate, FairCheckerClient};
use crate::core::parser::ResourceIdParser;
use crate::core::resolver::{resolve, OrkgResolver};
use crate::core::scoring::build_display;
use crate::core::session::{ActionOutcome, ActionTicket, Session, SessionState};
use crate::domain::model::{FairnessDisplay, ResolvedUris, UriKind};
use crate::domain::ports::{ConfigProvider, FairnessAssessor, ResourceLookup};
use crate::utils::error::Result;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Wires parsing, resolution and assessment to one session.
pub struct FairChecker<L: ResourceLookup, A: FairnessAssessor> {
    lookup: L,
    assessor: A,
    parser: ResourceIdParser,
    session: Mutex<Session>,
}

impl FairChecker<OrkgResolver, FairCheckerClient> {
    /// Checker talking to the configured ORKG and FAIR-Checker hosts.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self::new(
            OrkgResolver::new(config)?,
            FairCheckerClient::new(config)?,
            ResourceIdParser::for_base_url(config.graph_base_url()),
        ))
    }
}

impl<L: ResourceLookup, A: FairnessAssessor> FairChecker<L, A> {
    pub fn new(lookup: L, assessor: A, parser: ResourceIdParser) -> Self {
        Self {
            lookup,
            assessor,
            parser,
            session: Mutex::new(Session::new()),
        }
    }

    // 鎖只在同步區段內持有，不會跨 await
    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> SessionState {
        self.session().state().clone()
    }

    pub async fn load_uri(&self, input: &str) -> ActionOutcome<ResolvedUris> {
        let ticket = self.session().begin_search(input);

        let uris = match self.parser.parse(input) {
            Some(id) => {
                tokio::select! {
                    _ = ticket.cancelled() => return self.superseded(&ticket),
                    uris = resolve(&self.lookup, &id) => uris,
                }
            }
            None => {
                tracing::warn!("Could not parse a resource id from {:?}", input);
                ResolvedUris::empty()
            }
        };

        if self.session().apply_resolution(&ticket, uris.clone()) {
            ActionOutcome::Applied(uris)
        } else {
            self.superseded(&ticket)
        }
    }

    pub async fn assess(&self, uri: &str) -> ActionOutcome<FairnessDisplay> {
        let ticket = self.session().begin_assessment();
        tracing::info!("🔍 Assessing {} (action #{})", uri, ticket.id());

        let response = tokio::select! {
            _ = ticket.cancelled() => return self.superseded(&ticket),
            response = evaluate(&self.assessor, uri) => response,
        };
        let display = build_display(response.as_ref());

        if self.session().apply_assessment(&ticket, display.clone()) {
            ActionOutcome::Applied(display)
        } else {
            self.superseded(&ticket)
        }
    }

    /// Assesses the resolved URI of `kind`, if the current resolution has one.
    pub async fn assess_kind(&self, kind: UriKind) -> Option<ActionOutcome<FairnessDisplay>> {
        let uri = {
            let session = self.session();
            let uris = session.state().uris.as_ref()?;
            if !uris.is_valid() {
                return None;
            }
            uris.get(kind)?.to_string()
        };
        Some(self.assess(&uri).await)
    }

    fn superseded<T>(&self, ticket: &ActionTicket) -> ActionOutcome<T> {
        tracing::debug!("Dropping result of superseded action #{}", ticket.id());
        ActionOutcome::Superseded
    }
}
