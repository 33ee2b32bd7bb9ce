//! Deferred naming for composite scaffolds.
//!
//! `begin` hands control to the host's naming UI and returns. The host later
//! delivers exactly one of `commit` or `cancel` for that session. Nothing is
//! written before a commit.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::app::AppContext;
use crate::app::services::ArtifactGenerator;
use crate::domain::{
    AppError, ArtifactManifest, BaseName, GeneratedArtifactSet, NamingEvent, NamingPrompt,
    SessionId,
};
use crate::ports::{AssetStore, TemplateStore};

/// Coordinator state. `Committed` and `Cancelled` are reported as outcomes and
/// the coordinator is immediately `Idle` again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingState {
    Idle,
    Prompting(NamingPrompt),
}

/// How a naming session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingOutcome {
    Committed(GeneratedArtifactSet),
    Cancelled,
}

/// Drives one pending name at a time through to generation.
#[derive(Debug)]
pub struct NamingCoordinator {
    state: NamingState,
    manifest: ArtifactManifest,
    last_session: u64,
}

impl NamingCoordinator {
    pub fn new(manifest: ArtifactManifest) -> Self {
        Self { state: NamingState::Idle, manifest, last_session: 0 }
    }

    pub fn state(&self) -> &NamingState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == NamingState::Idle
    }

    /// The prompt being shown, while prompting.
    pub fn prompt(&self) -> Option<&NamingPrompt> {
        match &self.state {
            NamingState::Prompting(prompt) => Some(prompt),
            NamingState::Idle => None,
        }
    }

    /// Start prompting for a name anchored at `anchor`.
    pub fn begin<S: AssetStore>(
        &mut self,
        store: &S,
        default_label: &str,
        anchor: PathBuf,
    ) -> Result<SessionId, AppError> {
        if !self.is_idle() {
            return Err(AppError::NamingSessionActive);
        }

        self.last_session += 1;
        let prompt = NamingPrompt {
            session: SessionId(self.last_session),
            default_label: default_label.to_string(),
            anchor,
        };
        store.begin_interactive_naming(&prompt)?;
        debug!(session = %prompt.session, "prompting for name");

        let session = prompt.session;
        self.state = NamingState::Prompting(prompt);
        Ok(session)
    }

    /// Finalize the session with `name` and generate the manifest synchronously.
    ///
    /// A blank name ends the session as cancelled. The coordinator is idle
    /// again afterwards, whether generation succeeded or not.
    pub fn commit<S, T>(
        &mut self,
        session: SessionId,
        name: &str,
        ctx: &AppContext<S, T>,
    ) -> Result<NamingOutcome, AppError>
    where
        S: AssetStore,
        T: TemplateStore,
    {
        let prompt = self.take_session(session)?;

        let name = name.trim();
        if name.is_empty() {
            info!(session = %session, "empty name, naming cancelled");
            return Ok(NamingOutcome::Cancelled);
        }

        let base_name = BaseName::new(name)?;
        info!(session = %session, name = %base_name, "name committed");
        let set = ArtifactGenerator::generate(ctx, &prompt.anchor, &base_name, &self.manifest)?;
        Ok(NamingOutcome::Committed(set))
    }

    /// Abort the session. Nothing is written.
    pub fn cancel(&mut self, session: SessionId) -> Result<NamingOutcome, AppError> {
        self.take_session(session)?;
        info!(session = %session, "naming cancelled");
        Ok(NamingOutcome::Cancelled)
    }

    /// Route a host event to `commit` or `cancel`.
    pub fn deliver<S, T>(
        &mut self,
        session: SessionId,
        event: NamingEvent,
        ctx: &AppContext<S, T>,
    ) -> Result<NamingOutcome, AppError>
    where
        S: AssetStore,
        T: TemplateStore,
    {
        match event {
            NamingEvent::Commit(name) => self.commit(session, &name, ctx),
            NamingEvent::Cancel => self.cancel(session),
        }
    }

    fn take_session(&mut self, session: SessionId) -> Result<NamingPrompt, AppError> {
        match &self.state {
            NamingState::Prompting(prompt) if prompt.session == session => {
                match std::mem::replace(&mut self.state, NamingState::Idle) {
                    NamingState::Prompting(prompt) => Ok(prompt),
                    NamingState::Idle => Err(AppError::UnknownNamingSession(session.0)),
                }
            }
            _ => Err(AppError::UnknownNamingSession(session.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TemplateCatalog, TemplateKind};
    use crate::testing::{MemoryAssetStore, MockTemplateStore};

    fn setup() -> (MemoryAssetStore, AppContext<MemoryAssetStore, MockTemplateStore>) {
        let store = MemoryAssetStore::new("/project/Assets").with_dir("Rendering");
        let ctx = AppContext::new(
            store.clone(),
            MockTemplateStore::complete(),
            TemplateCatalog::builtin(),
            "cs",
        );
        (store, ctx)
    }

    fn anchor() -> PathBuf {
        PathBuf::from("/project/Assets/Rendering")
    }

    fn coordinator() -> NamingCoordinator {
        NamingCoordinator::new(ArtifactManifest::composite_feature())
    }

    #[test]
    fn begin_prompts_without_writing() {
        let (store, _ctx) = setup();
        let mut coordinator = coordinator();

        let session = coordinator.begin(&store, "NewCompositeFeature", anchor()).unwrap();

        let prompts = store.prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].session, session);
        assert_eq!(prompts[0].default_label, "NewCompositeFeature");
        assert_eq!(prompts[0].anchor, anchor());
        assert!(matches!(coordinator.state(), NamingState::Prompting(_)));
        assert!(store.calls().is_empty());
    }

    #[test]
    fn commit_generates_once_and_returns_to_idle() {
        let (store, ctx) = setup();
        let mut coordinator = coordinator();
        let session = coordinator.begin(&store, "NewCompositeFeature", anchor()).unwrap();

        let outcome = coordinator.commit(session, "Outline", &ctx).unwrap();

        let NamingOutcome::Committed(set) = outcome else {
            panic!("expected committed outcome");
        };
        assert_eq!(set.folder, Some(anchor().join("Outline")));
        assert_eq!(set.files.len(), 3);
        assert_eq!(store.created().len(), 4);
        assert!(coordinator.is_idle());

        // A second commit for the same session is stale.
        let err = coordinator.commit(session, "Outline2", &ctx).unwrap_err();
        assert!(matches!(err, AppError::UnknownNamingSession(_)));
        assert_eq!(store.created().len(), 4);
    }

    #[test]
    fn cancel_writes_nothing() {
        let (store, _ctx) = setup();
        let mut coordinator = coordinator();
        let session = coordinator.begin(&store, "NewCompositeFeature", anchor()).unwrap();

        assert_eq!(coordinator.cancel(session).unwrap(), NamingOutcome::Cancelled);
        assert!(store.calls().is_empty());
        assert!(coordinator.is_idle());
    }

    #[test]
    fn blank_commit_is_cancel() {
        let (store, ctx) = setup();
        let mut coordinator = coordinator();
        let session = coordinator.begin(&store, "NewCompositeFeature", anchor()).unwrap();

        let outcome = coordinator.deliver(session, NamingEvent::Commit("  ".into()), &ctx).unwrap();

        assert_eq!(outcome, NamingOutcome::Cancelled);
        assert!(store.calls().is_empty());
        assert!(ctx.templates().resolved.borrow().is_empty());
    }

    #[test]
    fn second_begin_while_prompting_is_rejected() {
        let (store, _ctx) = setup();
        let mut coordinator = coordinator();
        coordinator.begin(&store, "NewCompositeFeature", anchor()).unwrap();

        let err = coordinator.begin(&store, "NewCompositeFeature", anchor()).unwrap_err();
        assert!(matches!(err, AppError::NamingSessionActive));
        assert_eq!(store.prompts().len(), 1);
    }

    #[test]
    fn events_for_other_sessions_are_rejected() {
        let (store, ctx) = setup();
        let mut coordinator = coordinator();
        let session = coordinator.begin(&store, "NewCompositeFeature", anchor()).unwrap();

        let stale = SessionId(session.0 + 1);
        assert!(coordinator.cancel(stale).is_err());
        assert!(coordinator.commit(stale, "Outline", &ctx).is_err());
        assert!(matches!(coordinator.state(), NamingState::Prompting(_)));
        assert!(store.calls().is_empty());
    }

    #[test]
    fn invalid_name_fails_and_resets() {
        let (store, ctx) = setup();
        let mut coordinator = coordinator();
        let session = coordinator.begin(&store, "NewCompositeFeature", anchor()).unwrap();

        let err = coordinator.commit(session, "Effects/Outline", &ctx).unwrap_err();
        assert!(matches!(err, AppError::InvalidBaseName(_)));
        assert!(coordinator.is_idle());
        assert!(store.calls().is_empty());
    }

    #[test]
    fn generation_failure_still_returns_to_idle() {
        let (store, ctx) = setup();
        let store = store.with_dir("Rendering/Outline");
        let mut coordinator = coordinator();
        let session = coordinator.begin(&store, "NewCompositeFeature", anchor()).unwrap();

        let err = coordinator.commit(session, "Outline", &ctx).unwrap_err();
        assert!(matches!(err, AppError::FolderCreationFailed { .. }));
        assert!(coordinator.is_idle());
        assert!(!ctx.templates().resolved.borrow().contains(&TemplateKind::CompositeFeature));
    }
}
