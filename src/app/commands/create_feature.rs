//! Composite renderer-feature scaffold command.

use crate::app::AppContext;
use crate::app::services::{DestinationPlanner, NamingCoordinator, NamingOutcome};
use crate::domain::{AppError, ArtifactManifest, GeneratedArtifactSet, TemplateKind};
use crate::ports::{AssetStore, NameInput, TemplateStore};

/// Prompt for a name, then write the feature folder and its three scripts.
///
/// Returns `None` when the operator cancels.
pub fn execute<S, T, N>(
    ctx: &AppContext<S, T>,
    input: &mut N,
) -> Result<Option<GeneratedArtifactSet>, AppError>
where
    S: AssetStore,
    T: TemplateStore,
    N: NameInput + ?Sized,
{
    let destination = DestinationPlanner::plan_current(ctx.store());
    let default_label = &ctx.catalog().descriptor(TemplateKind::CompositeFeature).default_base_name;

    let mut coordinator = NamingCoordinator::new(ArtifactManifest::composite_feature());
    let session = coordinator.begin(ctx.store(), default_label, destination)?;

    let event = match coordinator.prompt() {
        Some(prompt) => input.request_name(prompt),
        None => Err(AppError::UnknownNamingSession(session.0)),
    };
    let event = match event {
        Ok(event) => event,
        Err(err) => {
            coordinator.cancel(session)?;
            return Err(err);
        }
    };

    match coordinator.deliver(session, event, ctx)? {
        NamingOutcome::Committed(set) => Ok(Some(set)),
        NamingOutcome::Cancelled => Ok(None),
    }
}
