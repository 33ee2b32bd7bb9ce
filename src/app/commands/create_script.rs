//! Single-file scaffold command.

use tracing::info;

use crate::app::AppContext;
use crate::app::services::{ArtifactGenerator, DestinationPlanner};
use crate::domain::{AppError, BaseName, GeneratedArtifactSet, ScaffoldRequest, TemplateKind};
use crate::ports::{AssetStore, TemplateStore};

/// Write `New<Kind>.<ext>` next to the current selection.
pub fn execute<S, T>(
    ctx: &AppContext<S, T>,
    kind: TemplateKind,
) -> Result<GeneratedArtifactSet, AppError>
where
    S: AssetStore,
    T: TemplateStore,
{
    if kind.is_composite_part() {
        return Err(AppError::CompositeOnlyKind(kind));
    }

    let destination = DestinationPlanner::plan_current(ctx.store());
    let base_name = BaseName::new(&ctx.catalog().descriptor(kind).default_base_name)?;
    info!(kind = %kind, destination = %destination.display(), "creating script");

    let request = ScaffoldRequest { kind, destination, base_name };
    ArtifactGenerator::generate_single(ctx, &request)
}
