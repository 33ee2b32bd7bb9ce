//! Folder and file generation from template manifests.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::app::AppContext;
use crate::domain::{
    AppError, ArtifactManifest, ArtifactManifestEntry, BaseName, GeneratedArtifactSet,
    ScaffoldRequest, render_script,
};
use crate::ports::{AssetStore, TemplateStore};

/// Service writing scaffolds into the asset store.
///
/// Each store call is independent: a failure part-way through leaves the
/// folder and earlier files in place and reports the failing entry.
pub struct ArtifactGenerator;

impl ArtifactGenerator {
    /// Create folder `base_name` in `destination` and one file per manifest entry inside it.
    pub fn generate<S, T>(
        ctx: &AppContext<S, T>,
        destination: &Path,
        base_name: &BaseName,
        manifest: &ArtifactManifest,
    ) -> Result<GeneratedArtifactSet, AppError>
    where
        S: AssetStore,
        T: TemplateStore,
    {
        let store = ctx.store();
        let folder_id = store.create_folder(destination, base_name).map_err(|err| {
            AppError::FolderCreationFailed {
                path: destination.join(base_name.as_str()),
                reason: err.to_string(),
            }
        })?;
        let folder =
            store.path_for_id(folder_id).unwrap_or_else(|| destination.join(base_name.as_str()));
        info!(folder = %folder.display(), entries = manifest.len(), "generating scaffold");

        let mut files = Vec::with_capacity(manifest.len());
        for entry in manifest.entries() {
            files.push(Self::write_entry(ctx, &folder, base_name, entry)?);
        }

        store.reveal_asset(&folder);
        Ok(GeneratedArtifactSet { root: folder.clone(), folder: Some(folder), files })
    }

    /// Write a single file `<base_name>.<ext>` directly into `destination`.
    pub fn generate_single<S, T>(
        ctx: &AppContext<S, T>,
        request: &ScaffoldRequest,
    ) -> Result<GeneratedArtifactSet, AppError>
    where
        S: AssetStore,
        T: TemplateStore,
    {
        let manifest = ArtifactManifest::single(request.kind);
        let mut files = Vec::with_capacity(1);
        for entry in manifest.entries() {
            files.push(Self::write_entry(ctx, &request.destination, &request.base_name, entry)?);
        }

        let root = files[0].clone();
        ctx.store().reveal_asset(&root);
        Ok(GeneratedArtifactSet { root, folder: None, files })
    }

    fn write_entry<S, T>(
        ctx: &AppContext<S, T>,
        dir: &Path,
        base_name: &BaseName,
        entry: &ArtifactManifestEntry,
    ) -> Result<PathBuf, AppError>
    where
        S: AssetStore,
        T: TemplateStore,
    {
        let script_name = base_name.with_suffix(entry.name_suffix);
        let path = dir.join(ctx.file_name(&script_name));

        let template = ctx.templates().resolve(entry.kind)?;
        let content = render_script(&template, &script_name);

        let id = ctx.store().create_file_with_content(&path, &content).map_err(|err| {
            warn!(path = %path.display(), kind = %entry.kind, error = %err, "file write rejected");
            AppError::FileWriteFailed {
                path: path.clone(),
                kind: entry.kind,
                reason: err.to_string(),
            }
        })?;
        debug!(path = %path.display(), kind = %entry.kind, "wrote file");
        Ok(ctx.store().path_for_id(id).unwrap_or(path))
    }
}
