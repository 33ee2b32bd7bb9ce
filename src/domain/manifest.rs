use super::TemplateKind;

/// One file of a scaffold: `<base name><suffix>` rendered from `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactManifestEntry {
    pub name_suffix: &'static str,
    pub kind: TemplateKind,
}

/// Ordered list of files produced by one scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactManifest {
    entries: Vec<ArtifactManifestEntry>,
}

impl ArtifactManifest {
    /// The renderer-feature set: entry point, pass, and settings.
    pub fn composite_feature() -> Self {
        Self {
            entries: vec![
                ArtifactManifestEntry { name_suffix: "", kind: TemplateKind::CompositeFeature },
                ArtifactManifestEntry {
                    name_suffix: ".Pass",
                    kind: TemplateKind::CompositeFeaturePass,
                },
                ArtifactManifestEntry {
                    name_suffix: ".Setting",
                    kind: TemplateKind::CompositeFeatureSetting,
                },
            ],
        }
    }

    /// A one-file manifest with no suffix.
    pub fn single(kind: TemplateKind) -> Self {
        Self { entries: vec![ArtifactManifestEntry { name_suffix: "", kind }] }
    }

    pub fn entries(&self) -> &[ArtifactManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
