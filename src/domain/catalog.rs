//! Static template catalog: one immutable descriptor per template kind.

use serde::Serialize;

use super::TemplateKind;

/// Extension of template text resources.
pub const TEMPLATE_EXTENSION: &str = "txt";

/// Menu priorities are offsets from this base, matching the host's script menu.
const SCRIPT_MENU_PRIORITY: i32 = -1000;

/// Resolved metadata for one template kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateDescriptor {
    pub kind: TemplateKind,
    /// Template resource file name, `<Kind>.txt`.
    pub file_name: String,
    /// Menu label shown by the command surface.
    pub label: &'static str,
    pub priority: i32,
    /// Base name used by single-file scaffolds, `New<Kind>`.
    pub default_base_name: String,
}

impl TemplateDescriptor {
    fn new(kind: TemplateKind, label: &'static str, offset: i32) -> Self {
        Self {
            kind,
            file_name: format!("{}.{}", kind.name(), TEMPLATE_EXTENSION),
            label,
            priority: SCRIPT_MENU_PRIORITY + offset,
            default_base_name: format!("New{}", kind.name()),
        }
    }
}

/// Immutable kind → descriptor table owned by the engine.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    descriptors: Vec<TemplateDescriptor>,
}

impl TemplateCatalog {
    /// The built-in catalog covering every [`TemplateKind`].
    pub fn builtin() -> Self {
        let descriptors = vec![
            TemplateDescriptor::new(TemplateKind::Behavior, "Behavior", 1),
            TemplateDescriptor::new(TemplateKind::Class, "Class", 2),
            TemplateDescriptor::new(TemplateKind::Interface, "Interface", 3),
            TemplateDescriptor::new(TemplateKind::DataType, "Data Type", 4),
            TemplateDescriptor::new(TemplateKind::ValueType, "Value Type", 5),
            TemplateDescriptor::new(TemplateKind::CompositeFeature, "Renderer Feature", 6),
            TemplateDescriptor::new(TemplateKind::CompositeFeaturePass, "Renderer Pass", 7),
            TemplateDescriptor::new(TemplateKind::CompositeFeatureSetting, "Renderer Setting", 8),
        ];
        Self { descriptors }
    }

    /// Descriptor for a kind. Every kind has exactly one.
    pub fn descriptor(&self, kind: TemplateKind) -> &TemplateDescriptor {
        self.descriptors
            .iter()
            .find(|d| d.kind == kind)
            .unwrap_or_else(|| unreachable!("catalog covers every template kind"))
    }

    /// Descriptors sorted by menu priority.
    pub fn menu(&self) -> Vec<&TemplateDescriptor> {
        let mut items: Vec<&TemplateDescriptor> = self.descriptors.iter().collect();
        items.sort_by_key(|d| d.priority);
        items
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
