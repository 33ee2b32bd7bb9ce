use std::fmt;

use serde::Serialize;

/// The artifact shapes the engine knows how to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TemplateKind {
    /// Component script attached to scene objects.
    Behavior,
    /// Plain class.
    Class,
    /// Interface declaration.
    Interface,
    /// Serializable data asset type.
    DataType,
    /// Value type (struct).
    ValueType,
    /// Renderer feature entry point; root of the composite set.
    CompositeFeature,
    /// Render pass owned by a renderer feature.
    CompositeFeaturePass,
    /// Settings type owned by a renderer feature.
    CompositeFeatureSetting,
}

impl TemplateKind {
    /// All kinds in menu order.
    pub const ALL: [TemplateKind; 8] = [
        TemplateKind::Behavior,
        TemplateKind::Class,
        TemplateKind::Interface,
        TemplateKind::DataType,
        TemplateKind::ValueType,
        TemplateKind::CompositeFeature,
        TemplateKind::CompositeFeaturePass,
        TemplateKind::CompositeFeatureSetting,
    ];

    /// Canonical name; also the template file stem.
    pub fn name(&self) -> &'static str {
        match self {
            TemplateKind::Behavior => "Behavior",
            TemplateKind::Class => "Class",
            TemplateKind::Interface => "Interface",
            TemplateKind::DataType => "DataType",
            TemplateKind::ValueType => "ValueType",
            TemplateKind::CompositeFeature => "CompositeFeature",
            TemplateKind::CompositeFeaturePass => "CompositeFeaturePass",
            TemplateKind::CompositeFeatureSetting => "CompositeFeatureSetting",
        }
    }

    /// Parse a kind from its name or a common alias (case-insensitive).
    pub fn from_name(name: &str) -> Option<TemplateKind> {
        match name.to_lowercase().replace(['-', '_'], "").as_str() {
            "behavior" | "behaviour" | "monobehaviour" | "monobehavior" => {
                Some(TemplateKind::Behavior)
            }
            "class" => Some(TemplateKind::Class),
            "interface" => Some(TemplateKind::Interface),
            "datatype" | "scriptableobject" | "data" => Some(TemplateKind::DataType),
            "valuetype" | "struct" => Some(TemplateKind::ValueType),
            "compositefeature" | "feature" | "rendererfeature" => {
                Some(TemplateKind::CompositeFeature)
            }
            "compositefeaturepass" | "rendererpass" => Some(TemplateKind::CompositeFeaturePass),
            "compositefeaturesetting" | "renderersetting" => {
                Some(TemplateKind::CompositeFeatureSetting)
            }
            _ => None,
        }
    }

    /// Whether this kind is only produced through the composite scaffold.
    pub fn is_composite_part(&self) -> bool {
        matches!(
            self,
            TemplateKind::CompositeFeature
                | TemplateKind::CompositeFeaturePass
                | TemplateKind::CompositeFeatureSetting
        )
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
