use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{CollageError, CollageResult};

/// Identifier of one of the built-in layout templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TemplateId {
    /// One slot centered on top, two side by side below.
    #[serde(rename = "triangle")]
    Triangle,
    /// 2x2 grid.
    #[serde(rename = "grid-4")]
    Grid4,
    /// 3x3 grid.
    #[serde(rename = "grid-9")]
    Grid9,
    /// Single row of equal-width slots.
    #[serde(rename = "horizontal")]
    Horizontal,
    /// Single column of equal-height slots.
    #[serde(rename = "vertical")]
    Vertical,
}

impl TemplateId {
    /// Every template id, in display order.
    pub const ALL: [TemplateId; 5] = [
        TemplateId::Triangle,
        TemplateId::Grid4,
        TemplateId::Grid9,
        TemplateId::Horizontal,
        TemplateId::Vertical,
    ];

    /// Stable string id (`"grid-4"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Triangle => "triangle",
            TemplateId::Grid4 => "grid-4",
            TemplateId::Grid9 => "grid-9",
            TemplateId::Horizontal => "horizontal",
            TemplateId::Vertical => "vertical",
        }
    }

    /// The registry entry for this id.
    pub fn template(self) -> &'static Template {
        Template::get(self)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = CollageError;

    fn from_str(s: &str) -> CollageResult<Self> {
        let needle = s.trim();
        TemplateId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                let known = TemplateId::ALL.map(TemplateId::as_str).join(", ");
                CollageError::configuration(format!(
                    "unknown template id \"{needle}\" (expected one of: {known})"
                ))
            })
    }
}

/// How a template partitions the canvas into slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotGeometry {
    /// Fixed three-slot arrangement.
    Triangle,
    /// `rows x cols` cells filled row-major.
    Grid {
        /// Row count.
        rows: u32,
        /// Column count.
        cols: u32,
    },
    /// One column per image.
    Row,
    /// One row per image.
    Column,
}

/// Static description of a layout template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Template {
    /// Template id.
    pub id: TemplateId,
    /// Short display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Maximum number of images the layout consumes.
    pub max_images: usize,
    /// Slot arrangement.
    pub geometry: SlotGeometry,
}

static TEMPLATES: [Template; 5] = [
    Template {
        id: TemplateId::Triangle,
        name: "Triangle",
        description: "3 images: one on top, two below",
        max_images: 3,
        geometry: SlotGeometry::Triangle,
    },
    Template {
        id: TemplateId::Grid4,
        name: "Grid 2x2",
        description: "4 images in a square grid",
        max_images: 4,
        geometry: SlotGeometry::Grid { rows: 2, cols: 2 },
    },
    Template {
        id: TemplateId::Grid9,
        name: "Grid 3x3",
        description: "9 images in a 3x3 grid",
        max_images: 9,
        geometry: SlotGeometry::Grid { rows: 3, cols: 3 },
    },
    Template {
        id: TemplateId::Horizontal,
        name: "Horizontal",
        description: "Images side by side in one row",
        max_images: 6,
        geometry: SlotGeometry::Row,
    },
    Template {
        id: TemplateId::Vertical,
        name: "Vertical",
        description: "Images stacked in one column",
        max_images: 6,
        geometry: SlotGeometry::Column,
    },
];

impl Template {
    /// Look up a template by id.
    pub fn get(id: TemplateId) -> &'static Template {
        // TEMPLATES is ordered like TemplateId::ALL.
        &TEMPLATES[id as usize]
    }

    /// All templates, in display order.
    pub fn all() -> &'static [Template] {
        &TEMPLATES
    }

    /// Number of images this template consumes out of `available`.
    pub fn capacity_for(&self, available: usize) -> usize {
        available.min(self.max_images)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/registry.rs"]
mod tests;
