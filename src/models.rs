use crate::content::ContentResolver;
use crate::layout::Node;
use crate::logging::DebugLog;
use poll_promise::Promise;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

pub type MetaMap = HashMap<String, SynsetMeta>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EmbeddingType {
    ParentText,
    ChildText,
    Image,
    Other(String),
}

impl EmbeddingType {
    pub fn is_text(&self) -> bool {
        matches!(self, EmbeddingType::ParentText | EmbeddingType::ChildText)
    }

    pub fn as_str(&self) -> &str {
        match self {
            EmbeddingType::ParentText => "parent_text",
            EmbeddingType::ChildText => "child_text",
            EmbeddingType::Image => "image",
            EmbeddingType::Other(other) => other,
        }
    }
}

impl From<String> for EmbeddingType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "parent_text" => EmbeddingType::ParentText,
            "child_text" => EmbeddingType::ChildText,
            "image" => EmbeddingType::Image,
            _ => EmbeddingType::Other(value),
        }
    }
}

impl From<EmbeddingType> for String {
    fn from(value: EmbeddingType) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_type: Option<EmbeddingType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synset_id: Option<String>,
}

impl Point {
    pub fn image() -> Self {
        Point::default()
    }

    pub fn text(embedding_type: EmbeddingType, synset_id: &str) -> Self {
        Point {
            embedding_type: Some(embedding_type),
            synset_id: Some(synset_id.to_string()),
        }
    }
}

/// Label record for one synset: `name` is the parent label, `description` the child label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynsetMeta {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Single-channel raster stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<f64>,
}

impl Bitmap {
    /// Square when the length allows it, a single row otherwise.
    pub fn from_flat(pixels: Vec<f64>) -> Option<Self> {
        if pixels.is_empty() {
            return None;
        }
        let len = pixels.len();
        let side = (len as f64).sqrt().round() as usize;
        let (width, height) = if side * side == len { (side, side) } else { (len, 1) };
        Some(Bitmap {
            width: u32::try_from(width).ok()?,
            height: u32::try_from(height).ok()?,
            pixels,
        })
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let height = rows.len();
        Some(Bitmap {
            width: u32::try_from(width).ok()?,
            height: u32::try_from(height).ok()?,
            pixels: rows.into_iter().flatten().collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImageRef {
    Bitmap(Bitmap),
    Path(String),
    /// Row with no image, such as a text point in a mixed bundle.
    Missing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentElement {
    Image { src: String },
    Text { text: String, unavailable: bool },
    Empty,
}

impl ContentElement {
    pub fn text(text: impl Into<String>) -> Self {
        ContentElement::Text {
            text: text.into(),
            unavailable: false,
        }
    }

    pub fn unavailable() -> Self {
        ContentElement::Text {
            text: "Text content unavailable".to_string(),
            unavailable: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ContentElement::Empty)
    }
}

/// Precomputed inspection data opened by the preview shell.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    pub images: Option<Vec<ImageRef>>,
    pub points: Option<Vec<Point>>,
    pub meta: Option<MetaMap>,
    pub projections: BTreeMap<String, Vec<[f64; 2]>>,
    pub hyperparams: BTreeMap<String, BTreeMap<String, serde_json::Value>>,
}

impl Bundle {
    pub fn len(&self) -> usize {
        self.projections
            .values()
            .map(Vec::len)
            .chain(self.images.as_ref().map(Vec::len))
            .chain(self.points.as_ref().map(Vec::len))
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compare,
    Interpolate,
    Tree,
    Neighbors,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Compare => "compare",
            Mode::Interpolate => "interpolate",
            Mode::Tree => "tree",
            Mode::Neighbors => "neighbors",
        }
    }

    pub fn from_button(id: &str) -> Option<Self> {
        use crate::layout::ids;
        match id {
            ids::COMPARE_BTN => Some(Mode::Compare),
            ids::INTERPOLATE_MODE_BTN => Some(Mode::Interpolate),
            ids::TREE_MODE_BTN => Some(Mode::Tree),
            ids::NEIGHBORS_MODE_BTN => Some(Mode::Neighbors),
            _ => None,
        }
    }

    pub fn selection_limit(self) -> usize {
        match self {
            Mode::Compare => 5,
            Mode::Interpolate => 2,
            Mode::Tree | Mode::Neighbors => 1,
        }
    }

    pub fn instructions(self) -> &'static str {
        match self {
            Mode::Compare => "Select up to 5 points.",
            Mode::Interpolate => "Select two points to traverse between.",
            Mode::Tree => "Select a point to view its place in the hierarchy.",
            Mode::Neighbors => "Select a point to view its neighbors.",
        }
    }
}

pub struct AppState {
    pub resolver: ContentResolver,
    pub layout: Rc<Node>,
    pub stores: BTreeMap<String, serde_json::Value>,
    pub widgets: BTreeMap<String, serde_json::Value>,
    pub visibility: HashMap<String, bool>,
    pub mode: Mode,
    pub bundle: Option<Bundle>,
    pub bundle_name: Option<String>,
    pub bundle_promise: Option<Promise<Result<Bundle, String>>>,
    pub selected: Vec<(usize, ContentElement)>,
    pub debug_log: DebugLog,
    pub debug_panel_height: f32,
    pub debug_panel_visible: bool,
}
