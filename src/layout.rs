use serde::Serialize;
use serde_json::{Value, json};
use std::collections::{BTreeMap, HashSet};

/// Identifiers the update callbacks bind to. They are part of the page's contract
/// and must stay stable.
pub mod ids {
    pub const DATASET_DROPDOWN: &str = "dataset-dropdown";
    pub const PROJ_HOROPCA_BTN: &str = "proj-horopca-btn";
    pub const PROJ_COSNE_BTN: &str = "proj-cosne-btn";
    pub const COMPARE_PROJECTIONS_BTN: &str = "compare-projections-btn";
    pub const HYPERPARAMS_DISPLAY: &str = "hyperparams-display";
    pub const HYPERPARAMS_TABLE: &str = "hyperparams-table";
    pub const COMPARE_BTN: &str = "compare-btn";
    pub const INTERPOLATE_MODE_BTN: &str = "interpolate-mode-btn";
    pub const TREE_MODE_BTN: &str = "tree-mode-btn";
    pub const NEIGHBORS_MODE_BTN: &str = "neighbors-mode-btn";
    pub const MODE_INSTRUCTIONS: &str = "mode-instructions";
    pub const INTERPOLATE_CONTROLS: &str = "interpolate-controls";
    pub const INTERPOLATION_DECREASE_BTN: &str = "interpolation-decrease-btn";
    pub const INTERPOLATION_SLIDER: &str = "interpolation-slider";
    pub const INTERPOLATION_INCREASE_BTN: &str = "interpolation-increase-btn";
    pub const RUN_INTERPOLATE_BTN: &str = "run-interpolate-btn";
    pub const CLEAR_PATH_BTN: &str = "clear-path-btn";
    pub const NEIGHBORS_CONTROLS: &str = "neighbors-controls";
    pub const NEIGHBORS_SLIDER: &str = "neighbors-slider";

    pub const SINGLE_PLOT_CONTAINER: &str = "single-plot-container";
    pub const SCATTER_DISK: &str = "scatter-disk";
    pub const COMPARISON_PLOT_CONTAINER: &str = "comparison-plot-container";
    pub const SCATTER_DISK_1: &str = "scatter-disk-1";
    pub const SCATTER_DISK_2: &str = "scatter-disk-2";

    pub const CMP_HEADER: &str = "cmp-header";
    pub const CMP_INSTRUCTIONS: &str = "cmp-instructions";
    pub const TREE_TRAVERSAL_SECTION: &str = "tree-traversal-section";
    pub const TREE_TRAVERSAL: &str = "tree-traversal";
    pub const TREE_LEVELS_ABOVE: &str = "tree-levels-above";
    pub const TREE_SELECTED_LEVEL: &str = "tree-selected-level";
    pub const TREE_LEVELS_BELOW: &str = "tree-levels-below";
    pub const CMP: &str = "cmp";

    pub const PROJ_STORE: &str = "proj";
    pub const DATA_STORE: &str = "data-store";
    pub const LABELS_STORE: &str = "labels-store";
    pub const FEATURE_NAMES_STORE: &str = "feature-names-store";
    pub const TARGET_NAMES_STORE: &str = "target-names-store";
    pub const IMAGES_STORE: &str = "images-store";
    pub const META_STORE: &str = "meta-store";
    pub const POINTS_STORE: &str = "points-store";
    pub const EMB_STORE: &str = "emb";
    pub const SEL_STORE: &str = "sel";
    pub const MODE_STORE: &str = "mode";
    pub const INTERPOLATED_POINT_STORE: &str = "interpolated-point";
    pub const COMPARISON_MODE_STORE: &str = "comparison-mode";
}

pub const TITLE: &str = "HIVE: Hyperbolic Interactive Visualization Explorer";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<String, String>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Style(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_hidden(&self) -> bool {
        self.get("display") == Some("none")
    }

    pub fn is_row(&self) -> bool {
        self.get("display") == Some("flex")
            && self.get("flexDirection").is_none_or(|d| d == "row")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageExportOptions {
    pub format: String,
    pub filename: String,
    pub height: u32,
    pub width: u32,
    pub scale: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphConfig {
    pub display_mode_bar: bool,
    pub displaylogo: bool,
    pub mode_bar_buttons_to_remove: Vec<String>,
    pub mode_bar_buttons_to_add: Vec<String>,
    pub show_tips: bool,
    pub to_image_button_options: ImageExportOptions,
    pub mode_bar_buttons: Vec<Vec<String>>,
}

impl GraphConfig {
    /// Pan/zoom mode bar with PNG export under `filename`.
    pub fn exporting_as(filename: &str) -> Self {
        let names = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        GraphConfig {
            display_mode_bar: true,
            displaylogo: false,
            mode_bar_buttons_to_remove: names(&["lasso2d", "select2d"]),
            mode_bar_buttons_to_add: Vec::new(),
            show_tips: true,
            to_image_button_options: ImageExportOptions {
                format: "png".to_string(),
                filename: filename.to_string(),
                height: 600,
                width: 800,
                scale: 2,
            },
            mode_bar_buttons: vec![
                names(&["pan2d", "zoom2d", "zoomIn2d", "zoomOut2d", "autoScale2d", "resetScale2d"]),
                names(&["toImage"]),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Component {
    Div,
    Span,
    Br,
    Heading { level: u8, text: String },
    Label { text: String },
    Paragraph { text: String },
    Img { src: String },
    Button { label: String, disabled: bool },
    Dropdown {
        options: Vec<DropdownOption>,
        value: String,
        clearable: bool,
    },
    NumberInput {
        min: i64,
        step: i64,
        value: i64,
        debounce: bool,
    },
    Slider {
        min: i64,
        max: i64,
        step: i64,
        value: i64,
        marks: BTreeMap<i64, String>,
        tooltip_placement: String,
        tooltip_always_visible: bool,
    },
    Graph { config: GraphConfig },
    Store { data: Option<Value> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    #[serde(flatten)]
    pub component: Component,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(component: Component) -> Self {
        Node {
            component,
            id: None,
            style: Style::new(),
            children: Vec::new(),
        }
    }

    pub fn div(children: Vec<Node>) -> Self {
        Node::new(Component::Div).with_children(children)
    }

    pub fn span() -> Self {
        Node::new(Component::Span)
    }

    pub fn heading(level: u8, text: &str) -> Self {
        Node::new(Component::Heading {
            level,
            text: text.to_string(),
        })
    }

    pub fn label(text: &str) -> Self {
        Node::new(Component::Label {
            text: text.to_string(),
        })
    }

    pub fn paragraph(text: &str) -> Self {
        Node::new(Component::Paragraph {
            text: text.to_string(),
        })
    }

    pub fn img(src: &str) -> Self {
        Node::new(Component::Img {
            src: src.to_string(),
        })
    }

    pub fn button(label: &str, id: &str) -> Self {
        Node::new(Component::Button {
            label: label.to_string(),
            disabled: false,
        })
        .with_id(id)
    }

    pub fn store(id: &str, data: Option<Value>) -> Self {
        Node::new(Component::Store { data }).with_id(id)
    }

    pub fn graph(id: &str, config: GraphConfig) -> Self {
        Node::new(Component::Graph { config }).with_id(id)
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn disabled(mut self) -> Self {
        if let Component::Button { disabled, .. } = &mut self.component {
            *disabled = true;
        }
        self
    }

    pub fn is_store(&self) -> bool {
        matches!(self.component, Component::Store { .. })
    }

    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Every identifier in document order, duplicates included.
    pub fn ids(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.visit(&mut |node| {
            if let Some(id) = node.id.as_deref() {
                out.push(id);
            }
        });
        out
    }

    pub fn stores(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        self.visit(&mut |node| {
            if node.is_store() {
                out.push(node);
            }
        });
        out
    }

    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for id in self.ids() {
            if !seen.insert(id) && !duplicates.iter().any(|d: &String| d == id) {
                duplicates.push(id.to_string());
            }
        }
        duplicates
    }

    fn visit<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a Node),
    {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }
}

lazy_static::lazy_static! {
    static ref BUTTON_BASE: Style = Style::from_pairs(&[
        ("color", "white"),
        ("border", "none"),
        ("padding", "0.5rem 1rem"),
        ("borderRadius", "6px"),
        ("cursor", "pointer"),
        ("width", "100%"),
        ("transition", "background-color 0.2s"),
    ]);

    static ref STEPPER_BUTTON: Style = Style::from_pairs(&[
        ("backgroundColor", "#f8f9fa"),
        ("border", "1px solid #ccc"),
        ("padding", "0.5rem"),
        ("cursor", "pointer"),
        ("fontSize", "1.2rem"),
        ("fontWeight", "bold"),
        ("width", "40px"),
        ("height", "40px"),
        ("display", "flex"),
        ("alignItems", "center"),
        ("justifyContent", "center"),
        ("color", "#495057"),
        ("transition", "background-color 0.2s"),
    ]);

    static ref CARD: Style = Style::from_pairs(&[
        ("padding", "1rem"),
        ("backgroundColor", "white"),
        ("borderRadius", "8px"),
        ("boxShadow", "0 1px 3px rgba(0,0,0,0.1)"),
    ]);
}

fn flex_button(background: &str) -> Style {
    BUTTON_BASE
        .clone()
        .set("backgroundColor", background)
        .set("minWidth", "0")
        .set("flex", "1 1 0")
        .set("boxSizing", "border-box")
}

fn button_row(buttons: Vec<Node>, margin_bottom: Option<&str>) -> Node {
    let mut style = Style::from_pairs(&[("display", "flex"), ("gap", "0.5rem")]);
    if let Some(margin) = margin_bottom {
        style = style.set("marginBottom", margin);
    }
    Node::div(buttons).with_style(style)
}

fn connector() -> Node {
    Node::div(Vec::new()).with_style(Style::from_pairs(&[
        ("height", "1rem"),
        ("width", "2px"),
        ("backgroundColor", "#007bff"),
        ("margin", "0 auto"),
        ("position", "relative"),
    ]))
}

fn interpolate_controls() -> Node {
    let stepper = Node::div(vec![
        Node::button("−", ids::INTERPOLATION_DECREASE_BTN)
            .with_style(STEPPER_BUTTON.clone().set("borderRadius", "6px 0 0 6px")),
        Node::new(Component::NumberInput {
            min: 1,
            step: 1,
            value: 5,
            debounce: false,
        })
        .with_id(ids::INTERPOLATION_SLIDER)
        .with_style(Style::from_pairs(&[
            ("width", "80px"),
            ("padding", "0.5rem"),
            ("border", "1px solid #ccc"),
            ("borderLeft", "none"),
            ("borderRight", "none"),
            ("fontSize", "0.9rem"),
            ("textAlign", "center"),
            ("height", "40px"),
            ("boxSizing", "border-box"),
        ])),
        Node::button("+", ids::INTERPOLATION_INCREASE_BTN)
            .with_style(STEPPER_BUTTON.clone().set("borderRadius", "0 6px 6px 0")),
    ])
    .with_style(Style::from_pairs(&[
        ("display", "flex"),
        ("alignItems", "center"),
        ("justifyContent", "center"),
        ("width", "fit-content"),
        ("margin", "0 auto"),
    ]));

    Node::div(vec![
        Node::div(vec![
            Node::label("Choose traverse path length:").with_style(Style::from_pairs(&[
                ("marginBottom", "0.5rem"),
                ("display", "block"),
                ("fontWeight", "500"),
            ])),
            stepper,
        ])
        .with_style(Style::from_pairs(&[("marginBottom", "1rem")])),
        Node::button("Create Path", ids::RUN_INTERPOLATE_BTN)
            .disabled()
            .with_style(
                BUTTON_BASE
                    .clone()
                    .set("backgroundColor", "#007bff")
                    .set("marginBottom", "0.5rem"),
            ),
        Node::button("Clear Path", ids::CLEAR_PATH_BTN)
            .with_style(BUTTON_BASE.clone().set("backgroundColor", "#dc3545")),
    ])
    .with_id(ids::INTERPOLATE_CONTROLS)
    .with_style(Style::from_pairs(&[("display", "none")]))
}

fn neighbors_controls() -> Node {
    Node::div(vec![
        Node::label("Number of neighbors (k):"),
        Node::new(Component::Slider {
            min: 1,
            max: 10,
            step: 1,
            value: 3,
            marks: (1..=10).map(|i| (i, i.to_string())).collect(),
            tooltip_placement: "bottom".to_string(),
            tooltip_always_visible: true,
        })
        .with_id(ids::NEIGHBORS_SLIDER),
    ])
    .with_id(ids::NEIGHBORS_CONTROLS)
    .with_style(Style::from_pairs(&[("display", "none")]))
}

pub fn config_panel() -> Node {
    Node::div(vec![
        Node::heading(4, "Configuration"),
        Node::label("Dataset"),
        Node::new(Component::Dropdown {
            options: vec![
                DropdownOption {
                    label: "ImageNet".to_string(),
                    value: "imagenet".to_string(),
                },
                DropdownOption {
                    label: "GRIT".to_string(),
                    value: "grit".to_string(),
                },
            ],
            value: "imagenet".to_string(),
            clearable: false,
        })
        .with_id(ids::DATASET_DROPDOWN)
        .with_style(Style::from_pairs(&[("marginBottom", "1rem")])),
        Node::label("Choose projection:"),
        button_row(
            vec![
                Node::button("HoroPCA", ids::PROJ_HOROPCA_BTN).with_style(flex_button("#28a745")),
                Node::button("CO-SNE", ids::PROJ_COSNE_BTN).with_style(flex_button("#6c757d")),
            ],
            Some("0.5rem"),
        ),
        Node::div(vec![
            Node::button("Dual View", ids::COMPARE_PROJECTIONS_BTN).with_style(
                BUTTON_BASE
                    .clone()
                    .set("backgroundColor", "#6c757d")
                    .set("marginBottom", "0.5rem"),
            ),
        ]),
        Node::store(ids::PROJ_STORE, Some(json!("horopca"))),
        Node::div(vec![
            Node::heading(6, "Hyperparameters").with_style(Style::from_pairs(&[
                ("margin", "0 0 0.5rem 0"),
                ("color", "#495057"),
                ("fontSize", "0.9rem"),
            ])),
            Node::div(Vec::new()).with_id(ids::HYPERPARAMS_TABLE),
        ])
        .with_id(ids::HYPERPARAMS_DISPLAY)
        .with_style(Style::from_pairs(&[
            ("marginTop", "0.5rem"),
            ("marginBottom", "1rem"),
            ("padding", "0.75rem"),
            ("backgroundColor", "#f8f9fa"),
            ("borderRadius", "6px"),
            ("border", "1px solid #e9ecef"),
        ])),
        Node::new(Component::Br),
        Node::label("Mode"),
        Node::div(vec![
            button_row(
                vec![
                    Node::button("Compare", ids::COMPARE_BTN).with_style(flex_button("green")),
                    Node::button("Traverse", ids::INTERPOLATE_MODE_BTN)
                        .with_style(flex_button("#007bff")),
                ],
                Some("0.5rem"),
            ),
            button_row(
                vec![
                    Node::button("Tree", ids::TREE_MODE_BTN).with_style(flex_button("#007bff")),
                    Node::button("Neighbors", ids::NEIGHBORS_MODE_BTN)
                        .with_style(flex_button("#007bff")),
                ],
                None,
            ),
        ])
        .with_style(Style::from_pairs(&[
            ("display", "flex"),
            ("flexDirection", "column"),
            ("gap", "0.5rem"),
            ("marginBottom", "1rem"),
        ])),
        Node::paragraph("Select up to 5 points.").with_id(ids::MODE_INSTRUCTIONS),
        interpolate_controls(),
        neighbors_controls(),
    ])
    .with_style(
        CARD.clone()
            .set("width", "20vw")
            .set("minWidth", "240px")
            .set("maxWidth", "300px")
            .set("flexShrink", "0")
            .set("overflowY", "auto"),
    )
}

fn comparison_graph(title: &str, id: &str, filename: &str) -> Node {
    Node::div(vec![
        Node::heading(5, title).with_style(Style::from_pairs(&[
            ("textAlign", "center"),
            ("margin", "0 0 1rem 0"),
            ("color", "#333"),
        ])),
        Node::graph(id, GraphConfig::exporting_as(filename)).with_style(Style::from_pairs(&[
            ("width", "100%"),
            ("height", "100%"),
            ("aspectRatio", "2 / 3"),
            ("maxWidth", "50vh"),
            ("maxHeight", "75vh"),
            ("minWidth", "300px"),
            ("minHeight", "450px"),
        ])),
    ])
    .with_style(Style::from_pairs(&[
        ("flex", "1"),
        ("display", "flex"),
        ("flexDirection", "column"),
        ("minWidth", "0"),
        ("alignItems", "center"),
        ("justifyContent", "center"),
    ]))
}

pub fn centre_panel() -> Node {
    Node::div(vec![
        Node::div(vec![
            Node::graph(ids::SCATTER_DISK, GraphConfig::exporting_as("scatter_plot"))
                .with_style(Style::from_pairs(&[("width", "100%"), ("height", "100%")])),
        ])
        .with_id(ids::SINGLE_PLOT_CONTAINER)
        .with_style(Style::from_pairs(&[
            ("display", "flex"),
            ("width", "min(85vh, 50vw)"),
            ("height", "min(85vh, 50vw)"),
            ("aspectRatio", "1 / 1"),
            ("margin", "auto"),
            ("maxWidth", "100%"),
            ("maxHeight", "100%"),
            ("flexShrink", "0"),
            ("flexGrow", "0"),
        ])),
        Node::div(vec![
            comparison_graph("HoroPCA", ids::SCATTER_DISK_1, "horopca_plot"),
            comparison_graph("CO-SNE", ids::SCATTER_DISK_2, "cosne_plot"),
        ])
        .with_id(ids::COMPARISON_PLOT_CONTAINER)
        .with_style(Style::from_pairs(&[
            ("display", "none"),
            ("width", "100%"),
            ("height", "100%"),
            ("margin", "auto"),
            ("gap", "2rem"),
            ("flexDirection", "row"),
            ("overflow", "visible"),
            ("alignItems", "center"),
            ("justifyContent", "center"),
        ])),
    ])
    .with_style(
        CARD.clone()
            .set("flex", "1")
            .set("width", "60vw")
            .set("display", "flex")
            .set("flexDirection", "column")
            .set("justifyContent", "center")
            .set("alignItems", "center")
            .set("minHeight", "0")
            .set("overflow", "visible"),
    )
}

/// One level of the tree traversal view; the current level is highlighted.
pub fn tree_node(title: &str, content: Node, is_current: bool) -> Node {
    let (color, weight, background) = if is_current {
        ("#007bff", "bold", "#f8f9fa")
    } else {
        ("#666", "normal", "transparent")
    };
    Node::div(vec![
        Node::heading(6, title).with_style(Style::from_pairs(&[
            ("color", color),
            ("fontWeight", weight),
            ("margin", "0 0 0.5rem 0"),
            ("padding", "0.5rem"),
            ("backgroundColor", background),
            ("borderRadius", "4px"),
        ])),
        content,
    ])
    .with_style(Style::from_pairs(&[
        ("marginBottom", "1rem"),
        ("position", "relative"),
        ("padding", "0.5rem"),
        ("backgroundColor", "white"),
        ("borderRadius", "8px"),
        ("boxShadow", "0 1px 3px rgba(0,0,0,0.1)"),
    ]))
}

pub fn cmp_panel() -> Node {
    Node::div(vec![
        Node::div(Vec::new()).with_id(ids::CMP_HEADER),
        Node::div(Vec::new()).with_id(ids::CMP_INSTRUCTIONS),
        Node::div(vec![
            Node::heading(5, "Tree Traversal").with_style(Style::from_pairs(&[
                ("marginTop", "1rem"),
                ("color", "#007bff"),
                ("padding", "0.5rem"),
                ("borderBottom", "2px solid #007bff"),
                ("marginBottom", "1rem"),
            ])),
            Node::div(vec![
                Node::div(vec![
                    Node::div(Vec::new()).with_id(ids::TREE_LEVELS_ABOVE),
                    connector(),
                    Node::div(Vec::new()).with_id(ids::TREE_SELECTED_LEVEL),
                    connector(),
                    Node::div(Vec::new()).with_id(ids::TREE_LEVELS_BELOW),
                ])
                .with_id(ids::TREE_TRAVERSAL),
            ]),
        ])
        .with_id(ids::TREE_TRAVERSAL_SECTION)
        .with_style(Style::from_pairs(&[("display", "none")])),
        Node::div(Vec::new()).with_id(ids::CMP),
    ])
    .with_style(
        CARD.clone()
            .set("width", "18vw")
            .set("minWidth", "300px")
            .set("maxWidth", "350px")
            .set("flexShrink", "0")
            .set("overflowY", "auto"),
    )
}

pub fn title_bar() -> Node {
    Node::div(vec![Node::heading(2, TITLE).with_style(Style::from_pairs(&[
        ("color", "white"),
        ("margin", "0"),
        ("padding", "0.5rem 0"),
    ]))])
    .with_style(Style::from_pairs(&[
        ("padding", "0 1rem"),
        ("backgroundColor", "rgb(33, 43, 181)"),
        ("boxShadow", "0 2px 8px rgba(0,0,0,0.1)"),
        ("height", "48px"),
        ("display", "flex"),
        ("alignItems", "center"),
    ]))
}

pub fn make_layout() -> Node {
    Node::div(vec![
        title_bar(),
        Node::store(ids::DATA_STORE, None),
        Node::store(ids::LABELS_STORE, None),
        Node::store(ids::FEATURE_NAMES_STORE, None),
        Node::store(ids::TARGET_NAMES_STORE, None),
        Node::store(ids::IMAGES_STORE, None),
        Node::store(ids::META_STORE, None),
        Node::store(ids::POINTS_STORE, None),
        Node::store(ids::EMB_STORE, None),
        Node::store(ids::SEL_STORE, Some(json!([]))),
        Node::store(ids::MODE_STORE, Some(json!("compare"))),
        Node::store(ids::INTERPOLATED_POINT_STORE, None),
        Node::store(ids::COMPARISON_MODE_STORE, Some(json!(false))),
        Node::div(vec![config_panel(), centre_panel(), cmp_panel()]).with_style(
            Style::from_pairs(&[
                ("display", "flex"),
                ("flex", "1"),
                ("minHeight", "0"),
                ("padding", "0.5rem"),
                ("gap", "0.5rem"),
            ]),
        ),
    ])
    .with_style(Style::from_pairs(&[
        ("display", "flex"),
        ("flexDirection", "column"),
        ("height", "100vh"),
        ("width", "100vw"),
        ("margin", "0"),
        ("padding", "0"),
        ("fontFamily", "Inter, sans-serif"),
        ("backgroundColor", "#f7f9fc"),
        ("overflow", "hidden"),
    ]))
}
