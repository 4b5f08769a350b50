use crate::content::{ContentResolver, decode_data_uri};
use crate::data::load_bundle;
use crate::layout::{self, Component, Node, Style, ids};
use crate::logging::DebugLog;
use crate::models::{AppState, ContentElement, Mode};
use eframe::egui;
use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Line, Plot, PlotPoints, Points};
use poll_promise::Promise;
use rfd::FileDialog;
use serde_json::{Value, json};
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, HashMap};
use std::f64::consts::TAU;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

const PICK_RADIUS: f64 = 0.05;
const DEFAULT_PROJECTION: &str = "horopca";

pub fn initial_state(resolver: ContentResolver, debug_log: DebugLog) -> AppState {
    let layout = layout::make_layout();

    let mut stores = BTreeMap::new();
    for store in layout.stores() {
        if let (Some(id), Component::Store { data }) = (&store.id, &store.component) {
            stores.insert(id.clone(), data.clone().unwrap_or(Value::Null));
        }
    }

    let mut widgets = BTreeMap::new();
    collect_widget_defaults(&layout, &mut widgets);

    AppState {
        resolver,
        layout: Rc::new(layout),
        stores,
        widgets,
        visibility: HashMap::new(),
        mode: Mode::Compare,
        bundle: None,
        bundle_name: None,
        bundle_promise: None,
        selected: Vec::new(),
        debug_log,
        debug_panel_height: 150.0,
        debug_panel_visible: true,
    }
}

fn collect_widget_defaults(node: &Node, widgets: &mut BTreeMap<String, Value>) {
    if let Some(id) = &node.id {
        let value = match &node.component {
            Component::Dropdown { value, .. } => Some(json!(value)),
            Component::NumberInput { value, .. } | Component::Slider { value, .. } => {
                Some(json!(value))
            }
            _ => None,
        };
        if let Some(value) = value {
            widgets.insert(id.clone(), value);
        }
    }
    for child in &node.children {
        collect_widget_defaults(child, widgets);
    }
}

fn panel(layout: &Node, index: usize) -> Option<&Node> {
    layout.children.last()?.children.get(index)
}

pub fn current_projection(state: &AppState) -> String {
    state
        .stores
        .get(ids::PROJ_STORE)
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_PROJECTION)
        .to_string()
}

pub fn comparison_enabled(state: &AppState) -> bool {
    state
        .stores
        .get(ids::COMPARISON_MODE_STORE)
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

fn widget_i64(state: &AppState, id: &str) -> Option<i64> {
    state.widgets.get(id).and_then(Value::as_i64)
}

fn is_visible(node: &Node, state: &AppState) -> bool {
    node.id
        .as_deref()
        .and_then(|id| state.visibility.get(id).copied())
        .unwrap_or(!node.style.is_hidden())
}

pub fn handle_click(id: &str, state: &mut AppState) {
    tracing::debug!(id, "button clicked");

    if let Some(mode) = Mode::from_button(id) {
        set_mode(state, mode);
        return;
    }

    match id {
        ids::PROJ_HOROPCA_BTN => set_projection(state, "horopca"),
        ids::PROJ_COSNE_BTN => set_projection(state, "cosne"),
        ids::COMPARE_PROJECTIONS_BTN => {
            let enabled = !comparison_enabled(state);
            state
                .stores
                .insert(ids::COMPARISON_MODE_STORE.to_string(), json!(enabled));
            state
                .visibility
                .insert(ids::SINGLE_PLOT_CONTAINER.to_string(), !enabled);
            state
                .visibility
                .insert(ids::COMPARISON_PLOT_CONTAINER.to_string(), enabled);
            tracing::info!(enabled, "dual view toggled");
        }
        ids::INTERPOLATION_DECREASE_BTN => step_path_length(state, -1),
        ids::INTERPOLATION_INCREASE_BTN => step_path_length(state, 1),
        ids::CLEAR_PATH_BTN => {
            state
                .stores
                .insert(ids::INTERPOLATED_POINT_STORE.to_string(), Value::Null);
            clear_selection(state);
        }
        _ => tracing::debug!(id, "no handler for button"),
    }
}

fn set_projection(state: &mut AppState, projection: &str) {
    state
        .stores
        .insert(ids::PROJ_STORE.to_string(), json!(projection));
    tracing::info!(projection, "projection selected");
}

fn set_mode(state: &mut AppState, mode: Mode) {
    state.mode = mode;
    state
        .stores
        .insert(ids::MODE_STORE.to_string(), json!(mode.as_str()));
    state
        .visibility
        .insert(ids::INTERPOLATE_CONTROLS.to_string(), mode == Mode::Interpolate);
    state
        .visibility
        .insert(ids::NEIGHBORS_CONTROLS.to_string(), mode == Mode::Neighbors);
    state
        .visibility
        .insert(ids::TREE_TRAVERSAL_SECTION.to_string(), mode == Mode::Tree);
    clear_selection(state);
    tracing::info!(mode = mode.as_str(), "mode changed");
}

fn step_path_length(state: &mut AppState, delta: i64) {
    let current = widget_i64(state, ids::INTERPOLATION_SLIDER).unwrap_or(5);
    let next = (current + delta).max(1);
    state
        .widgets
        .insert(ids::INTERPOLATION_SLIDER.to_string(), json!(next));
}

fn clear_selection(state: &mut AppState) {
    state.selected.clear();
    sync_selection_store(state);
}

fn sync_selection_store(state: &mut AppState) {
    let indices: Vec<usize> = state.selected.iter().map(|(i, _)| *i).collect();
    state.stores.insert(ids::SEL_STORE.to_string(), json!(indices));
}

/// Toggles `index` in the selection, evicting the oldest entry at the mode's limit.
pub fn select_point(state: &mut AppState, index: usize) {
    if let Some(pos) = state.selected.iter().position(|(i, _)| *i == index) {
        state.selected.remove(pos);
    } else {
        if state.selected.len() >= state.mode.selection_limit() {
            state.selected.remove(0);
        }
        let element = match &state.bundle {
            Some(bundle) => state.resolver.resolve(
                index,
                bundle.images.as_deref(),
                bundle.points.as_deref(),
                bundle.meta.as_ref(),
            ),
            None => ContentElement::Empty,
        };
        tracing::debug!(index, empty = element.is_empty(), "point selected");
        state.selected.push((index, element));
    }
    sync_selection_store(state);
}

pub fn nearest_point(coords: &[[f64; 2]], target: [f64; 2]) -> Option<usize> {
    coords
        .iter()
        .enumerate()
        .map(|(i, [x, y])| (i, (x - target[0]).powi(2) + (y - target[1]).powi(2)))
        .filter(|(_, d)| *d <= PICK_RADIUS * PICK_RADIUS)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

pub fn parse_color(value: &str) -> Option<Color32> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        return match hex.len() {
            6 => Some(Color32::from_rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&hex[i..i + 1]).map(|c| c * 17);
                Some(Color32::from_rgb(short(0)?, short(1)?, short(2)?))
            }
            _ => None,
        };
    }
    if let Some(inner) = value.strip_prefix("rgb(").and_then(|v| v.strip_suffix(')')) {
        let parts: Vec<u8> = inner
            .split(',')
            .map(|p| p.trim().parse::<u8>())
            .collect::<Result<_, _>>()
            .ok()?;
        return match parts.as_slice() {
            [r, g, b] => Some(Color32::from_rgb(*r, *g, *b)),
            _ => None,
        };
    }
    match value {
        "white" => Some(Color32::WHITE),
        "green" => Some(Color32::from_rgb(0, 128, 0)),
        "transparent" => Some(Color32::TRANSPARENT),
        _ => None,
    }
}

fn styled_text(text: &str, style: &Style) -> RichText {
    let mut rich = RichText::new(text);
    if let Some(color) = style.get("color").and_then(parse_color) {
        rich = rich.color(color);
    }
    if style.get("fontStyle") == Some("italic") {
        rich = rich.italics();
    }
    if matches!(style.get("fontWeight"), Some("bold" | "500" | "600" | "700")) {
        rich = rich.strong();
    }
    rich
}

fn heading_size(level: u8) -> f32 {
    match level {
        1 | 2 => 22.0,
        3 | 4 => 18.0,
        5 => 16.0,
        _ => 14.0,
    }
}

fn button_fill(id: &str, node: &Node, state: &AppState) -> Option<Color32> {
    let active = Color32::from_rgb(0x28, 0xa7, 0x45);
    let idle = Color32::from_rgb(0x6c, 0x75, 0x7d);
    let mode_idle = Color32::from_rgb(0x00, 0x7b, 0xff);
    match id {
        ids::PROJ_HOROPCA_BTN | ids::PROJ_COSNE_BTN => {
            let projection = if id == ids::PROJ_HOROPCA_BTN { "horopca" } else { "cosne" };
            Some(if current_projection(state) == projection { active } else { idle })
        }
        ids::COMPARE_PROJECTIONS_BTN => Some(if comparison_enabled(state) { active } else { idle }),
        _ => match Mode::from_button(id) {
            Some(mode) => Some(if state.mode == mode { active } else { mode_idle }),
            None => node.style.get("backgroundColor").and_then(parse_color),
        },
    }
}

pub fn render_node(ui: &mut Ui, node: &Node, state: &mut AppState) {
    if !is_visible(node, state) {
        return;
    }
    if let Some(id) = node.id.as_deref() {
        if render_dynamic_region(ui, id, state) {
            return;
        }
    }

    match &node.component {
        Component::Div => {
            if node.style.is_row() {
                ui.horizontal_wrapped(|ui| render_children(ui, node, state));
            } else {
                ui.vertical(|ui| render_children(ui, node, state));
            }
        }
        Component::Span | Component::Store { .. } => {}
        Component::Br => ui.add_space(8.0),
        Component::Heading { level, text } => {
            ui.label(styled_text(text, &node.style).size(heading_size(*level)).strong());
        }
        Component::Label { text } => {
            ui.label(styled_text(text, &node.style));
        }
        Component::Paragraph { text } => {
            ui.add(egui::Label::new(styled_text(text, &node.style)).wrap());
        }
        Component::Img { src } => show_data_uri(ui, src),
        Component::Button { label, disabled } => {
            let id = node.id.as_deref().unwrap_or_default();
            let text_color = node
                .style
                .get("color")
                .and_then(parse_color)
                .unwrap_or(Color32::BLACK);
            let mut button = egui::Button::new(RichText::new(label).color(text_color));
            if let Some(fill) = button_fill(id, node, state) {
                button = button.fill(fill);
            }
            if ui.add_enabled(!*disabled, button).clicked() {
                handle_click(id, state);
            }
        }
        Component::Dropdown { options, value, .. } => {
            let id = node.id.clone().unwrap_or_default();
            let before = state
                .widgets
                .get(&id)
                .and_then(Value::as_str)
                .unwrap_or(value)
                .to_string();
            let mut current = before.clone();
            let selected_text = options
                .iter()
                .find(|o| o.value == current)
                .map(|o| o.label.clone())
                .unwrap_or_else(|| current.clone());
            egui::ComboBox::from_id_salt(&id)
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for option in options {
                        ui.selectable_value(&mut current, option.value.clone(), &option.label);
                    }
                });
            if current != before {
                tracing::info!(id = %id, value = %current, "dropdown changed");
                state.widgets.insert(id, json!(current));
            }
        }
        Component::NumberInput { min, step, value, .. } => {
            let id = node.id.clone().unwrap_or_default();
            let mut current = widget_i64(state, &id).unwrap_or(*value);
            let response = ui.add(
                egui::DragValue::new(&mut current)
                    .range(*min..=i64::MAX)
                    .speed(*step as f64),
            );
            if response.changed() {
                state.widgets.insert(id, json!(current));
            }
        }
        Component::Slider { min, max, step, value, .. } => {
            let id = node.id.clone().unwrap_or_default();
            let mut current = widget_i64(state, &id).unwrap_or(*value);
            let response =
                ui.add(egui::Slider::new(&mut current, *min..=*max).step_by(*step as f64));
            if response.changed() {
                state.widgets.insert(id, json!(current));
            }
        }
        Component::Graph { .. } => {
            if let Some(id) = node.id.as_deref() {
                render_plot(ui, id, state);
            }
        }
    }
}

fn render_children(ui: &mut Ui, node: &Node, state: &mut AppState) {
    for child in &node.children {
        render_node(ui, child, state);
    }
}

/// Regions whose contents the shell computes instead of the static tree.
fn render_dynamic_region(ui: &mut Ui, id: &str, state: &mut AppState) -> bool {
    match id {
        ids::MODE_INSTRUCTIONS => {
            ui.add(egui::Label::new(state.mode.instructions()).wrap());
        }
        ids::HYPERPARAMS_TABLE => render_hyperparams(ui, state),
        ids::CMP_HEADER => {
            if !state.selected.is_empty() {
                ui.label(
                    RichText::new(format!(
                        "Selected points ({}/{})",
                        state.selected.len(),
                        state.mode.selection_limit()
                    ))
                    .size(heading_size(5))
                    .strong(),
                );
            }
        }
        ids::CMP_INSTRUCTIONS => {
            let hint = if state.bundle.is_none() {
                Some("Open a bundle to explore its points.")
            } else if state.selected.is_empty() {
                Some("Click a point in the plot to inspect it.")
            } else {
                None
            };
            if let Some(hint) = hint {
                ui.label(RichText::new(hint).weak());
            }
        }
        ids::TREE_SELECTED_LEVEL => {
            if let Some((index, element)) = state.selected.last().cloned() {
                let node = layout::tree_node(&format!("Point {index}"), element.into_node(), true);
                render_node(ui, &node, state);
            }
        }
        ids::CMP => {
            if state.mode == Mode::Tree {
                return true;
            }
            let cards: Vec<(usize, Node)> = state
                .selected
                .iter()
                .map(|(i, element)| (*i, element.clone().into_node()))
                .collect();
            for (index, card) in cards {
                ui.separator();
                ui.label(RichText::new(format!("Point {index}")).strong());
                render_node(ui, &card, state);
            }
        }
        _ => return false,
    }
    true
}

fn render_hyperparams(ui: &mut Ui, state: &AppState) {
    let Some(bundle) = &state.bundle else {
        ui.label(RichText::new("No bundle loaded.").weak());
        return;
    };

    let projections = if comparison_enabled(state) {
        vec!["horopca".to_string(), "cosne".to_string()]
    } else {
        vec![current_projection(state)]
    };

    for projection in projections {
        match bundle.hyperparams.get(&projection) {
            Some(params) => {
                ui.label(RichText::new(&projection).strong());
                egui::Grid::new(format!("hyperparams-{projection}"))
                    .striped(true)
                    .show(ui, |ui| {
                        for (key, value) in params {
                            ui.label(key);
                            ui.label(match value {
                                Value::String(s) => s.clone(),
                                other => other.to_string(),
                            });
                            ui.end_row();
                        }
                    });
            }
            None => {
                ui.label(RichText::new(format!("No hyperparameters for {projection}.")).weak());
            }
        }
    }
}

fn show_data_uri(ui: &mut Ui, src: &str) {
    if src.is_empty() {
        ui.label(RichText::new("(image unavailable)").weak());
        return;
    }
    match decode_data_uri(src) {
        Some((mime, bytes)) => {
            let mut hasher = DefaultHasher::new();
            src.hash(&mut hasher);
            let uri = format!("bytes://hive/{:016x}.{mime}", hasher.finish());
            ui.add(egui::Image::from_bytes(uri, bytes).max_size(egui::vec2(300.0, 300.0)));
        }
        None => {
            ui.label(RichText::new("(unreadable image)").weak());
        }
    }
}

fn render_plot(ui: &mut Ui, id: &str, state: &mut AppState) {
    let projection = match id {
        ids::SCATTER_DISK_1 => "horopca".to_string(),
        ids::SCATTER_DISK_2 => "cosne".to_string(),
        _ => current_projection(state),
    };
    let coords: Vec<[f64; 2]> = state
        .bundle
        .as_ref()
        .and_then(|b| b.projections.get(&projection))
        .cloned()
        .unwrap_or_default();
    let highlighted: Vec<[f64; 2]> = state
        .selected
        .iter()
        .filter_map(|(i, _)| coords.get(*i).copied())
        .collect();

    let boundary: PlotPoints = (0..=128)
        .map(|i| {
            let t = TAU * i as f64 / 128.0;
            [t.cos(), t.sin()]
        })
        .collect();

    let width = if comparison_enabled(state) {
        ui.available_width() / 2.0 - 16.0
    } else {
        ui.available_width()
    };
    let size = width.min(ui.available_height() - 24.0).max(200.0);

    let response = Plot::new(id)
        .data_aspect(1.0)
        .width(size)
        .height(size)
        .show_axes(false)
        .show_grid(false)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(boundary).color(Color32::GRAY).name("boundary"));
            plot_ui.points(Points::new(coords.clone()).radius(2.5).name(&projection));
            if !highlighted.is_empty() {
                plot_ui.points(
                    Points::new(highlighted)
                        .radius(5.0)
                        .color(Color32::RED)
                        .name("selected"),
                );
            }
            plot_ui.pointer_coordinate()
        });

    if response.response.clicked() {
        if let Some(pointer) = response.inner {
            if let Some(index) = nearest_point(&coords, [pointer.x, pointer.y]) {
                select_point(state, index);
            }
        }
    }
}

pub fn title_bar(ui: &mut Ui, state: &mut AppState) {
    let layout = Rc::clone(&state.layout);
    ui.horizontal(|ui| {
        if let Some(title) = layout.children.first() {
            render_children(ui, title, state);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let loading = state.bundle_promise.is_some();
            if ui.add_enabled(!loading, egui::Button::new("Open bundle…")).clicked() {
                if let Some(path) = FileDialog::new().add_filter("JSON", &["json"]).pick_file() {
                    state.bundle_name = path
                        .file_name()
                        .and_then(|s| s.to_str())
                        .map(str::to_string);
                    state.bundle_promise = Some(Promise::spawn_thread("load_bundle", move || {
                        load_bundle(&path).map_err(|e| e.to_string())
                    }));
                }
            }
            if loading {
                ui.spinner();
            } else if let Some(name) = &state.bundle_name {
                ui.label(RichText::new(name).color(Color32::WHITE));
            }
        });
    });
}

pub fn poll_bundle(ctx: &egui::Context, state: &mut AppState) {
    let ready = state
        .bundle_promise
        .as_ref()
        .and_then(|promise| promise.ready().cloned());

    match ready {
        Some(Ok(bundle)) => {
            state.bundle_promise = None;
            state
                .stores
                .insert(ids::POINTS_STORE.to_string(), json!(bundle.len()));
            state.bundle = Some(bundle);
            clear_selection(state);
            ctx.request_repaint();
        }
        Some(Err(err)) => {
            state.bundle_promise = None;
            state.bundle_name = None;
            tracing::error!(%err, "failed to load bundle");
            ctx.request_repaint();
        }
        None if state.bundle_promise.is_some() => {
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }
        None => {}
    }
}

pub fn config_panel(ui: &mut Ui, state: &mut AppState) {
    let layout = Rc::clone(&state.layout);
    if let Some(node) = panel(&layout, 0) {
        render_node(ui, node, state);
    }
}

pub fn centre_panel(ui: &mut Ui, state: &mut AppState) {
    let layout = Rc::clone(&state.layout);
    if let Some(node) = panel(&layout, 1) {
        render_node(ui, node, state);
    }
}

pub fn cmp_panel(ui: &mut Ui, state: &mut AppState) {
    let layout = Rc::clone(&state.layout);
    if let Some(node) = panel(&layout, 2) {
        render_node(ui, node, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HiveConfig;
    use crate::data::parse_bundle;

    fn state() -> AppState {
        initial_state(ContentResolver::new(HiveConfig::default()), DebugLog::new())
    }

    fn bundle_state() -> AppState {
        let mut state = state();
        state.bundle = Some(
            parse_bundle(
                r#"{
                    "points": [
                        {"embedding_type": "parent_text", "synset_id": "n1"},
                        {"embedding_type": "child_text", "synset_id": "n1"},
                        {"embedding_type": "child_text", "synset_id": "n2"}
                    ],
                    "meta": {"n1": {"name": "fish", "description": "a small fish"}},
                    "projections": {"horopca": [[0.0, 0.0], [0.5, 0.0], [0.0, 0.5]]}
                }"#,
            )
            .unwrap(),
        );
        state
    }

    #[test]
    fn stores_and_widgets_start_from_layout_defaults() {
        let state = state();
        assert_eq!(state.stores[ids::PROJ_STORE], json!("horopca"));
        assert_eq!(state.stores[ids::MODE_STORE], json!("compare"));
        assert_eq!(state.stores[ids::SEL_STORE], json!([]));
        assert_eq!(state.stores[ids::DATA_STORE], Value::Null);
        assert_eq!(state.widgets[ids::DATASET_DROPDOWN], json!("imagenet"));
        assert_eq!(state.widgets[ids::INTERPOLATION_SLIDER], json!(5));
        assert_eq!(state.widgets[ids::NEIGHBORS_SLIDER], json!(3));
    }

    #[test]
    fn panels_are_found_in_the_layout() {
        let state = state();
        assert!(panel(&state.layout, 0).unwrap().find(ids::DATASET_DROPDOWN).is_some());
        assert!(panel(&state.layout, 1).unwrap().find(ids::SCATTER_DISK).is_some());
        assert!(panel(&state.layout, 2).unwrap().find(ids::CMP).is_some());
    }

    #[test]
    fn mode_buttons_switch_control_regions() {
        let mut state = state();
        handle_click(ids::INTERPOLATE_MODE_BTN, &mut state);
        assert_eq!(state.mode, Mode::Interpolate);
        assert_eq!(state.stores[ids::MODE_STORE], json!("interpolate"));
        assert_eq!(state.visibility[ids::INTERPOLATE_CONTROLS], true);
        assert_eq!(state.visibility[ids::NEIGHBORS_CONTROLS], false);

        handle_click(ids::TREE_MODE_BTN, &mut state);
        assert_eq!(state.visibility[ids::TREE_TRAVERSAL_SECTION], true);
        assert_eq!(state.visibility[ids::INTERPOLATE_CONTROLS], false);
    }

    #[test]
    fn dual_view_swaps_plot_containers() {
        let mut state = state();
        let single = state.layout.find(ids::SINGLE_PLOT_CONTAINER).unwrap().clone();
        let dual = state.layout.find(ids::COMPARISON_PLOT_CONTAINER).unwrap().clone();
        assert!(is_visible(&single, &state));
        assert!(!is_visible(&dual, &state));

        handle_click(ids::COMPARE_PROJECTIONS_BTN, &mut state);
        assert!(comparison_enabled(&state));
        assert!(!is_visible(&single, &state));
        assert!(is_visible(&dual, &state));

        handle_click(ids::COMPARE_PROJECTIONS_BTN, &mut state);
        assert!(!comparison_enabled(&state));
    }

    #[test]
    fn projection_buttons_set_the_store() {
        let mut state = state();
        handle_click(ids::PROJ_COSNE_BTN, &mut state);
        assert_eq!(current_projection(&state), "cosne");
        handle_click(ids::PROJ_HOROPCA_BTN, &mut state);
        assert_eq!(current_projection(&state), "horopca");
    }

    #[test]
    fn path_length_never_drops_below_one() {
        let mut state = state();
        for _ in 0..10 {
            handle_click(ids::INTERPOLATION_DECREASE_BTN, &mut state);
        }
        assert_eq!(widget_i64(&state, ids::INTERPOLATION_SLIDER), Some(1));
        handle_click(ids::INTERPOLATION_INCREASE_BTN, &mut state);
        assert_eq!(widget_i64(&state, ids::INTERPOLATION_SLIDER), Some(2));
    }

    #[test]
    fn selecting_points_resolves_their_content() {
        let mut state = bundle_state();
        select_point(&mut state, 0);
        select_point(&mut state, 1);
        select_point(&mut state, 2);

        assert_eq!(state.stores[ids::SEL_STORE], json!([0, 1, 2]));
        assert_eq!(state.selected[0].1, ContentElement::text("fish"));
        assert_eq!(state.selected[1].1, ContentElement::text("a small fish"));
        assert_eq!(state.selected[2].1, ContentElement::unavailable());

        select_point(&mut state, 1);
        assert_eq!(state.stores[ids::SEL_STORE], json!([0, 2]));
    }

    #[test]
    fn selection_is_capped_per_mode() {
        let mut state = bundle_state();
        handle_click(ids::TREE_MODE_BTN, &mut state);
        select_point(&mut state, 0);
        select_point(&mut state, 2);
        assert_eq!(state.stores[ids::SEL_STORE], json!([2]));

        handle_click(ids::CLEAR_PATH_BTN, &mut state);
        assert!(state.selected.is_empty());
    }

    #[test]
    fn picking_needs_a_nearby_point() {
        let coords = [[0.0, 0.0], [0.5, 0.0], [0.52, 0.0]];
        assert_eq!(nearest_point(&coords, [0.505, 0.0]), Some(1));
        assert_eq!(nearest_point(&coords, [0.53, 0.0]), Some(2));
        assert_eq!(nearest_point(&coords, [-0.5, -0.5]), None);
        assert_eq!(nearest_point(&[], [0.0, 0.0]), None);
    }

    #[test]
    fn parses_layout_colors() {
        assert_eq!(parse_color("#28a745"), Some(Color32::from_rgb(0x28, 0xa7, 0x45)));
        assert_eq!(parse_color("#bbb"), Some(Color32::from_rgb(0xbb, 0xbb, 0xbb)));
        assert_eq!(parse_color("rgb(33, 43, 181)"), Some(Color32::from_rgb(33, 43, 181)));
        assert_eq!(parse_color("white"), Some(Color32::WHITE));
        assert_eq!(parse_color("rgba(0,0,0,0.1)"), None);
        assert_eq!(parse_color("#12"), None);
    }
}
