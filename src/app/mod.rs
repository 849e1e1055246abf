use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anatomy_atlas::Atlas;
use anatomy_atlas::anatomy::Region;
use anatomy_atlas::filter::{FilterConfig, VisibleStats};
use anatomy_atlas::layout::LayoutMode;
use eframe::egui::{self, Color32, Context, Pos2, Vec2};
use tracing::warn;

mod fonts;
mod graph;
mod highlight;
mod render_utils;
mod ui;

#[derive(Clone, Copy, Debug)]
pub struct StartupOptions {
    pub region: Option<Region>,
    pub layout: LayoutMode,
}

impl StartupOptions {
    fn view_state(self) -> ViewState {
        ViewState {
            filter: FilterConfig {
                region: self.region,
                ..Default::default()
            },
            layout: self.layout,
            selected: None,
        }
    }
}

/// User choices that survive a reload.
#[derive(Clone, Debug, PartialEq)]
struct ViewState {
    filter: FilterConfig,
    layout: LayoutMode,
    selected: Option<String>,
}

pub struct AtlasApp {
    data_dir: PathBuf,
    startup: StartupOptions,
    state: AppState,
    reload_rx: Option<Receiver<Result<Atlas, String>>>,
}

enum AppState {
    Loading {
        rx: Receiver<Result<Atlas, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    atlas: Atlas,
    filter: FilterConfig,
    layout_mode: LayoutMode,
    search: String,
    selected: Option<String>,
    pan: Vec2,
    zoom: f32,
    graph_cache: RenderGraph,
    stats: VisibleStats,
    layout_request: Option<LayoutRequest>,
    fit_requested: bool,
    focus_request: Option<String>,
    lookup_window: Option<LookupKind>,
}

/// Indexed like the atlas graph: node `i` here is graph node `i`.
struct RenderGraph {
    nodes: Vec<RenderNode>,
    edges: Vec<RenderEdge>,
    view_scratch: ViewScratch,
}

struct ViewScratch {
    screen_positions: Vec<Pos2>,
    screen_radii: Vec<f32>,
    visible_indices: Vec<usize>,
}

struct RenderNode {
    world_pos: Vec2,
    target_pos: Vec2,
    base_radius: f32,
    color: Color32,
}

struct RenderEdge {
    source: usize,
    target: usize,
    color: Color32,
    width: f32,
    line: EdgeLine,
    arrow: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EdgeLine {
    Solid,
    Dashed,
    Dotted,
}

struct HighlightState {
    related_nodes: HashSet<usize>,
    related_edges: HashSet<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct LayoutRequest {
    mode: LayoutMode,
    animate: bool,
    /// Also give hidden nodes a cluster position so they appear somewhere
    /// sensible when a filter later reveals them.
    place_hidden: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LookupKind {
    SpinalLevel,
    Motion,
    Nerve,
}

impl AtlasApp {
    pub fn new(cc: &eframe::CreationContext<'_>, data_dir: PathBuf, startup: StartupOptions) -> Self {
        fonts::install_cjk_font(&cc.egui_ctx);
        let state = Self::start_load(data_dir.clone());
        Self {
            data_dir,
            startup,
            state,
            reload_rx: None,
        }
    }

    fn spawn_load(data_dir: PathBuf) -> Receiver<Result<Atlas, String>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = Atlas::initialize(&data_dir).map_err(|error| format!("{error:#}"));
            let _ = tx.send(result);
        });

        rx
    }

    fn start_load(data_dir: PathBuf) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(data_dir),
        }
    }

    fn ready_state(result: Result<Atlas, String>, view: ViewState) -> AppState {
        match result {
            Ok(atlas) => AppState::Ready(Box::new(ViewModel::new(atlas, view))),
            Err(error) => {
                warn!("dataset load failed: {error}");
                AppState::Error(error)
            }
        }
    }
}

impl eframe::App for AtlasApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;
        let mut retry = false;

        match &mut self.state {
            AppState::Loading { rx } => {
                match rx.try_recv() {
                    Ok(result) => transition = Some(result),
                    Err(TryRecvError::Empty) => ctx.request_repaint(),
                    Err(TryRecvError::Disconnected) => {
                        transition = Some(Err("Background load worker disconnected".to_owned()));
                    }
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading anatomy dataset...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load the anatomy dataset");
                    ui.add_space(6.0);
                    ui.label(format!("data directory: {}", self.data_dir.display()));
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    retry = ui.button("Retry").clicked();
                });
            }
            AppState::Ready(model) => {
                let mut reload_requested = false;
                let is_reloading = self.reload_rx.is_some();
                model.show(ctx, &self.data_dir, &mut reload_requested, is_reloading);

                if reload_requested && self.reload_rx.is_none() {
                    self.reload_rx = Some(Self::spawn_load(self.data_dir.clone()));
                }

                if let Some(rx) = self.reload_rx.take() {
                    match rx.try_recv() {
                        Ok(result) => transition = Some(result),
                        Err(TryRecvError::Empty) => {
                            self.reload_rx = Some(rx);
                            ctx.request_repaint();
                        }
                        Err(TryRecvError::Disconnected) => {
                            transition =
                                Some(Err("Background load worker disconnected".to_owned()));
                        }
                    }
                }
            }
        }

        if retry {
            self.state = Self::start_load(self.data_dir.clone());
            return;
        }

        if let Some(result) = transition {
            self.reload_rx = None;
            let view = match &self.state {
                AppState::Ready(model) => model.view_state(),
                _ => self.startup.view_state(),
            };
            self.state = Self::ready_state(result, view);
        }
    }
}
