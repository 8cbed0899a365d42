//! Windowed host loop for particle scenarios
//!
//! Each frame clears the canvas, asks every active particle to draw itself,
//! and advances the simulation while playing. The scenario file is watched
//! and reloaded when it changes on disk.

use eframe::egui;
use notify::{Event, RecommendedWatcher, Watcher};
use particles_core::gravity::GravityKind;
use particles_core::{
    build_simulation_context_from_source, step_simulation, Canvas, Particle, ScenarioError,
    SimulationContext,
};
use std::path::{Path, PathBuf};
use std::sync::mpsc;

const PARTICLE_RADIUS: f32 = 2.0;

/// Maps simulation coordinates onto the central panel.
///
/// Both use Y-down, so the mapping is a uniform scale plus an offset.
struct PainterCanvas<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    world_min: egui::Vec2,
    scale: f32,
}

impl PainterCanvas<'_> {
    fn to_screen(&self, x: f64, y: f64) -> egui::Pos2 {
        self.origin + (egui::vec2(x as f32, y as f32) - self.world_min) * self.scale
    }
}

impl Canvas for PainterCanvas<'_> {
    fn draw_particle(&mut self, particle: &Particle) {
        let pos = particle.state.position;
        self.painter.circle_filled(
            self.to_screen(pos.x, pos.y),
            PARTICLE_RADIUS,
            egui::Color32::LIGHT_BLUE,
        );
    }
}

/// Interactive scenario viewer
pub struct ViewApp {
    scenario_path: PathBuf,
    sim: Option<SimulationContext>,
    load_error: Option<String>,
    running: bool,
    steps_per_frame: usize,
    #[allow(dead_code)] // dropping the watcher stops the events
    watcher: Option<RecommendedWatcher>,
    watch_events: mpsc::Receiver<notify::Result<Event>>,
}

/// Watch `path` for edits; failures only disable live reload.
fn watch_scenario(
    path: &Path,
    events: mpsc::Sender<notify::Result<Event>>,
) -> Option<RecommendedWatcher> {
    let mut watcher = match notify::recommended_watcher(move |res| {
        // The receiver is gone during shutdown
        let _ = events.send(res);
    }) {
        Ok(watcher) => watcher,
        Err(e) => {
            log::warn!("Live reload unavailable: {}", e);
            return None;
        }
    };

    match watcher.watch(path, notify::RecursiveMode::NonRecursive) {
        Ok(()) => Some(watcher),
        Err(e) => {
            log::warn!("Not watching {}: {}", path.display(), e);
            None
        }
    }
}

impl ViewApp {
    pub fn new(scenario_path: PathBuf, _cc: &eframe::CreationContext<'_>) -> Self {
        let (tx, rx) = mpsc::channel();
        let watcher = watch_scenario(&scenario_path, tx);

        let mut app = Self {
            scenario_path,
            sim: None,
            load_error: None,
            running: false,
            steps_per_frame: 1,
            watcher,
            watch_events: rx,
        };
        app.load_scenario();
        app
    }

    /// Rebuild the simulation from the file on disk, stopping playback.
    fn load_scenario(&mut self) {
        self.running = false;
        let loaded = std::fs::read_to_string(&self.scenario_path)
            .map_err(ScenarioError::from)
            .and_then(|source| build_simulation_context_from_source(&source));

        match loaded {
            Ok(sim) => {
                self.sim = Some(sim);
                self.load_error = None;
            }
            Err(e) => {
                log::error!("Failed to load {}: {}", self.scenario_path.display(), e);
                self.sim = None;
                self.load_error = Some(e.to_string());
            }
        }
    }

    /// Drain pending watcher events; true if the scenario file was modified.
    fn scenario_modified(&self) -> bool {
        let mut modified = false;
        for event in self.watch_events.try_iter() {
            match event {
                Ok(event) => {
                    modified |= matches!(event.kind, notify::EventKind::Modify(_))
                        && event.paths.contains(&self.scenario_path);
                }
                Err(e) => log::warn!("File watcher error: {}", e),
            }
        }
        modified
    }

    fn playback_controls(&mut self, ui: &mut egui::Ui) {
        let toggle = if self.running { "⏸ Pause" } else { "▶ Play" };
        if ui.button(toggle).clicked() {
            self.running = !self.running;
        }
        if ui.button("⏮ Reset").clicked() {
            self.load_scenario();
        }
        if ui.button("⏭ Step").clicked() {
            if let Some(sim) = self.sim.as_mut() {
                step_simulation(sim);
            }
        }

        ui.separator();
        ui.add(egui::Slider::new(&mut self.steps_per_frame, 1..=10).text("steps/frame"));
        ui.separator();

        if let Some(sim) = &self.sim {
            ui.label(format!(
                "Step {} of {}, {} of {} particles",
                sim.current_step,
                sim.max_steps,
                sim.pool.len(),
                sim.world.particle_limit()
            ));
        }
    }

    /// Run this frame's steps; playback stops once the scenario finishes.
    fn advance(&mut self) {
        let Some(sim) = self.sim.as_mut() else {
            self.running = false;
            return;
        };
        let finished = (0..self.steps_per_frame).any(|_| step_simulation(sim));
        if finished {
            self.running = false;
        }
    }

    fn source_panel(&mut self, ctx: &egui::Context) {
        let Some(sim) = self.sim.as_mut() else {
            return;
        };

        egui::SidePanel::right("sources").show(ctx, |ui| {
            ui.heading("Sources");
            for (idx, source) in sim.sources.iter_mut().enumerate() {
                let label = match source.kind {
                    GravityKind::Point(_) => format!(
                        "#{} point ({:.0}, {:.0}) m={}",
                        idx, source.state.position.x, source.state.position.y, source.state.mass
                    ),
                    GravityKind::Constant(law) => format!(
                        "#{} constant {:.0}° × {}",
                        idx,
                        law.angle_as_degrees(),
                        law.strength()
                    ),
                };
                let mut enabled = source.is_enabled();
                if ui.checkbox(&mut enabled, label).changed() {
                    if enabled {
                        source.enable();
                    } else {
                        source.disable();
                    }
                }
            }
        });
    }
}

impl eframe::App for ViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.scenario_modified() {
            log::info!("Reloading {}", self.scenario_path.display());
            self.load_scenario();
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| self.playback_controls(ui));
        });

        self.source_panel(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::from_gray(20)))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let painter = ui.painter();

                if let Some(sim) = &self.sim {
                    // Fit the bounds (or the window size) into the panel
                    let (world_min, world_size) = match sim.bounds {
                        Some(b) => (
                            egui::vec2(b.min.x as f32, b.min.y as f32),
                            egui::vec2(b.size().x as f32, b.size().y as f32),
                        ),
                        None => (egui::Vec2::ZERO, egui::vec2(800.0, 450.0)),
                    };
                    let scale = (rect.width() / world_size.x).min(rect.height() / world_size.y);
                    let mut canvas = PainterCanvas {
                        painter,
                        origin: rect.min,
                        world_min,
                        scale,
                    };

                    for source in &sim.sources {
                        if let GravityKind::Point(_) = source.kind {
                            let pos = source.state.position;
                            let color = if source.is_enabled() {
                                egui::Color32::GOLD
                            } else {
                                egui::Color32::DARK_GRAY
                            };
                            let radius = (source.state.mass.abs().sqrt() as f32).clamp(3.0, 20.0);
                            painter.circle_stroke(
                                canvas.to_screen(pos.x, pos.y),
                                radius,
                                egui::Stroke::new(1.5, color),
                            );
                        }
                    }

                    for (_, particle) in sim.pool.iter() {
                        particle.draw(&mut canvas);
                    }
                }

                if let Some(error) = &self.load_error {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        error,
                        egui::FontId::proportional(16.0),
                        egui::Color32::RED,
                    );
                }
            });

        if self.running {
            self.advance();
            ctx.request_repaint();
        }
    }
}
