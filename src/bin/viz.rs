use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use orbit_sim::io::json::FlightSummary;
use orbit_sim::orbital::compute_orbit;
use orbit_sim::sim::{presets, simulate, FlightLog, Scenario, SimConfig};

fn main() -> eframe::Result {
    let scenario = match std::env::args().nth(1) {
        Some(path) => orbit_sim::config::load_scenario(&path).unwrap_or_else(|err| {
            eprintln!("error: {err}");
            std::process::exit(1);
        }),
        None => presets::orbit_insertion(),
    };
    let config = SimConfig::default();
    let log = simulate(&scenario, &config);
    let summary = FlightSummary::from_log(&log, &scenario);

    let app = OrbitViz { scenario, log, summary };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Rocket Orbit Simulator", options, Box::new(|_| Ok(Box::new(app))))
}

struct OrbitViz {
    scenario: Scenario,
    log: FlightLog,
    summary: FlightSummary,
}

impl eframe::App for OrbitViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let planet = &self.scenario.planet;
        let step = (self.log.samples.len() / 4000).max(1);
        let sampled: Vec<_> = self.log.samples.iter().step_by(step).collect();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(format!("Scenario: {}", self.scenario.name));
            ui.label(format!(
                "Apoapsis: {:.1} km  |  Max speed: {:.0} m/s  |  Flight: {:.0} s  |  Final orbit: {} (e = {:.4})",
                self.summary.apoapsis_altitude_m / 1000.0,
                self.summary.max_speed_ms,
                self.summary.flight_time_s,
                self.summary.final_orbit_class,
                self.summary.final_orbit.eccentricity,
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let map_w = available.x / 2.0 - 8.0;
            let side_h = available.y / 3.0 - 8.0;

            ui.horizontal(|ui| {
                // Map view: planet, flown path, current conic
                ui.vertical(|ui| {
                    ui.label("Map view (km, planet frame)");
                    let surface: PlotPoints = (0..=256)
                        .map(|i| {
                            let t = std::f64::consts::TAU * i as f64 / 256.0;
                            [
                                planet.radius * t.cos() / 1000.0,
                                planet.radius * t.sin() / 1000.0,
                            ]
                        })
                        .collect();
                    let flown: PlotPoints = sampled
                        .iter()
                        .map(|s| {
                            let rel = s.state.position - planet.center;
                            [rel.x / 1000.0, rel.y / 1000.0]
                        })
                        .collect();

                    let last = self.log.samples.last().unwrap();
                    let orbit = compute_orbit(
                        &(last.state.position - planet.center),
                        &last.state.velocity,
                        planet.mass,
                    );

                    Plot::new("map")
                        .width(map_w)
                        .height(available.y - 16.0)
                        .data_aspect(1.0)
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Surface", surface));
                            plot_ui.line(Line::new("Flight path", flown));
                            if let Some(path) = orbit.ellipse_path(256) {
                                let conic: PlotPoints = path
                                    .iter()
                                    .map(|p| [p.x / 1000.0, p.y / 1000.0])
                                    .collect();
                                plot_ui.line(Line::new("Current orbit", conic));
                            }
                        });
                });

                // Stacked time series
                ui.vertical(|ui| {
                    ui.label("Altitude (km)");
                    let altitude: PlotPoints = sampled
                        .iter()
                        .map(|s| [s.time, s.state.altitude(planet) / 1000.0])
                        .collect();
                    Plot::new("altitude")
                        .width(map_w)
                        .height(side_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Altitude", altitude));
                        });

                    ui.label("Speed (m/s)");
                    let speed: PlotPoints = sampled
                        .iter()
                        .map(|s| [s.time, s.state.speed()])
                        .collect();
                    Plot::new("speed")
                        .width(map_w)
                        .height(side_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Speed", speed));
                        });

                    ui.label("Fuel (kg)");
                    let fuel: PlotPoints = sampled
                        .iter()
                        .map(|s| [s.time, s.state.fuel])
                        .collect();
                    Plot::new("fuel")
                        .width(map_w)
                        .height(side_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Fuel", fuel));
                        });
                });
            });
        });
    }
}
