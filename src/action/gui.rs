use std::io;
use std::time::Duration;
use eframe::egui::{self, Color32, RichText};
use log::info;
use crate::action::shell::{ShellState, StatusKind};
use crate::config::ports::AppConfig;
use crate::facade::job_runner::JobRunner;
use crate::models::font::FontFormat;

const REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct FontConverterApp {
    state: ShellState,
    runner: JobRunner,
}

impl FontConverterApp {
    pub fn new(config: &AppConfig, runner: JobRunner) -> Self {
        FontConverterApp {
            state: ShellState::new(config),
            runner,
        }
    }

    fn font_dialog(title: &str) -> rfd::FileDialog {
        rfd::FileDialog::new()
            .set_title(title)
            .add_filter("Font Files", &FontFormat::dialog_extensions())
            .add_filter("All Files", &["*"])
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        if self.state.is_running() {
            return;
        }
        let dropped: Vec<_> = ctx.input(|i| i.raw.dropped_files.iter().filter_map(|f| f.path.clone()).collect());
        if !dropped.is_empty() {
            info!("拖放 {} 個檔案", dropped.len());
            self.state.add_files(dropped);
        }
    }

    fn file_selection(&mut self, ui: &mut egui::Ui) {
        let idle = !self.state.is_running();
        ui.group(|ui| {
            ui.label(RichText::new("Select Font Files").strong());
            ui.horizontal(|ui| {
                if ui.add_enabled(idle, egui::Button::new("Select Single Font")).clicked() {
                    if let Some(path) = Self::font_dialog("Select Font File").pick_file() {
                        self.state.select_single(path);
                    }
                }
                if ui.add_enabled(idle, egui::Button::new("Select Multiple Fonts")).clicked() {
                    if let Some(paths) = Self::font_dialog("Select Font Files").pick_files() {
                        self.state.add_files(paths);
                    }
                }
                if ui.add_enabled(idle, egui::Button::new("Add Folder")).clicked() {
                    if let Some(dir) = rfd::FileDialog::new().set_title("Add Fonts From Folder").pick_folder() {
                        self.state.add_folder(&dir);
                    }
                }
                if ui.add_enabled(idle, egui::Button::new("Clear List")).clicked() {
                    self.state.clear_files();
                }
            });

            ui.push_id("file_list", |ui| {
                egui::ScrollArea::vertical()
                    .max_height(160.0)
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        if self.state.files.is_empty() {
                            ui.weak("Drop font files here or use the buttons above");
                        }
                        for name in self.state.file_names() {
                            ui.label(name);
                        }
                    });
            });
        });
    }

    fn conversion_settings(&mut self, ui: &mut egui::Ui) {
        let idle = !self.state.is_running();
        ui.group(|ui| {
            ui.label(RichText::new("Conversion Settings").strong());
            ui.add_enabled_ui(idle, |ui| {
                ui.horizontal(|ui| {
                    egui::ComboBox::from_label("Output Format")
                        .selected_text(self.state.format.label())
                        .show_ui(ui, |ui| {
                            for format in FontFormat::ALL {
                                ui.selectable_value(&mut self.state.format, format, format.label());
                            }
                        });
                });
                if self.state.format == FontFormat::Eot {
                    ui.colored_label(
                        Color32::from_rgb(200, 140, 0),
                        "EOT encoding is not available; files are written as TTF.",
                    );
                }
                ui.horizontal(|ui| {
                    ui.label(self.state.output_dir_label());
                    if ui.button("Select Output Directory").clicked() {
                        if let Some(dir) = rfd::FileDialog::new().set_title("Select Output Directory").pick_folder() {
                            self.state.set_output_dir(dir);
                        }
                    }
                });
            });
        });
    }

    fn status_log(&self, ui: &mut egui::Ui) {
        ui.push_id("status_log", |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    if self.state.status.is_empty() {
                        ui.weak("Conversion status will appear here...");
                    }
                    for line in &self.state.status {
                        let color = match line.kind {
                            StatusKind::Info => ui.visuals().text_color(),
                            StatusKind::Success => Color32::from_rgb(40, 160, 60),
                            StatusKind::Warning => Color32::from_rgb(200, 140, 0),
                            StatusKind::Error => Color32::from_rgb(210, 50, 50),
                        };
                        ui.colored_label(color, format!("[{}] {}", line.time, line.text));
                    }
                });
        });
    }

    fn summary_window(&mut self, ctx: &egui::Context) {
        let Some(summary) = &self.state.summary else {
            return;
        };
        let mut close = false;
        egui::Window::new("Conversion Finished")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(summary.message());
                ui.label(format!("Elapsed: {:.2} s", summary.elapsed.as_secs_f64()));
                if summary.failed() > 0 {
                    ui.separator();
                    ui.label(RichText::new("Failures").strong());
                    for failure in summary.failures() {
                        ui.colored_label(
                            Color32::from_rgb(210, 50, 50),
                            format!(
                                "{}: {}",
                                failure.source_name(),
                                failure.error.as_deref().unwrap_or("unknown error")
                            ),
                        );
                    }
                }
                for note in summary.substitution_notes() {
                    ui.label(note);
                }
                if ui.button("OK").clicked() {
                    close = true;
                }
            });
        if close {
            self.state.dismiss_summary();
        }
    }
}

impl eframe::App for FontConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.poll() {
            ctx.request_repaint_after(REPAINT_INTERVAL);
        }
        self.handle_dropped_files(ctx);

        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("Font Converter").size(20.0).strong());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.file_selection(ui);
            ui.add_space(6.0);
            self.conversion_settings(ui);
            ui.add_space(6.0);

            if ui
                .add_enabled(self.state.can_start(), egui::Button::new("Start Conversion"))
                .clicked()
            {
                self.state.start(&self.runner);
                ctx.request_repaint();
            }

            if self.state.is_running() {
                ui.add(egui::ProgressBar::new(self.state.progress as f32 / 100.0).show_percentage());
            }

            ui.separator();
            self.status_log(ui);
        });

        self.summary_window(ctx);
    }
}

/// 開啟主視窗並執行直到關閉
pub fn run_gui(config: AppConfig, runner: JobRunner) -> io::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size)
            .with_min_inner_size([600.0, 420.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };
    let app = FontConverterApp::new(&config, runner);
    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("視窗啟動失敗: {}", e)))
}
