use std::env;
use std::time::{Duration, Instant};

use eframe::{egui, Frame};
use egui::Context;

use reqwest::blocking::Client;
use reqwest::Result;

/// Delay between the last slider change and the regeneration request.
const DEBOUNCE: Duration = Duration::from_millis(50);

/// How long the "Copied" indicator stays visible.
const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

/// Highest count offered by the sliders (the server clamps too).
const MAX_COUNT: i64 = 100;

/// Separator used when copying the whole document.
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Sentences on screen, counted the way they were requested.
fn sentence_total(paragraphs: usize, sentences_per_paragraph: i64) -> usize {
    paragraphs * sentences_per_paragraph.max(0) as usize
}

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
    base_url: String,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    ///
    /// The server address comes from `LOREM_SERVER`.
    fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(5, 0))
            .build()?;
        let base_url = env::var("LOREM_SERVER")
            .unwrap_or_else(|_| "http://127.0.0.1:5000".to_owned());
        Ok(Self { client, base_url })
    }

    /// Sends a GET request to `/v1/generate` and decodes the paragraphs.
    fn get_generated(&self, paragraphs: i64, sentences: i64) -> Result<Vec<String>> {
        let response = self.client
            .get(format!("{}/v1/generate", self.base_url))
            .query(&[("paragraphs", paragraphs), ("sentences", sentences)])
            .send()?
            .error_for_status()?;

        response.json::<Vec<String>>()
    }
}

/// Global UI state (MUST persist between frames in egui).
struct GeneratorUI {
    rest: RESTContext,

    paragraphs: i64,
    sentences: i64,
    text: Vec<String>,

    /// Last failed request, shown above the text.
    error: Option<String>,
    /// Time of the last slider change not yet sent.
    pending_since: Option<Instant>,
    copied_at: Option<Instant>,
    show_controls: bool,
}

impl GeneratorUI {
    /// Initializes the UI with sane defaults.
    fn new() -> Result<Self> {
        let mut generator = Self {
            rest: RESTContext::new()?,

            paragraphs: 3,
            sentences: 5,
            text: Vec::new(),

            error: None,
            pending_since: None,
            copied_at: None,
            show_controls: true,
        };
        generator.generate();
        Ok(generator)
    }

    /// Performs the generation request.
    ///
    /// On failure the previous text stays on screen.
    fn generate(&mut self) {
        self.pending_since = None;
        match self.rest.get_generated(self.paragraphs, self.sentences) {
            Ok(text) => {
                self.text = text;
                self.error = None;
            }
            Err(e) => {
                log::error!("Failed to generate: {e}");
                self.error = Some(format!("Error: {e}"));
            }
        }
    }

    /// Schedules a generation once the sliders settle.
    fn schedule(&mut self) {
        self.pending_since = Some(Instant::now());
    }

    /// Sends the pending request once the debounce delay is over,
    /// otherwise asks egui to wake up when it will be.
    fn flush_pending(&mut self, ctx: &Context) {
        if let Some(since) = self.pending_since {
            let elapsed = since.elapsed();
            if elapsed >= DEBOUNCE {
                self.generate();
            } else {
                ctx.request_repaint_after(DEBOUNCE - elapsed);
            }
        }
    }

    /// Copies every paragraph, separated by a blank line.
    fn copy_all(&mut self, ctx: &Context) {
        ctx.copy_text(self.text.join(PARAGRAPH_SEPARATOR));
        self.copied_at = Some(Instant::now());
    }

    fn is_copied(&self) -> bool {
        self.copied_at
            .is_some_and(|at| at.elapsed() < COPIED_FEEDBACK)
    }

    fn sentence_count(&self) -> usize {
        sentence_total(self.text.len(), self.sentences)
    }
}

impl eframe::App for GeneratorUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        self.flush_pending(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let label = if self.show_controls { "Hide controls" } else { "Show controls" };
                if ui.button(label).clicked() {
                    self.show_controls = !self.show_controls;
                }

                if ui.button("Regenerate").clicked() {
                    self.generate();
                    self.copied_at = None;
                }

                let copy_label = if self.is_copied() { "Copied" } else { "Copy all" };
                if ui.button(copy_label).clicked() {
                    self.copy_all(ctx);
                }
                if self.is_copied() {
                    ctx.request_repaint_after(COPIED_FEEDBACK);
                }
            });

            if self.show_controls {
                egui::Grid::new("generator_grid")
                    .num_columns(2)
                    .spacing([20.0, 6.0])
                    .striped(true)
                    .show(ui, |ui| {
                        ui.label("Paragraphs");
                        if ui.add(egui::Slider::new(&mut self.paragraphs, 0..=MAX_COUNT)).changed() {
                            self.schedule();
                        }
                        ui.end_row();

                        ui.label("Sentences per paragraph");
                        if ui.add(egui::Slider::new(&mut self.sentences, 0..=MAX_COUNT)).changed() {
                            self.schedule();
                        }
                        ui.end_row();
                    });
            }

            ui.label(format!(
                "{} Para • {} Sentences",
                self.text.len(),
                self.sentence_count()
            ));

            if let Some(error) = &self.error {
                ui.colored_label(egui::Color32::RED, error);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if self.text.is_empty() {
                    ui.label("No text generated");
                }
                for paragraph in &self.text {
                    ui.label(paragraph);
                    ui.add_space(8.0);
                }
            });
        });

        if self.pending_since.is_some() {
            ctx.request_repaint_after(DEBOUNCE);
        }
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 520.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "lorem-generator",
        options,
        Box::new(|_| Ok(Box::new(GeneratorUI::new()?))),
    )
}
