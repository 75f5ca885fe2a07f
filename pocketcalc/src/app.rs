//! Calculator window

use egui::Context;
use pocketcore::{CalcSettings, Engine, Input, Presenter};

/// Button grid, top row first.
const KEYPAD: [[Input; 4]; 5] = [
    [Input::AllClear, Input::ToggleSign, Input::Percent, Input::DIVIDE],
    [Input::Digit(7), Input::Digit(8), Input::Digit(9), Input::MULTIPLY],
    [Input::Digit(4), Input::Digit(5), Input::Digit(6), Input::SUBTRACT],
    [Input::Digit(1), Input::Digit(2), Input::Digit(3), Input::ADD],
    [Input::Backspace, Input::Digit(0), Input::Point, Input::Equals],
];

/// What is currently on screen.
#[derive(Default)]
pub struct Screen {
    display: String,
    preview: String,
}

impl Presenter for Screen {
    fn set_display(&mut self, text: &str) {
        self.display = text.to_string();
    }

    fn set_preview(&mut self, text: &str) {
        self.preview = text.to_string();
    }
}

pub struct PocketCalcApp {
    engine: Engine<Screen>,
    settings: CalcSettings,
    show_about: bool,
}

impl PocketCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: CalcSettings) -> Self {
        Self {
            engine: Engine::with_formatter(Screen::default(), settings.formatter()),
            settings,
            show_about: false,
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let screen = self.engine.presenter();

        if self.settings.show_preview {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.set_min_height(20.0);
                ui.label(
                    egui::RichText::new(&screen.preview)
                        .font(egui::FontId::proportional(13.0))
                        .weak(),
                );
            });
        }

        egui::Frame::none()
            .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
            .show(ui, |ui| {
                ui.set_min_height(48.0);
                ui.set_max_height(48.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&screen.display)
                            .font(egui::FontId::proportional(28.0))
                            .strong(),
                    );
                });
            });
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let btn_w = (ui.available_width() - 24.0) / 4.0;
        let btn_h = 38.0;

        for row in KEYPAD {
            ui.horizontal(|ui| {
                for input in row {
                    if ui.add_sized([btn_w, btn_h], egui::Button::new(input.symbol())).clicked() {
                        self.engine.press(input);
                    }
                }
            });
        }
    }

    fn render_menu(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("edit", |ui| {
                    if ui.button("C (clear display)").clicked() {
                        self.engine.press(Input::SoftClear);
                        ui.close_menu();
                    }
                    if ui.button("CE (clear calculation)").clicked() {
                        self.engine.press(Input::ClearEntry);
                        ui.close_menu();
                    }
                });
                ui.menu_button("view", |ui| {
                    if ui.checkbox(&mut self.settings.show_preview, "expression line").changed() {
                        self.settings.save();
                        ui.close_menu();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }
}

impl eframe::App for PocketCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.render_menu(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(ctx.style().visuals.panel_fill).inner_margin(egui::Margin::same(8.0)))
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                self.render_keypad(ui);
            });

        if self.show_about {
            egui::Window::new("about calculator")
                .collapsible(false)
                .resizable(false)
                .default_width(220.0)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("calculator");
                        ui.label(concat!("version ", env!("CARGO_PKG_VERSION")));
                        ui.add_space(4.0);
                        ui.label("four functions, left to right");
                        ui.add_space(4.0);
                        if ui.button("ok").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
