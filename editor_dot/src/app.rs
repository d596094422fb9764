use eframe::egui::{self, Color32, Key, Modifiers, Rect, Sense, UiBuilder, Vec2};
use eframe::Frame;
use lib_dot::{EditorConfig, Session, Tool};

use crate::canvas::Canvas;
use crate::palette::{to_color32, Palette};
use crate::viewport::{update_pointer, update_viewport_size};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FileAction {
    Open,
    Save,
    SaveAs,
}

pub struct PixelEditor {
    session: Session,
    canvas: Canvas,
    palette: Palette,
}

impl PixelEditor {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let session = Session::new(EditorConfig::default());
        let mut canvas = Canvas::new(cc.egui_ctx.clone());
        let palette = Palette::new();

        session.attach(&mut canvas);

        let mut editor = Self {
            session,
            canvas,
            palette,
        };
        editor.select_color(0);
        editor
    }

    fn select_color(&mut self, index: usize) {
        if let Some(color) = self.palette.switch_color(index) {
            self.session.color_selected(color);
        }
    }

    fn run_file_action(&mut self, action: FileAction) {
        match action {
            FileAction::Open => self.session.menu_open(&mut self.canvas),
            FileAction::Save => self.session.menu_save(&mut self.canvas),
            FileAction::SaveAs => self.session.menu_save_as(&mut self.canvas),
        }
    }

    fn shortcut_action(ctx: &egui::Context) -> Option<FileAction> {
        ctx.input_mut(|i| {
            if i.consume_key(Modifiers::COMMAND, Key::O) {
                Some(FileAction::Open)
            } else if i.consume_key(Modifiers::COMMAND, Key::S) {
                Some(FileAction::Save)
            } else {
                None
            }
        })
    }

    fn draw_menu_bar(&mut self, ctx: &egui::Context) -> Option<FileAction> {
        let mut action = None;

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let entries = [
                        ("Open", FileAction::Open),
                        ("Save", FileAction::Save),
                        ("Save As...", FileAction::SaveAs),
                    ];
                    for (label, entry) in entries {
                        if ui.button(label).clicked() {
                            action = Some(entry);
                            ui.close_menu();
                        }
                    }
                });
            });
        });

        action
    }

    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for tool in Tool::ALL {
                let selected = self.session.engine().tool() == tool;
                let label = match tool {
                    Tool::Pen => "Pen",
                    Tool::Fill => "Fill",
                };
                if ui.selectable_label(selected, label).clicked() {
                    self.session.tool_selected(tool.name());
                }
            }
        });

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            let swatch_size = Vec2::new(24.0, 24.0);
            let current_index = self.palette.get_current_color_index();

            for index in 0..self.palette.get_palette_length() {
                let Some(color) = self.palette.get_color(index) else {
                    continue;
                };

                let stroke = if current_index == index {
                    egui::Stroke::new(3.0, Color32::LIGHT_BLUE)
                } else {
                    egui::Stroke::new(1.0, Color32::GRAY)
                };

                if ui
                    .add(
                        egui::Button::new("")
                            .fill(to_color32(color))
                            .stroke(stroke)
                            .min_size(swatch_size),
                    )
                    .clicked()
                {
                    self.select_color(index);
                }
            }
        });
    }

    fn draw_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let window_rect = ui.max_rect();
                update_viewport_size(window_rect, &mut self.session, &mut self.canvas);

                let header_height = self.session.view().header_height;
                let header_rect =
                    Rect::from_min_size(window_rect.min, Vec2::new(window_rect.width(), header_height));
                ui.allocate_new_ui(UiBuilder::new().max_rect(header_rect.shrink(8.0)), |ui| {
                    self.draw_toolbar(ui);
                });

                let grid_rect = Rect::from_min_max(
                    window_rect.min + Vec2::new(0.0, header_height),
                    window_rect.max,
                );
                let response = ui.allocate_rect(grid_rect, Sense::click_and_drag());

                let pointer = ui.input(|i| i.pointer.clone());
                update_pointer(
                    &pointer,
                    &response,
                    window_rect.min,
                    &mut self.session,
                    &mut self.canvas,
                );

                self.canvas.draw(
                    ui.painter(),
                    window_rect.min,
                    &self.session.mapper(),
                    self.session.grid(),
                );
            });
    }
}

impl eframe::App for PixelEditor {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let action = self
            .draw_menu_bar(ctx)
            .or_else(|| Self::shortcut_action(ctx));
        if let Some(action) = action {
            self.run_file_action(action);
        }

        self.draw_central_panel(ctx);
    }
}
