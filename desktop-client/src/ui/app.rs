use eframe::egui;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::state::{ClientCommand, SharedState};

use super::board_view::BoardView;
use super::input::InputTracker;

const IDLE_REPAINT: Duration = Duration::from_millis(50);

pub struct Tiles2048App {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    board_view: BoardView,
    input: InputTracker,
    target_value: u32,
}

impl Tiles2048App {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<ClientCommand>,
        animation: Duration,
        swipe_min_distance: f32,
        target_value: u32,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            board_view: BoardView::new(animation),
            input: InputTracker::new(swipe_min_distance),
            target_value,
        }
    }

    fn send(&self, command: ClientCommand) {
        // The game task only goes away on a fatal error, which is shown separately.
        let _ = self.command_tx.send(command);
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let grid = self.board_view.grid();
        if let Some(highest_tile) = grid.game_over() {
            ui.label(
                egui::RichText::new("Game Over")
                    .color(egui::Color32::RED)
                    .size(24.0),
            );
            ui.label(format!("Highest tile: {}", highest_tile));
            ui.label("Press N for a new game");
        } else if grid.won() {
            ui.label(
                egui::RichText::new(format!("You reached {}!", self.target_value))
                    .color(egui::Color32::from_rgb(237, 194, 46))
                    .size(24.0),
            );
            ui.label("Keep going, or press N for a new game");
        } else {
            ui.label("Use Arrow Keys, WASD or swipe to move tiles");
        }
    }
}

impl eframe::App for Tiles2048App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        for event in self.shared_state.drain_events() {
            self.board_view.apply(&event, now);
        }

        if self.board_view.take_finished(now) {
            self.send(ClientCommand::AnimationFinished);
        }

        if let Some(direction) = self.input.poll(ctx) {
            self.send(ClientCommand::Move(direction));
        }
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.send(ClientCommand::NewGame);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(self.target_value.to_string());
                ui.add_space(10.0);

                if let Some(error) = self.shared_state.get_error() {
                    ui.label(egui::RichText::new(error).color(egui::Color32::RED));
                    return;
                }

                self.render_status(ui);
                ui.add_space(10.0);
                self.board_view.render(ui, now);
            });
        });

        if self.board_view.is_animating() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(IDLE_REPAINT);
        }
    }
}
