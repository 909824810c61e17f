mod game;
mod ui;

fn main() {
    ui::app::run();
}
