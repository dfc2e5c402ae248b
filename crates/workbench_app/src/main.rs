//! Entry point for the egui-based workbench UI.
mod platform;

fn main() -> anyhow::Result<()> {
    platform::run_app()
}
