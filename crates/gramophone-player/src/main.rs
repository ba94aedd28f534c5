use clap::Parser;
use gramophone::Gramophone;
use gramophone_player::cli::Args;
use gramophone_player::config;
use gramophone_player::gui::app::AppModel;
use relm4::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = config::load_or_default().apply_args(&args);
    let gramophone = Gramophone::new(config.settings())?;

    // arguments were consumed by clap, keep GTK from parsing them again
    let app = RelmApp::new("org.gramophone.player").with_args(Vec::new());

    app.run::<AppModel>((gramophone, config.state));
    Ok(())
}
