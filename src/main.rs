#![allow(non_snake_case)]

mod app;
mod components;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

/// Digital wedding invitation for Lucía & Mateo
#[derive(Parser, Debug)]
#[command(name = "boda-desktop")]
#[command(about = "Invitación digital de boda - 21 de Marzo de 2026")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 520.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 920.0)]
    height: f64,

    /// Start maximized (kiosk table at the venue)
    #[arg(long)]
    maximized: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    tracing::info!("💒 Bienvenido a nuestra boda — gracias por abrir la invitación digital");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Lucía & Mateo — 21 de Marzo de 2026")
            .with_inner_size(LogicalSize::new(args.width, args.height))
            .with_maximized(args.maximized)
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
