mod view_app;

use clap::{Parser, Subcommand};
use particles_core::{build_simulation_context_from_source, get_particle_states, step_simulation};
use std::fs;
use std::path::PathBuf;

const WINDOW_TITLE: &str = "Particle Game v0.1";
const WINDOW_SIZE: [f32; 2] = [800.0, 450.0];

#[derive(Parser)]
#[command(name = "particles")]
#[command(about = "Particles - a 2D gravity particle simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario headless and print the final particle states
    Run {
        /// Path to the YAML scenario file
        file: PathBuf,
        /// Override the number of steps in the scenario
        #[arg(long)]
        steps: Option<u64>,
    },
    /// Open a window and animate a scenario
    View {
        /// Path to the YAML scenario file
        file: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Run { file, steps } => run_file(&file, steps),
        Commands::View { file } => view_file(file),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_file(file: &PathBuf, steps: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let source = fs::read_to_string(file)?;
    let mut ctx = build_simulation_context_from_source(&source)?;
    if let Some(steps) = steps {
        ctx.max_steps = steps;
    }

    while !step_simulation(&mut ctx) {}
    log::info!("Finished after {} steps", ctx.current_step);

    // Print particle states
    for particle in get_particle_states(&ctx) {
        println!(
            "{} pos = ({:.6}, {:.6}) vel = ({:.6}, {:.6})",
            particle.handle.0, particle.pos.x, particle.pos.y, particle.vel.x, particle.vel.y
        );
    }

    Ok(())
}

fn view_file(file: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(view_app::ViewApp::new(file, cc)))),
    )?;

    Ok(())
}
