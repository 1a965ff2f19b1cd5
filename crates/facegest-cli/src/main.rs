use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use facegest_core::ActiveSet;
use facegest_feed::{profiles, NoViewport, PerspectiveCamera, Recording, ViewportProjector};
use std::io::Write;
use std::path::PathBuf;

mod commands;
mod config;
mod replay;

use config::Config;
use replay::Replay;

#[derive(Parser)]
#[command(name = "facegest", about = "Facial gesture replay and inspection tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded tracking session and print display updates
    Replay {
        /// Recording file (JSON lines)
        path: PathBuf,
        /// Emit one JSON object per line
        #[arg(long)]
        json: bool,
        /// Camera profile for horizontal offset (overrides FACEGEST_CAMERA_PROFILE)
        #[arg(short, long)]
        camera: Option<String>,
        /// Skip viewport projection; horizontal offset is omitted
        #[arg(long)]
        no_camera: bool,
    },
    /// Summarize a recording without classifying it
    Inspect {
        /// Recording file (JSON lines)
        path: PathBuf,
    },
    /// List embedded camera profiles
    Cameras,
    /// Activate one accessory out of a list of face children
    Select {
        /// Comma-separated child names (overrides FACEGEST_ACCESSORIES)
        #[arg(short, long)]
        items: Option<String>,
        /// Index of the accessory to show
        #[arg(long)]
        index: usize,
        /// Occluder child to exclude (overrides FACEGEST_OCCLUDER_NAME)
        #[arg(long)]
        occluder: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::Replay {
            path,
            json,
            camera,
            no_camera,
        } => {
            let recording = Recording::open(&path)
                .with_context(|| format!("failed to load recording {}", path.display()))?;

            let profile_name = camera.unwrap_or_else(|| config.camera_profile.clone());
            let projector: Box<dyn ViewportProjector> = if no_camera {
                Box::new(NoViewport)
            } else {
                let profile = profiles::require_profile(&profile_name)?;
                tracing::info!(profile = %profile.name, "camera profile selected");
                Box::new(PerspectiveCamera::from_profile(profile))
            };

            let accessories =
                ActiveSet::accessories(config.face_children.clone(), &config.occluder_name);
            let frames = ActiveSet::frames(config.frame_children.clone(), &config.frame_tag);

            let stdout = std::io::stdout().lock();
            let mut out = Replay::new(projector.as_ref(), accessories, frames, json, stdout)
                .run(&recording.events)?;
            out.flush()?;
        }
        Commands::Inspect { path } => {
            let recording = Recording::open(&path)
                .with_context(|| format!("failed to load recording {}", path.display()))?;
            commands::inspect(&recording.stats(), &mut std::io::stdout().lock())?;
        }
        Commands::Cameras => {
            for p in profiles::list_profiles() {
                println!(
                    "{:<20} vfov={:.1}° aspect={:.4}  {}",
                    p.name, p.vertical_fov_deg, p.aspect_ratio, p.description
                );
            }
        }
        Commands::Select {
            items,
            index,
            occluder,
        } => {
            let children = match items {
                Some(list) => config::parse_nodes(&list),
                None => config.face_children.clone(),
            };
            let occluder = occluder.unwrap_or_else(|| config.occluder_name.clone());
            commands::select(children, &occluder, index, &mut std::io::stdout().lock())?;
        }
    }

    Ok(())
}
