//! StudyVerse CLI - generate and serve 3D scene configs
//!
//! # Main Commands
//!
//! ```bash
//! studyverse serve                       # Start HTTP server (port 8000)
//! studyverse generate "a lego city"      # Generate a scene config
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! studyverse validate scene.json         # Validate JSON against schema
//! studyverse example-scene               # Show the default scene
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use studyverse_backend::{generate_scene, neon_playground, validate_scene, SceneError};

#[derive(Parser)]
#[command(name = "studyverse")]
#[command(about = "Generate 3D scene configs from verse prompts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a scene config for a verse prompt
    Generate {
        /// The verse prompt
        prompt: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the AI and use keyword rules only
        #[arg(long)]
        offline: bool,
    },

    /// Validate a scene JSON file against the scene schema
    Validate {
        /// Input JSON file
        input: PathBuf,
    },

    /// Show the default scene config
    ExampleScene,

    /// Start HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            prompt,
            output,
            offline,
        } => cmd_generate(&prompt, output.as_deref(), offline).await,

        Commands::Validate { input } => cmd_validate(&input),

        Commands::ExampleScene => cmd_example_scene(),

        Commands::Serve { port } => cmd_serve(port).await,
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_generate(
    prompt: &str,
    output: Option<&Path>,
    offline: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("🌌 Generating scene for: {:?}", prompt);

    let scene = generate_scene(prompt, offline).await;

    eprintln!("   Title:       {}", scene.title);
    eprintln!("   Background:  {}", scene.background);
    eprintln!("   Objects:     {}", scene.objects.len());
    eprintln!("   Lights:      {}", scene.lights.len());

    let json = serde_json::to_string_pretty(&scene)?;
    write_output(&json, output)?;

    eprintln!("✨ Done!");
    Ok(())
}

fn cmd_validate(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("✔️  Validating: {}", input.display());

    let scene = load_scene(input)?;

    match validate_scene(&scene) {
        Ok(()) => {
            eprintln!("✅ Scene is valid");
            Ok(())
        }
        Err(errors) => {
            eprintln!("❌ Scene is invalid:");
            for err in errors.iter().take(10) {
                eprintln!("   - {}", err);
            }
            Err(SceneError::SchemaError { errors }.into())
        }
    }
}

/// Read and parse a scene JSON file.
fn load_scene(path: &Path) -> Result<serde_json::Value, SceneError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn cmd_example_scene() -> Result<(), Box<dyn std::error::Error>> {
    let scene = neon_playground();
    println!("{}", serde_json::to_string_pretty(&scene)?);
    Ok(())
}

async fn cmd_serve(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    studyverse_backend::server::start_server(port).await
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
