//! # Artboard gallery client
//!
//! Generate images from prompts, preview placeholders offline, publish to
//! the community gallery and browse it.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use artboard_shared::Variant;
use artboard_shared::dto::CreatePostRequest;

mod client;
mod render;

use client::ApiClient;

#[derive(Parser)]
#[command(name = "artboard")]
#[command(about = "Create AI images and share them with the community gallery")]
#[command(version)]
struct Cli {
    /// Gallery server base URL
    #[arg(long, env = "ARTBOARD_SERVER", default_value = "http://localhost:8080", global = true)]
    server: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate an image for a prompt and save it
    Generate {
        #[arg(long)]
        prompt: String,
        /// Output file; the extension is chosen from the image bytes when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Save the placeholder a prompt maps to, without contacting the server
    Preview {
        #[arg(long)]
        prompt: String,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Publish an image to the gallery
    Publish {
        #[arg(long)]
        name: String,
        #[arg(long)]
        prompt: String,
        /// Image file, http(s) URL or data URL
        #[arg(long)]
        image: String,
    },
    /// List gallery posts
    Gallery {
        /// Case-insensitive filter on author and prompt
        #[arg(long)]
        search: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = ApiClient::new(&cli.server);
    tracing::debug!(server = %cli.server, "Using gallery server");

    match cli.command {
        Command::Generate { prompt, out } => {
            if prompt.trim().is_empty() {
                bail!("Please provide a proper prompt");
            }
            println!("Generating...");
            let photo = match api.generate(&prompt).await {
                Ok(photo) => photo,
                Err(e) => bail!("Image generation failed: {e:#}"),
            };
            let bytes = render::decode_image(&photo)?;
            let path = out.unwrap_or_else(|| {
                PathBuf::from(format!("generated.{}", render::image_extension(&bytes)))
            });
            std::fs::write(&path, bytes)?;
            println!("Saved {}", path.display());
        }
        Command::Preview { prompt, out } => {
            let variant = Variant::select(&prompt);
            let path = out.unwrap_or_else(|| PathBuf::from(format!("preview-{variant}.svg")));
            std::fs::write(&path, variant.svg())?;
            println!("{variant} placeholder saved to {}", path.display());
        }
        Command::Publish {
            name,
            prompt,
            image,
        } => {
            let request = CreatePostRequest {
                name: Some(name),
                prompt: Some(prompt),
                photo: Some(render::photo_payload(&image)?),
            };
            if let Err(message) = request.clone().validate() {
                bail!("Please generate an image with proper details: {message}");
            }

            println!("Sharing...");
            let created = api.create_post(&request).await?;
            if let Some(message) = created.message.filter(|_| created.demo) {
                println!("{message}");
            }
            if let Some(post) = created.data {
                println!("Shared \"{}\" as post {}", post.prompt, post.id);
            }
        }
        Command::Gallery { search } => {
            let listing = api.list_posts().await?;
            if let Some(message) = listing.message.as_deref().filter(|_| listing.demo) {
                println!("{message}");
            }
            let posts = listing.data.unwrap_or_default();
            print!("{}", render::gallery(&posts, search.as_deref()));
        }
    }

    Ok(())
}
