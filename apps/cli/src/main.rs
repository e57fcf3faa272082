use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use client_core::{
    connect_wallet, load_settings, AvangClient, CarouselController, ConnectOutcome, ContentPanel,
    JsonRpcWalletProvider, Panels, PurchaseOutcome, Settings, WalletBar, WalletProvider,
};
use serde::Serialize;
use shared::{
    domain::Face,
    protocol::{Genre, LiveChannel, Show, Video},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "avang", version, about = "Avang carousel client tools")]
struct Args {
    #[arg(long, global = true)]
    backend_url: Option<String>,
    #[arg(long, global = true)]
    wallet_rpc_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the carousel faces in ring order.
    Faces,
    /// Apply signed moves from the first face and print where the carousel lands.
    Rotate {
        #[arg(allow_hyphen_values = true)]
        moves: Vec<i64>,
    },
    /// Fetch panels and print what each one would show.
    Show {
        #[arg(value_enum)]
        face: Option<FaceArg>,
        #[arg(long, help = "Print the shown item as JSON")]
        json: bool,
    },
    /// Connect a wallet and submit one mock ticket purchase.
    Buy {
        #[arg(long, help = "Use this address instead of asking the wallet provider")]
        address: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum FaceArg {
    Live,
    Latest,
    Shows,
    Genres,
}

impl From<FaceArg> for Face {
    fn from(value: FaceArg) -> Self {
        match value {
            FaceArg::Live => Face::Live,
            FaceArg::Latest => Face::LatestVideo,
            FaceArg::Shows => Face::Shows,
            FaceArg::Genres => Face::Genres,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    let settings = apply_flags(&args, load_settings())?;

    match args.command {
        Command::Faces => {
            let mut carousel = CarouselController::new();
            for face in Face::ALL {
                println!(
                    "{}  {:<20} {:<20} {:>5.1}°",
                    face.index(),
                    face.title(),
                    face.endpoint(),
                    carousel.rotation_degrees()
                );
                carousel.next();
            }
        }
        Command::Rotate { moves } => {
            let carousel = rotate_sequence(&moves);
            println!(
                "index={} face={} rotation={:.1}°",
                carousel.current_index(),
                carousel.current_face(),
                carousel.rotation_degrees()
            );
        }
        Command::Show { face, json } => {
            let client = AvangClient::new(&settings);
            let faces: Vec<Face> = match face {
                Some(face) => vec![face.into()],
                None => Face::ALL.to_vec(),
            };
            tracing::debug!(backend = %settings.backend_url, faces = faces.len(), "fetching panels");
            let contents =
                futures::future::join_all(faces.iter().map(|&face| client.load_face(face))).await;
            let mut panels = Panels::default();
            for content in contents {
                panels.apply(content);
            }
            for face in faces {
                println!("== {face}");
                for line in describe_face(&panels, face, json)? {
                    println!("{line}");
                }
            }
        }
        Command::Buy { address } => {
            let report = buy(&settings, address).await;
            println!("{}", report.status);
            if !report.purchased {
                bail!("purchase did not complete");
            }
        }
    }

    Ok(())
}

fn apply_flags(args: &Args, base: Settings) -> Result<Settings> {
    let mut settings = base;
    if let Some(url) = &args.backend_url {
        settings = settings.with_backend_url(url);
    }
    if let Some(url) = &args.wallet_rpc_url {
        settings = settings.with_wallet_rpc_url(url);
    }
    settings.validate().context("invalid client settings")?;
    Ok(settings)
}

fn rotate_sequence(moves: &[i64]) -> CarouselController {
    let mut carousel = CarouselController::new();
    for &direction in moves {
        carousel.rotate(direction);
    }
    carousel
}

fn describe_face(panels: &Panels, face: Face, json: bool) -> Result<Vec<String>> {
    match face {
        Face::Live => describe_panel(&panels.live, json, live_lines),
        Face::LatestVideo => describe_panel(&panels.latest_video, json, video_lines),
        Face::Shows => describe_panel(&panels.shows, json, show_lines),
        Face::Genres => describe_panel(&panels.genres, json, genre_lines),
    }
}

fn describe_panel<T: Serialize>(
    panel: &ContentPanel<T>,
    json: bool,
    lines: fn(&T) -> Vec<String>,
) -> Result<Vec<String>> {
    panel.render(
        |item| -> Result<Vec<String>> {
            if json {
                Ok(vec![serde_json::to_string_pretty(item)?])
            } else {
                Ok(lines(item))
            }
        },
        |empty| Ok(vec![empty.to_string()]),
    )
}

fn live_lines(channel: &LiveChannel) -> Vec<String> {
    let player = if channel.is_embed() { "embed" } else { "stream" };
    vec![
        channel.name.clone(),
        channel.description_or_default().to_string(),
        format!("{player}: {}", channel.stream_url),
    ]
}

fn video_lines(video: &Video) -> Vec<String> {
    let player = if video.is_embed() { "embed" } else { "video" };
    vec![
        video.title.clone(),
        video.byline(),
        format!("{player}: {}", video.video_url),
    ]
}

fn show_lines(show: &Show) -> Vec<String> {
    let mut lines = vec![show.title.clone(), show.schedule.clone(), show.synopsis.clone()];
    if let Some(poster) = &show.poster {
        lines.push(format!("poster: {poster}"));
    }
    lines
}

fn genre_lines(genre: &Genre) -> Vec<String> {
    let mut lines = vec![genre.name.clone()];
    if let Some(description) = &genre.description {
        lines.push(description.clone());
    }
    if let Some(cover) = &genre.cover {
        lines.push(format!("cover: {cover}"));
    }
    lines
}

/// Final wallet status line, and whether a ticket was actually bought.
struct BuyReport {
    status: String,
    purchased: bool,
}

async fn buy(settings: &Settings, address: Option<String>) -> BuyReport {
    let connect = match address {
        Some(address) => ConnectOutcome::Connected(address),
        None => {
            let provider = JsonRpcWalletProvider::from_settings(settings);
            connect_wallet(provider.as_ref().map(|p| p as &dyn WalletProvider)).await
        }
    };
    complete_purchase(&AvangClient::new(settings), connect).await
}

async fn complete_purchase(client: &AvangClient, connect: ConnectOutcome) -> BuyReport {
    let mut wallet = WalletBar::new();
    wallet.apply_connect(connect);
    if !wallet.is_connected() {
        return BuyReport {
            status: wallet.status().to_string(),
            purchased: false,
        };
    }
    if let Some(label) = wallet.address_label() {
        eprintln!("{label}");
    }

    let Some(wallet_address) = wallet.begin_purchase() else {
        return BuyReport {
            status: wallet.status().to_string(),
            purchased: false,
        };
    };
    let outcome = client.purchase(&wallet_address).await;
    let purchased = matches!(outcome, PurchaseOutcome::Purchased { .. });
    wallet.apply_purchase(outcome);
    BuyReport {
        status: wallet.status().to_string(),
        purchased,
    }
}
