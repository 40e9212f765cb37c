//! Drive a renderer's AVTransport service from the command line
//!
//! Usage:
//!   cargo run -p dlna-api --example play_url -- <control-url> <command> [args...]
//!
//! Commands:
//!   play <media-url> [title] [artist]   load and play a URL, with metadata when a title is given
//!   next <media-url>                    cue a URL after the current track
//!   pause | resume | stop
//!   status                              print transport state and position
//!
//! Logging follows `DLNA_LOG_MODE` / `DLNA_LOG_LEVEL`, transport settings
//! follow `DLNA_CONNECT_TIMEOUT_SECS`, `DLNA_READ_TIMEOUT_SECS`,
//! `DLNA_USER_AGENT` and `DLNA_ESCAPE_QUOTES`.

use std::env;
use std::error::Error;

use dlna_api::logging::init_logging_from_env;
use dlna_api::{
    AvTransportController, ControllerConfig, MediaItem, PlayableResource, RendererEndpoint,
};

struct CliTrack {
    title: String,
    artist: String,
    res: String,
}

impl CliTrack {
    fn new(url: &str, title: &str, artist: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            res: format!(
                r#"<res protocolInfo="http-get:*:*:*">{}</res>"#,
                dlna_api::escape_xml(url)
            ),
        }
    }
}

impl MediaItem for CliTrack {
    fn title(&self) -> &str {
        &self.title
    }
    fn artist(&self) -> &str {
        &self.artist
    }
    fn res_xml(&self) -> &str {
        &self.res
    }
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} <control-url> <command> [args...]", program);
    eprintln!();
    eprintln!("Commands: play <url> [title] [artist], next <url>, pause, resume, stop, status");
    eprintln!();
    eprintln!("Example:");
    eprintln!(
        "  {} http://192.168.1.50:49152/upnp/control/AVTransport1 play http://192.168.1.20:8200/a.mp3 \"Song\" \"Artist\"",
        program
    );
    std::process::exit(1);
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging_from_env()?;

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("play_url");
    if args.len() < 3 {
        usage(program);
    }

    let config = ControllerConfig::from_env()?;
    let track = match (args[2].as_str(), args.get(3), args.get(4)) {
        ("play", Some(url), Some(title)) => Some(CliTrack::new(
            url,
            title,
            args.get(5).map(String::as_str).unwrap_or("Unknown Artist"),
        )),
        _ => None,
    };
    let endpoint = RendererEndpoint::new(args[1].as_str(), track.is_some());
    let controller = AvTransportController::with_config(&endpoint, &config);

    match (args[2].as_str(), args.get(3)) {
        ("play", Some(url)) => {
            let resource = track.as_ref().map(|t| PlayableResource::Item(t as &dyn MediaItem));
            controller.play(url, resource)?;
            println!("Playing {}", url);
        }
        ("next", Some(url)) => {
            controller.queue_next(url, None)?;
            println!("Queued {}", url);
        }
        ("pause", _) => controller.pause()?,
        ("resume", _) => controller.resume()?,
        ("stop", _) => controller.stop()?,
        ("status", _) => {
            let transport = controller.transport_info()?;
            println!("State:    {}", transport.transport_state()?);
            for (name, value) in controller.position_info()?.iter() {
                if name != "TrackMetaData" {
                    println!("{:<14}{}", format!("{}:", name), value);
                }
            }
        }
        _ => usage(program),
    }

    Ok(())
}
