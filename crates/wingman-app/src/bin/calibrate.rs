//! Interactive region calibration: capture the chat-area corners and the
//! optional input-box point, then write the region config record.

use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use device_query::{DeviceQuery, DeviceState, Keycode};
use tracing_subscriber::EnvFilter;
use wingman_config::{RegionStore, Settings};
use wingman_types::{CornerRegion, RegionConfig, ScreenPoint, ScreenSize};

#[derive(Parser, Debug)]
#[command(name = "calibrate", about = "Record the chat region for wingman")]
struct Cli {
    /// Where to write the config (default: REGION_FILE or region.json)
    #[arg(long)]
    output: Option<PathBuf>,
}

const POLL: Duration = Duration::from_millis(50);
const DEBOUNCE: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let path = cli.output.unwrap_or_else(|| Settings::from_env().region_file);

    println!("=== Region calibration ===");
    println!("[F8]  Top-left of chat area");
    println!("[F9]  Bottom-right of chat area");
    println!("[F10] (Optional) Input box position");
    println!("[Esc] Skip the input box\n");

    let device = DeviceState::new();

    let top_left = capture_point(&device, Keycode::F8, "TOP-LEFT of chat area");
    let bottom_right = capture_point(&device, Keycode::F9, "BOTTOM-RIGHT of chat area");

    if bottom_right.0 <= top_left.0 || bottom_right.1 <= top_left.1 {
        anyhow::bail!("Invalid rectangle: bottom-right must be strictly greater than top-left");
    }

    println!("Press [F10] to capture the input box position, or [Esc] to skip.");
    let input_box = capture_optional_point(&device);

    let (width, height) =
        wingman_ocr::primary_screen_size().context("Could not query screen size")?;

    let config = RegionConfig {
        region: CornerRegion {
            x1: top_left.0,
            y1: top_left.1,
            x2: bottom_right.0,
            y2: bottom_right.1,
        },
        screen: ScreenSize { width, height },
        input_box: input_box.map(|(x, y)| ScreenPoint { x, y }),
        auto_send: false,
    };

    println!("\nPreview:");
    println!("{}", serde_json::to_string_pretty(&config)?);

    print!("Save this config to {}? (y/N): ", path.display());
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    if answer.trim().eq_ignore_ascii_case("y") {
        RegionStore::new(path.clone()).save(&config)?;
        println!("Saved {}", path.display());
    } else {
        println!("Not saved.");
    }

    Ok(())
}

/// Block until `key` is pressed, then sample the mouse position.
fn capture_point(device: &DeviceState, key: Keycode, description: &str) -> (i32, i32) {
    println!("Hover over {description} and press {key:?} to capture...");
    loop {
        if device.get_keys().contains(&key) {
            thread::sleep(DEBOUNCE);
            let position = device.get_mouse().coords;
            println!("Captured {description}: ({}, {})", position.0, position.1);
            return position;
        }
        thread::sleep(POLL);
    }
}

fn capture_optional_point(device: &DeviceState) -> Option<(i32, i32)> {
    loop {
        let keys = device.get_keys();
        if keys.contains(&Keycode::F10) {
            thread::sleep(DEBOUNCE);
            let position = device.get_mouse().coords;
            println!("Captured input box: ({}, {})", position.0, position.1);
            return Some(position);
        }
        if keys.contains(&Keycode::Escape) {
            thread::sleep(DEBOUNCE);
            println!("Skipping input box capture.");
            return None;
        }
        thread::sleep(POLL);
    }
}
