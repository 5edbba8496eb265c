// src/bin/blitdemo.rs

//! Renders a demo card with both built-in faces and writes it out as a
//! binary PPM image.
//!
//! Usage: `blitdemo [config.json]`. Every field of the config is optional;
//! missing fields fall back to the defaults below.

use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use softblit::{
    BlendFactor, Color, Font3x5, Font5x6, GlyphFont, OutputHandle, PixelBuffer, PresentSink,
    TextBlitter, WrapMode,
};

/// One sample line through every digit and letter of both cases.
const CHARSET: &str = "0123456789 ABCDEFGHIJKLMNOPQRSTUVWXYZ abcdefghijklmnopqrstuvwxyz";

/// Which built-in face renders the main message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontChoice {
    Small3x5,
    Large5x6,
}

impl Default for FontChoice {
    fn default() -> Self {
        FontChoice::Large5x6
    }
}

/// Complete configuration for the demo, deserialized from an optional JSON
/// file named on the command line.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DemoConfig {
    /// Output surface and image settings.
    pub output: OutputConfig,
    /// Text card contents and styling.
    pub card: CardConfig,
}

/// Where the rendered frame goes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Name reported to the presentation sink.
    pub name: String,
    /// Path of the PPM image written after presenting.
    pub path: PathBuf,
    /// Frame width in pixels.
    pub width: usize,
    /// Frame height in pixels.
    pub height: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            name: "blitdemo".to_string(),
            path: PathBuf::from("blitdemo.ppm"),
            width: 320,
            height: 96,
        }
    }
}

/// What the card says and how it looks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Message rendered in the chosen face; may contain newlines.
    pub message: String,
    /// Face used for the message. The charset footer always shows both.
    pub font: FontChoice,
    /// Integer upscale factor for the message.
    pub scale: usize,
    /// Right-edge behavior for the message and the footer.
    pub wrap: WrapMode,
    pub foreground: Color,
    pub background: Color,
    /// Footer text color.
    pub accent: Color,
}

impl Default for CardConfig {
    fn default() -> Self {
        CardConfig {
            message: "The quick brown fox\njumps over the lazy dog!".to_string(),
            font: FontChoice::default(),
            scale: 2,
            wrap: WrapMode::Wrap,
            foreground: Color::WHITE,
            background: Color::BLACK,
            accent: Color::CYAN,
        }
    }
}

impl DemoConfig {
    /// Reads the JSON config named on the command line; any failure falls
    /// back to the defaults so the demo always runs.
    fn load() -> Self {
        match std::env::args().nth(1) {
            None => DemoConfig::default(),
            Some(path) => match fs::read_to_string(&path) {
                Ok(text) => match serde_json::from_str(&text) {
                    Ok(config) => {
                        info!("loaded config from {}", path);
                        config
                    }
                    Err(err) => {
                        warn!("ignoring config {}: {}", path, err);
                        DemoConfig::default()
                    }
                },
                Err(err) => {
                    warn!("ignoring config {}: {}", path, err);
                    DemoConfig::default()
                }
            },
        }
    }
}

static CONFIG: Lazy<DemoConfig> = Lazy::new(DemoConfig::load);

/// Presentation sink that logs traffic instead of uploading anywhere.
#[derive(Debug, Default)]
struct LoggingSink {
    frames: u64,
}

impl PresentSink for LoggingSink {
    fn create_output(&mut self, name: &str) -> OutputHandle {
        let handle = OutputHandle::next();
        info!("created {} ({})", handle, name);
        handle
    }

    fn destroy_output(&mut self, handle: OutputHandle) {
        info!("destroyed {}", handle);
    }

    fn reset_output(&mut self, handle: OutputHandle) {
        debug!("reset {}", handle);
    }

    fn frame_ready(&mut self, target: OutputHandle, frame: &PixelBuffer) {
        self.frames += 1;
        info!(
            "frame {} ready for {}: {}x{}",
            self.frames,
            target,
            frame.width(),
            frame.height()
        );
    }
}

fn render(config: &DemoConfig) -> softblit::Result<PixelBuffer> {
    match config.card.font {
        FontChoice::Small3x5 => render_card(Font3x5, config),
        FontChoice::Large5x6 => render_card(Font5x6, config),
    }
}

fn render_card<F: GlyphFont>(font: F, config: &DemoConfig) -> softblit::Result<PixelBuffer> {
    let card = &config.card;
    let mut frame = PixelBuffer::new(config.output.width, config.output.height);
    frame.clear(card.background);

    // Additive strip across the top, written through the blended path.
    let strip = Color::new(16, 24, 40, 255);
    for y in 0..frame.height().min(8) {
        for x in 0..frame.width() {
            frame.set_pixel_blended(strip, x, y, BlendFactor::One, BlendFactor::One)?;
        }
    }

    let margin = 8;
    let mut y = margin;

    let blitter = TextBlitter::new(font)
        .with_scale(card.scale)
        .with_wrap_mode(card.wrap);
    let lines = blitter.draw_text(&mut frame, card.foreground, margin, y, &card.message);
    y += (lines * blitter.row_advance()) as i32;

    let small = TextBlitter::new(Font3x5).with_wrap_mode(card.wrap);
    let lines = small.draw_text(&mut frame, card.accent, margin, y, CHARSET);
    y += (lines * small.row_advance()) as i32;

    let large = TextBlitter::new(Font5x6).with_wrap_mode(card.wrap);
    large.draw_text(&mut frame, card.accent, margin, y, CHARSET);

    Ok(frame)
}

/// Writes the frame as a binary PPM (P6), dropping the alpha channel.
fn write_ppm(path: &Path, frame: &PixelBuffer) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write!(out, "P6\n{} {}\n255\n", frame.width(), frame.height())?;
    for pixel in frame.as_slice() {
        out.write_all(&[pixel.r, pixel.g, pixel.b])?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting blitdemo...");
    let config = &*CONFIG;
    debug!("config: {:?}", config);

    let frame = render(config).context("rendering the demo card")?;

    let mut sink = LoggingSink::default();
    let output = sink.create_output(&config.output.name);
    sink.frame_ready(output, &frame);
    sink.destroy_output(output);

    write_ppm(&config.output.path, &frame).context("writing the output image")?;
    info!(
        "wrote {}x{} image to {}",
        frame.width(),
        frame.height(),
        config.output.path.display()
    );
    Ok(())
}
