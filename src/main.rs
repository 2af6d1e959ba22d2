use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inky_icons::models::AppConfig;
use inky_icons::services::{format_probe, format_report, IconConverter};
use inky_quant::{InkColor, Rgba8};

#[derive(Parser)]
#[command(name = "inky-icons")]
#[command(about = "Convert weather icons to the 7-color Inky e-ink palette")]
struct Cli {
    /// Configuration file (defaults to $CONFIG_FILE, then ./inky-icons.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resize and quantize icons into the output directory
    Convert {
        /// Source icon directory
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Edge length of the square output icons
        #[arg(long)]
        size: Option<u32>,

        /// Print colors that occur more often than the report threshold
        #[arg(long)]
        report: bool,

        /// Override the report threshold
        #[arg(long)]
        report_threshold: Option<u64>,

        /// Print the report as JSON
        #[arg(long, requires = "report")]
        json: bool,

        /// Icon file names (defaults to the configured list)
        icons: Vec<String>,
    },
    /// Write a 7x1 PNG swatch of the display palette
    Palette {
        /// Output PNG file (defaults to <output_dir>/palette.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show how individual colors are classified
    Probe {
        /// Hex colors, e.g. "#FFEA31" or "e0d9b5"
        #[arg(required = true)]
        colors: Vec<String>,

        /// Pixel x coordinate (selects the dither cell)
        #[arg(short, long, default_value_t = 0)]
        x: u32,

        /// Pixel y coordinate (selects the dither cell)
        #[arg(short, long, default_value_t = 0)]
        y: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inky_icons=info,inky_quant=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = AppConfig::load(cli.config.as_deref());

    match cli.command {
        Some(Commands::Convert {
            source,
            output,
            size,
            report,
            report_threshold,
            json,
            icons,
        }) => run_convert_command(
            config,
            source,
            output,
            size,
            report.then_some(json),
            report_threshold,
            icons,
        ),
        Some(Commands::Palette { output }) => run_palette_command(config, output),
        Some(Commands::Probe { colors, x, y }) => run_probe_command(&config, &colors, x, y),
        None => {
            run_status_command(&config);
            Ok(())
        }
    }
}

fn run_convert_command(
    mut config: AppConfig,
    source: Option<PathBuf>,
    output: Option<PathBuf>,
    size: Option<u32>,
    report: Option<bool>,
    report_threshold: Option<u64>,
    icons: Vec<String>,
) -> anyhow::Result<()> {
    if let Some(source) = source {
        config.source_dir = source;
    }
    if let Some(output) = output {
        config.output_dir = output;
    }
    if let Some(size) = size {
        config.size = size;
    }
    if let Some(threshold) = report_threshold {
        config.report_threshold = threshold;
    }
    if !icons.is_empty() {
        config.icons = icons;
    }

    let mut converter = IconConverter::new(config);
    let summary = converter.convert_configured();

    if let Some(json) = report {
        print!("{}", format_report(&converter.report(), json)?);
        if json {
            println!();
        }
    }

    for (name, error) in &summary.failed {
        eprintln!("failed: {name}: {error}");
    }
    println!(
        "Converted {} icon(s), {} failed",
        summary.converted.len(),
        summary.failed.len()
    );

    if summary.is_success() {
        Ok(())
    } else {
        anyhow::bail!("{} icon(s) failed to convert", summary.failed.len())
    }
}

fn run_palette_command(config: AppConfig, output: Option<PathBuf>) -> anyhow::Result<()> {
    let path = output.unwrap_or_else(|| config.output_dir.join("palette.png"));
    let converter = IconConverter::new(config);
    converter.write_palette(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn run_probe_command(config: &AppConfig, colors: &[String], x: u32, y: u32) -> anyhow::Result<()> {
    let quantizer = config.quantizer();

    for text in colors {
        let color: Rgba8 = text
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid color {text:?}: {e}"))?;
        println!("{}", format_probe(&quantizer, color, x, y));
    }
    Ok(())
}

fn run_status_command(config: &AppConfig) {
    println!("inky-icons - weather icons for Inky e-ink displays");
    println!();
    println!("Configuration:");
    println!("  source_dir:         {}", config.source_dir.display());
    println!("  output_dir:         {}", config.output_dir.display());
    println!("  size:               {}", config.size);
    println!("  icons:              {}", config.icons.len());
    println!("  report_threshold:   {}", config.report_threshold);
    println!("  remap_threshold:    {}", config.remap_threshold);
    println!("  transparency_alpha: {}", config.transparency_alpha);
    println!();
    println!("Palette:");
    for ink in InkColor::ALL {
        println!("  {} {:<7} {}", ink.index(), ink.name(), ink.rgba());
    }
    println!();
    println!("Run 'inky-icons --help' for available commands.");
}
