use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "overlay-builder", version)]
struct Cli {
    /// Log debug detail to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write `overlay.html` and `assets/logo.png` into a project directory.
    Generate(GenerateArgs),
    /// Print the compiled keyframe timeline as JSON.
    Timeline(TimelineArgs),
    /// Write a config file populated with every default.
    InitConfig(InitConfigArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Logo image (PNG is copied as-is, other formats are converted).
    #[arg(long)]
    logo: PathBuf,

    /// Output project directory.
    #[arg(long, default_value = "overlay_project")]
    out: PathBuf,

    /// Overlay config JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Overlay config JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,
}

#[derive(Parser, Debug)]
struct InitConfigArgs {
    /// Where to write the config JSON.
    #[arg(long)]
    out: PathBuf,
}

/// Command-line values that win over the config file.
#[derive(clap::Args, Debug)]
struct Overrides {
    #[arg(long, value_enum)]
    variant: Option<VariantChoice>,

    #[arg(long)]
    brand: Option<String>,

    #[arg(long)]
    tagline: Option<String>,

    #[arg(long)]
    hide_tagline: bool,

    #[arg(long)]
    accent: Option<String>,

    /// Disable the idle hover drift.
    #[arg(long)]
    no_hover: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantChoice {
    Base,
    Extended,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::InitConfig(args) => cmd_init_config(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(
    path: Option<&PathBuf>,
    ov: &Overrides,
) -> anyhow::Result<overlay_builder::OverlayConfig> {
    let mut cfg = match path {
        Some(p) => overlay_builder::OverlayConfig::from_path(p)?,
        None => overlay_builder::OverlayConfig::default(),
    };

    if let Some(v) = ov.variant {
        cfg.timeline.variant = match v {
            VariantChoice::Base => overlay_builder::Variant::Base,
            VariantChoice::Extended => overlay_builder::Variant::Extended,
        };
    }
    if let Some(b) = &ov.brand {
        cfg.style.brand_text = b.clone();
    }
    if let Some(t) = &ov.tagline {
        cfg.style.tagline_text = t.clone();
    }
    if ov.hide_tagline {
        cfg.style.show_tagline = false;
    }
    if let Some(a) = &ov.accent {
        cfg.style.accent_color = a.clone();
    }
    if ov.no_hover {
        cfg.timeline.hover_enabled = false;
    }

    cfg.validate()?;
    Ok(cfg)
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref(), &args.overrides)?;
    let res = overlay_builder::generate(&cfg, &args.logo, &args.out)?;

    eprintln!("wrote {}", res.document_path.display());
    eprintln!("wrote {}", res.logo_path.display());
    eprintln!("fingerprint {}", res.fingerprint);
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref(), &args.overrides)?;
    let offsets = overlay_builder::compile(&cfg.timeline)?;

    let json = serde_json::to_string_pretty(&offsets).context("serialize timeline")?;
    println!("{json}");
    eprintln!(
        "timeline {} ({}s loop)",
        overlay_builder::fingerprint_timeline(&offsets),
        overlay_builder::format_num(offsets.total_secs())
    );
    Ok(())
}

fn cmd_init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    let json = overlay_builder::OverlayConfig::default().to_json_pretty()?;
    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create config dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, json + "\n")
        .with_context(|| format!("write config '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
