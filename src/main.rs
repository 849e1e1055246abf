mod app;

use std::path::PathBuf;
use std::process::ExitCode;

use anatomy_atlas::Atlas;
use anatomy_atlas::anatomy::{NodeKind, Region, node_kind_ja};
use anatomy_atlas::layout::LayoutMode;
use clap::Parser;
use tracing::error;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Directory holding muscles.json, bones.json, nerves.json, joints.json,
    /// skin.json and ligaments.json.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Show only one region at startup (e.g. upper_limb).
    #[arg(long, value_parser = parse_region)]
    region: Option<Region>,

    /// Initial layout: cluster, grid or concentric.
    #[arg(long, default_value = "cluster", value_parser = parse_layout)]
    layout: LayoutMode,

    /// Load and validate the dataset, print a report and exit.
    #[arg(long)]
    check: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn parse_region(value: &str) -> Result<Region, String> {
    Region::from_key(value).ok_or_else(|| {
        let known = Region::ALL.map(Region::key).join(", ");
        format!("unknown region `{value}` (expected one of: {known})")
    })
}

fn parse_layout(value: &str) -> Result<LayoutMode, String> {
    LayoutMode::from_key(value).ok_or_else(|| {
        let known = LayoutMode::ALL.map(LayoutMode::key).join(", ");
        format!("unknown layout `{value}` (expected one of: {known})")
    })
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("anatomy_atlas=debug,info")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .init();
}

fn run_check(data_dir: &std::path::Path) -> ExitCode {
    let atlas = match Atlas::initialize(data_dir) {
        Ok(atlas) => atlas,
        Err(error) => {
            eprintln!("error: {error:#}");
            return ExitCode::FAILURE;
        }
    };

    let stats = atlas.stats();
    let counts = NodeKind::ALL
        .into_iter()
        .map(|kind| format!("{}{}", node_kind_ja(kind), stats.count(kind)))
        .collect::<Vec<_>>()
        .join(" ");
    println!("{counts} 関係{}", stats.edges);
    println!(
        "dropped edges: {}, skipped records: {}, diagnostics: {}",
        atlas.graph().dropped_edges(),
        atlas.graph().skipped_nodes(),
        atlas.diagnostics().len()
    );
    for diagnostic in atlas.diagnostics() {
        println!("  {diagnostic}");
    }

    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_tracing(args.verbose);

    if args.check {
        return run_check(&args.data_dir);
    }

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };
    let startup = app::StartupOptions {
        region: args.region,
        layout: args.layout,
    };

    let result = eframe::run_native(
        "anatomy-atlas",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::AtlasApp::new(
                cc,
                args.data_dir.clone(),
                startup,
            )))
        }),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("viewer exited with an error: {err}");
            ExitCode::FAILURE
        }
    }
}
