use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use parabolic_plotter::core::analysis::ProjectileAnalysis;
use parabolic_plotter::core::ballistics::LaunchInputs;
use parabolic_plotter::core::charts::{render_dataset_charts, render_projectile_charts};
use parabolic_plotter::core::config::PlotterConfig;
use parabolic_plotter::core::dataset::{WeatherDataset, seeded_rng};
use parabolic_plotter::core::metrics::{apex_label, calculation_details};
use parabolic_plotter::core::sweep::SeriesAlignment;

#[derive(Debug, Parser)]
#[command(name = "parabolic_plotter", version)]
#[command(about = "Parabolic trajectory plotter and weather chart demo", long_about = None)]
struct Cli {
    /// TOML file with default settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute projectile kinematics and plot them
    Projectile(ProjectileArgs),
    /// Generate the seeded weather table and its charts
    Dataset(DatasetArgs),
}

#[derive(Debug, Default, Args)]
struct ProjectileArgs {
    /// Mass (kg); prompted for when omitted
    #[arg(short, long)]
    mass: Option<f64>,

    /// Initial velocity (m/s); prompted for when omitted
    #[arg(short, long)]
    velocity: Option<f64>,

    /// Launch angle (degrees, 0-180); prompted for when omitted
    #[arg(short, long)]
    angle: Option<f64>,

    /// Gravitational acceleration (m/s^2)
    #[arg(short, long)]
    gravity: Option<f64>,

    /// Sweep time step (s)
    #[arg(long)]
    step: Option<f64>,

    /// Which timestamps velocity/acceleration series use
    #[arg(long, value_enum)]
    alignment: Option<AlignmentArg>,

    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print the report only
    #[arg(long)]
    no_charts: bool,
}

#[derive(Debug, Default, Args)]
struct DatasetArgs {
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    #[arg(long)]
    no_charts: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlignmentArg {
    Retained,
    Full,
}

impl From<AlignmentArg> for SeriesAlignment {
    fn from(arg: AlignmentArg) -> Self {
        match arg {
            AlignmentArg::Retained => SeriesAlignment::Retained,
            AlignmentArg::Full => SeriesAlignment::Full,
        }
    }
}

fn read_f64_from<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<f64> {
    loop {
        write!(output, "{prompt}")?;
        output.flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let bytes = input
            .read_line(&mut line)
            .context("Could not read input")?;

        if bytes == 0 {
            bail!("Input ended unexpectedly (EOF).");
        }

        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn value_or_prompt(value: Option<f64>, prompt: &str) -> Result<f64> {
    match value {
        Some(v) => Ok(v),
        None => read_f64_from(&mut io::stdin().lock(), &mut io::stdout(), prompt),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<PlotterConfig> {
    match path {
        Some(path) => Ok(PlotterConfig::load(path)?),
        None => Ok(PlotterConfig::default()),
    }
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program} projectile [--mass M] [--velocity V] [--angle A]");
    println!("  {program} dataset [--seed N]");
    println!();
    println!("Examples:");
    println!("  {program} projectile");
    println!("  {program} projectile -m 1 -v 20 -a 45");
    println!("  {program} --config plotter.toml dataset --no-charts");
}

fn print_written(paths: &[PathBuf]) {
    println!("\nCharts:");
    for path in paths {
        println!("  {}", path.display());
    }
}

fn run_projectile(mut config: PlotterConfig, args: ProjectileArgs) -> Result<()> {
    if let Some(g) = args.gravity {
        config.gravity_mps2 = g;
    }
    if let Some(step) = args.step {
        config.time_step_s = step;
    }
    if let Some(alignment) = args.alignment {
        config.alignment = alignment.into();
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }
    config.validate()?;

    let inputs = LaunchInputs::new(
        value_or_prompt(args.mass, "Mass (kg): ")?,
        value_or_prompt(args.velocity, "Initial velocity (m/s): ")?,
        value_or_prompt(args.angle, "Launch angle (degrees): ")?,
    )
    .with_gravity(config.gravity_mps2);

    let analysis = ProjectileAnalysis::run(inputs, config.sweep_options())?;

    println!(
        "\nParabolic Trajectory Plotter ({})",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "Mass: {} kg | Velocity: {} m/s | Angle: {} deg | g = {} m/s^2",
        inputs.mass_kg, inputs.speed_mps, inputs.angle_deg, inputs.gravity_mps2
    );
    println!();
    for metric in analysis.metrics.iter() {
        println!("{metric}");
    }
    println!("{}", apex_label(&analysis.summary));
    println!(
        "Samples: {} swept, {} above ground",
        analysis.sweep.timestamps.len(),
        analysis.sweep.retained_len()
    );

    println!("\nCalculation Details");
    for line in calculation_details(&inputs, &analysis.summary) {
        println!("  {line}");
    }

    if !args.no_charts {
        let written = render_projectile_charts(
            &config.output_dir,
            &analysis.summary,
            &analysis.sweep,
            config.chart_style(),
        )?;
        tracing::info!(count = written.len(), dir = %config.output_dir.display(), "charts written");
        print_written(&written);
    }

    Ok(())
}

fn run_dataset(mut config: PlotterConfig, args: DatasetArgs) -> Result<()> {
    if let Some(seed) = args.seed {
        config.dataset_seed = seed;
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }
    config.validate()?;

    let mut rng = seeded_rng(config.dataset_seed);
    let dataset = WeatherDataset::generate(&mut rng);
    tracing::info!(seed = config.dataset_seed, rows = dataset.rows.len(), "dataset generated");

    print!("{dataset}");

    if !args.no_charts {
        let written = render_dataset_charts(&config.output_dir, &dataset, config.chart_style())?;
        print_written(&written);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Projectile(args) => run_projectile(config, args),
        Command::Dataset(args) => run_dataset(config, args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        print_usage("parabolic_plotter");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_full_projectile_command() {
        let cli = Cli::try_parse_from([
            "parabolic_plotter",
            "projectile",
            "-m",
            "1.5",
            "-v",
            "20",
            "-a",
            "45",
            "--alignment",
            "full",
            "--no-charts",
        ])
        .expect("arguments should parse");

        match cli.command {
            Command::Projectile(args) => {
                assert_eq!(args.mass, Some(1.5));
                assert_eq!(args.velocity, Some(20.0));
                assert_eq!(args.angle, Some(45.0));
                assert_eq!(args.alignment, Some(AlignmentArg::Full));
                assert!(args.no_charts);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_config_flag_follows_subcommand() {
        let cli = Cli::try_parse_from(["parabolic_plotter", "dataset", "--config", "p.toml"])
            .expect("arguments should parse");
        assert_eq!(cli.config, Some(PathBuf::from("p.toml")));
        assert!(matches!(cli.command, Command::Dataset(DatasetArgs { seed: None, .. })));
    }

    #[test]
    fn rejects_unknown_alignment() {
        assert!(
            Cli::try_parse_from(["parabolic_plotter", "projectile", "--alignment", "odd"]).is_err()
        );
    }

    #[test]
    fn prompt_retries_until_a_number_arrives() {
        let mut input = Cursor::new("abc\n\n 12.5 \n");
        let mut output = Vec::new();
        let value = read_f64_from(&mut input, &mut output, "Velocity (m/s): ")
            .expect("third line should parse");

        assert_eq!(value, 12.5);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Velocity (m/s): ".repeat(3)
        );
    }

    #[test]
    fn prompt_fails_on_eof() {
        let mut input = Cursor::new("");
        let err = read_f64_from(&mut input, &mut Vec::new(), "Angle: ")
            .expect_err("EOF should fail");
        assert!(err.to_string().contains("EOF"));
    }

    #[test]
    fn alignment_argument_maps_to_series_alignment() {
        assert_eq!(
            SeriesAlignment::from(AlignmentArg::Retained),
            SeriesAlignment::Retained
        );
        assert_eq!(SeriesAlignment::from(AlignmentArg::Full), SeriesAlignment::Full);
    }

    #[test]
    fn projectile_run_rejects_zero_gravity_before_prompting() {
        let args = ProjectileArgs {
            mass: Some(1.0),
            velocity: Some(10.0),
            angle: Some(45.0),
            gravity: Some(0.0),
            no_charts: true,
            ..ProjectileArgs::default()
        };
        let err =
            run_projectile(PlotterConfig::default(), args).expect_err("zero gravity should fail");
        assert!(err.to_string().contains("gravity_mps2"));
    }

    #[test]
    fn projectile_run_without_charts_succeeds() {
        let args = ProjectileArgs {
            mass: Some(1.0),
            velocity: Some(20.0),
            angle: Some(45.0),
            alignment: Some(AlignmentArg::Full),
            no_charts: true,
            ..ProjectileArgs::default()
        };
        run_projectile(PlotterConfig::default(), args).expect("report-only run should succeed");
    }
}
