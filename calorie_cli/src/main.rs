use calorie_core::projection;
use calorie_core::snapshot::SNAPSHOT_FILE;
use calorie_core::*;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "calorie")]
#[command(about = "Daily calorie and nutrition calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate calorie and nutrition targets from the given inputs
    Calc {
        #[command(flatten)]
        input: InputArgs,

        /// Don't remember these inputs for `last`
        #[arg(long)]
        no_save: bool,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Recalculate from the last saved inputs (default)
    Last {
        #[command(flatten)]
        export: ExportArgs,
    },

    /// Forget the saved inputs
    Clear,
}

#[derive(Args)]
struct InputArgs {
    /// Age in years (1-120)
    #[arg(long)]
    age: f64,

    #[arg(long, value_parser = ["male", "female"])]
    gender: String,

    /// Unit for height input (cm, ft_in); defaults to the configured unit
    #[arg(long, value_parser = ["cm", "ft_in"])]
    height_unit: Option<String>,

    /// Height in centimeters
    #[arg(long)]
    height: Option<f64>,

    /// Height feet, when entering imperial height
    #[arg(long)]
    feet: Option<f64>,

    /// Height inches, when entering imperial height
    #[arg(long, default_value_t = 0.0)]
    inches: f64,

    /// Unit for both weights (kg, lb); defaults to the configured unit
    #[arg(long, value_parser = ["kg", "lb"])]
    weight_unit: Option<String>,

    #[arg(long)]
    current_weight: f64,

    #[arg(long)]
    target_weight: f64,

    /// Exercise frequency (none, twice, 3-5, 7)
    #[arg(long)]
    frequency: String,

    /// Session length in minutes (15, 30, 60, 90)
    #[arg(long, default_value = "30")]
    duration: String,

    /// Exercise type (home, gym, yoga, walking); repeat for several
    #[arg(long = "exercise-type")]
    exercise_types: Vec<String>,
}

#[derive(Args)]
struct ExportArgs {
    /// Write a text report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Write the weekly weight projection as CSV to this path
    #[arg(long)]
    projection_csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    calorie_core::logging::init(cli.verbose);

    // Determine data directory
    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let snapshot_path = data_dir.join(SNAPSHOT_FILE);

    match cli.command {
        Some(Commands::Calc {
            input,
            no_save,
            export,
        }) => cmd_calc(&snapshot_path, input, no_save, &export, &config),
        Some(Commands::Last { export }) => cmd_last(&snapshot_path, &export, &config),
        Some(Commands::Clear) => cmd_clear(&snapshot_path),
        None => {
            // Default to "last" command
            cmd_last(
                &snapshot_path,
                &ExportArgs {
                    report: None,
                    projection_csv: None,
                },
                &config,
            )
        }
    }
}

fn cmd_calc(
    snapshot_path: &Path,
    input: InputArgs,
    no_save: bool,
    export: &ExportArgs,
    config: &Config,
) -> Result<()> {
    let request = build_request(input, config)?;
    let calculation = run_calculation(&request)?;

    display_calculation(&calculation);

    if no_save {
        println!("\n[Inputs not saved]");
    } else {
        Snapshot::new(request).save(snapshot_path)?;
    }

    write_exports(&calculation, export, config)
}

fn cmd_last(snapshot_path: &Path, export: &ExportArgs, config: &Config) -> Result<()> {
    let Some(snapshot) = Snapshot::load(snapshot_path)? else {
        println!("No saved inputs found. Run `calorie calc` first.");
        return Ok(());
    };

    println!(
        "Using inputs saved {}",
        snapshot.saved_at.format("%Y-%m-%d %H:%M UTC")
    );

    let calculation = run_calculation(&snapshot.request)?;
    display_calculation(&calculation);

    write_exports(&calculation, export, config)
}

fn cmd_clear(snapshot_path: &Path) -> Result<()> {
    if Snapshot::clear(snapshot_path)? {
        println!("✓ Saved inputs cleared");
    } else {
        println!("No saved inputs to clear.");
    }
    Ok(())
}

fn run_calculation(request: &CalculationRequest) -> Result<Calculation> {
    calculate(request).map_err(|e| {
        eprintln!("{}", e);
        Error::from(e)
    })
}

fn build_request(input: InputArgs, config: &Config) -> Result<CalculationRequest> {
    let height_unit = match input.height_unit.as_deref() {
        Some("ft_in") => HeightUnit::FtIn,
        Some(_) => HeightUnit::Cm,
        None => config.units.height,
    };

    let height = match height_unit {
        HeightUnit::Cm => {
            let value = input
                .height
                .ok_or_else(|| Error::Other("--height is required for cm heights".into()))?;
            Height::Centimeters { value }
        }
        HeightUnit::FtIn => {
            let feet = input
                .feet
                .ok_or_else(|| Error::Other("--feet is required for ft_in heights".into()))?;
            Height::FeetInches {
                feet,
                inches: input.inches,
            }
        }
    };

    let weight_unit = match input.weight_unit.as_deref() {
        Some("lb") => WeightUnit::Lb,
        Some(_) => WeightUnit::Kg,
        None => config.units.weight,
    };

    let gender = if input.gender == "male" {
        Gender::Male
    } else {
        Gender::Female
    };

    let types = ExerciseSelection::Many(
        input
            .exercise_types
            .into_iter()
            .map(ExerciseType::from)
            .collect(),
    );

    let request = CalculationRequest {
        profile: UserProfile {
            age_years: input.age,
            gender,
            height,
            current_weight: Weight {
                value: input.current_weight,
                unit: weight_unit,
            },
            target_weight: Weight {
                value: input.target_weight,
                unit: weight_unit,
            },
        },
        activity: ActivityProfile {
            frequency: Frequency::from(input.frequency),
            session_minutes: SessionLength::from(input.duration),
            types,
        },
    };

    if let SessionLength::Other(key) = &request.activity.session_minutes {
        tracing::warn!("Unknown session length {:?}, no duration bonus applied", key);
    }

    Ok(request)
}

fn write_exports(calculation: &Calculation, export: &ExportArgs, config: &Config) -> Result<()> {
    if let Some(ref path) = export.report {
        let today = chrono::Local::now().date_naive();
        std::fs::write(path, render_report(calculation, today))?;
        println!("✓ Report written to {}", path.display());
    }

    if let Some(ref path) = export.projection_csv {
        let points = calculation.projection(config.projection.fallback_weeks);
        projection::write_csv(path, &points)?;
        println!("✓ Projection written to {}", path.display());
    }

    Ok(())
}

fn display_calculation(calculation: &Calculation) {
    let goal = &calculation.goal;
    let nutrition = &calculation.nutrition;

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  YOUR DAILY PLAN");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Daily calories:  {}", goal.daily_calories_label());
    println!("  Weekly change:   {}", goal.weekly_change_label());
    println!("  Time to goal:    {}", goal.weeks_to_goal);
    println!(
        "  BMR:             {} calories",
        units::round_half_up(calculation.energy.bmr_kcal)
    );
    println!(
        "  TDEE:            {} calories (x{:.3})",
        units::round_half_up(calculation.energy.tdee_kcal),
        calculation.energy.activity_multiplier
    );
    println!();
    println!("  Protein:  {}", nutrition.protein_label());
    println!("  Carbs:    {}", nutrition.carbs_label());
    println!("  Fats:     {}", nutrition.fats_label());
    println!("  Fiber:    {}", nutrition.fiber_label());
    println!("  Water:    {}", nutrition.water_label());
    println!("  Sodium:   {}", nutrition.sodium_label());
    println!();
}
