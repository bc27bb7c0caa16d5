use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fitlog_cli::cli::commands;
use fitlog_cli::cli::{GlobalOpts, OutputFormat};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "fitlog")]
#[command(author, version, long_about = None)]
#[command(about = "Training and nutrition log backed by a hosted record store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(short, long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Config file path
    #[arg(short, long, global = true, env = "FITLOG_CONFIG")]
    config: Option<PathBuf>,

    /// Record store REST root
    #[arg(long, global = true, env = "FITLOG_BASE_URL")]
    base_url: Option<String>,

    /// Record store API key
    #[arg(long, global = true, env = "FITLOG_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard
    Dashboard {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Workout commands
    Workouts {
        #[command(subcommand)]
        command: WorkoutCommands,
    },
    /// Nutrition log commands
    Nutrition {
        #[command(subcommand)]
        command: NutritionCommands,
    },
    /// Exercise catalog commands
    Exercises {
        #[command(subcommand)]
        command: ExerciseCommands,
    },
    /// Logged set commands
    Sets {
        #[command(subcommand)]
        command: SetCommands,
    },
    /// Goal commands
    Goals {
        #[command(subcommand)]
        command: GoalCommands,
    },
    /// Body measurement commands
    Body {
        #[command(subcommand)]
        command: BodyCommands,
    },
    /// Raw record access for any collection
    Record {
        #[command(subcommand)]
        command: RecordCommands,
    },
    /// Configuration file commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum WorkoutCommands {
    /// List workouts, newest first
    List {
        /// Number of workouts to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Log a workout or rest day
    Add {
        /// Workout type
        /// (push, pull, beine, ganzkoerper, oberkoerper, unterkoerper, cardio, sonstiges)
        #[arg(short = 't', long = "type")]
        workout_type: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Duration in minutes
        #[arg(short = 'm', long, default_value = "0")]
        duration: u32,
        /// Mood (schlecht, okay, gut, brutal)
        #[arg(long)]
        mood: Option<String>,
        /// Mark as rest day
        #[arg(long)]
        rest_day: bool,
    },
    /// Delete a workout
    Delete {
        /// Workout ID
        id: String,
    },
}

#[derive(Subcommand)]
enum NutritionCommands {
    /// List meals
    List {
        /// Only meals on this date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Log a meal
    Add {
        /// Meal type
        /// (fruehstueck, snack, mittagessen, abendessen, pre_workout, post_workout, sonstiges)
        #[arg(short = 't', long = "type")]
        meal_type: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// What was eaten
        #[arg(long)]
        description: Option<String>,
        /// Calories (kcal)
        #[arg(long, default_value = "0")]
        calories: f64,
        /// Protein in grams
        #[arg(long, default_value = "0")]
        protein: f64,
        /// Carbohydrates in grams
        #[arg(long, default_value = "0")]
        carbs: f64,
        /// Fat in grams
        #[arg(long, default_value = "0")]
        fat: f64,
    },
    /// Delete a nutrition entry
    Delete {
        /// Entry ID
        id: String,
    },
}

#[derive(Subcommand)]
enum ExerciseCommands {
    /// List the exercise catalog
    List,
    /// Add an exercise
    Add {
        /// Exercise name
        name: String,
        /// Muscle group (brust, ruecken, beine, schultern, bizeps, trizeps, bauch, ganzkoerper)
        #[arg(long)]
        muscle: String,
        /// Equipment (langhantel, kurzhantel, maschine, kabelzug, bodyweight, kettlebell,
        /// resistance_band, sonstiges)
        #[arg(long)]
        equipment: String,
        /// Difficulty (anfaenger, fortgeschritten, experte)
        #[arg(long, default_value = "anfaenger")]
        difficulty: String,
    },
    /// Delete an exercise
    Delete {
        /// Exercise ID
        id: String,
    },
}

#[derive(Subcommand)]
enum SetCommands {
    /// List logged sets
    List {
        /// Only sets of this workout
        #[arg(short, long)]
        workout: Option<String>,
    },
    /// Log a set
    Add {
        /// Workout ID
        #[arg(short, long)]
        workout: String,
        /// Exercise ID
        #[arg(short, long)]
        exercise: String,
        /// Set number within the exercise
        #[arg(short = 'n', long, default_value = "1")]
        set: u32,
        /// Weight moved
        #[arg(long, default_value = "0")]
        weight: f64,
        /// Repetitions
        #[arg(short, long)]
        reps: u32,
        /// Rate of perceived exertion (1-10)
        #[arg(long)]
        rpe: Option<String>,
    },
    /// Delete a set
    Delete {
        /// Set ID
        id: String,
    },
}

#[derive(Subcommand)]
enum GoalCommands {
    /// List goals
    List,
    /// Create a goal
    Add {
        /// Daily calorie target
        #[arg(long)]
        calories: Option<f64>,
        /// Daily protein target in grams
        #[arg(long)]
        protein: Option<f64>,
        /// Training days per week
        #[arg(long)]
        training_days: Option<f64>,
        /// Sleep target in hours
        #[arg(long)]
        sleep: Option<f64>,
        /// Status (aktiv, erreicht, verworfen), defaults to aktiv
        #[arg(long)]
        status: Option<String>,
        /// Notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Change the status of a goal
    SetStatus {
        /// Goal ID
        id: String,
        /// New status (aktiv, erreicht, verworfen)
        status: String,
    },
    /// Delete a goal
    Delete {
        /// Goal ID
        id: String,
    },
}

#[derive(Subcommand)]
enum BodyCommands {
    /// List body measurements
    List,
    /// Record measurements
    Add {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Weight in kg
        #[arg(short, long)]
        weight: Option<f64>,
        /// Body fat percentage
        #[arg(long)]
        body_fat: Option<f64>,
        /// Chest circumference in cm
        #[arg(long)]
        chest: Option<f64>,
        /// Waist circumference in cm
        #[arg(long)]
        waist: Option<f64>,
        /// Hip circumference in cm
        #[arg(long)]
        hip: Option<f64>,
        /// Arm circumference in cm
        #[arg(long)]
        arm: Option<f64>,
        /// Leg circumference in cm
        #[arg(long)]
        leg: Option<f64>,
        /// Notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a measurement
    Delete {
        /// Measurement ID
        id: String,
    },
}

#[derive(Subcommand)]
enum RecordCommands {
    /// Show one record with its stored fields
    Get {
        /// Collection (exercises, workouts, nutrition, workout-logs, goals, body-metrics)
        collection: String,
        /// Record ID
        id: String,
    },
    /// Patch a record's fields
    Update {
        /// Collection (exercises, workouts, nutrition, workout-logs, goals, body-metrics)
        collection: String,
        /// Record ID
        id: String,
        /// JSON object of stored field names to new values
        fields: String,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the config file location
    Path,
    /// Show the effective configuration
    Show,
    /// Create a config file
    Init {
        /// API key for the record store, defaults to --api-key
        key: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("FITLOG_LOG")
                .unwrap_or_else(|_| default.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() -> fitlog_cli::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let opts = GlobalOpts {
        format: cli.format,
        config_path: cli.config,
        base_url: cli.base_url,
        api_key: cli.api_key,
    };

    let result = match cli.command {
        Commands::Dashboard { date } => commands::show_dashboard(&opts, date).await,
        Commands::Workouts { command } => match command {
            WorkoutCommands::List { limit } => commands::list_workouts(&opts, limit).await,
            WorkoutCommands::Add {
                workout_type,
                date,
                duration,
                mood,
                rest_day,
            } => {
                commands::add_workout(
                    &opts,
                    commands::NewWorkout {
                        date,
                        workout_type,
                        duration,
                        mood,
                        rest_day,
                    },
                )
                .await
            }
            WorkoutCommands::Delete { id } => commands::delete_workout(&opts, &id).await,
        },
        Commands::Nutrition { command } => match command {
            NutritionCommands::List { date } => commands::list_meals(&opts, date).await,
            NutritionCommands::Add {
                meal_type,
                date,
                description,
                calories,
                protein,
                carbs,
                fat,
            } => {
                commands::add_meal(
                    &opts,
                    commands::NewMeal {
                        date,
                        meal_type,
                        description,
                        calories,
                        protein,
                        carbs,
                        fat,
                    },
                )
                .await
            }
            NutritionCommands::Delete { id } => commands::delete_meal(&opts, &id).await,
        },
        Commands::Exercises { command } => match command {
            ExerciseCommands::List => commands::list_exercises(&opts).await,
            ExerciseCommands::Add {
                name,
                muscle,
                equipment,
                difficulty,
            } => commands::add_exercise(&opts, name, &muscle, &equipment, &difficulty).await,
            ExerciseCommands::Delete { id } => commands::delete_exercise(&opts, &id).await,
        },
        Commands::Sets { command } => match command {
            SetCommands::List { workout } => commands::list_sets(&opts, workout).await,
            SetCommands::Add {
                workout,
                exercise,
                set,
                weight,
                reps,
                rpe,
            } => {
                commands::add_set(
                    &opts,
                    commands::NewSet {
                        workout_id: workout,
                        exercise_id: exercise,
                        set_number: set,
                        weight,
                        reps,
                        rpe,
                    },
                )
                .await
            }
            SetCommands::Delete { id } => commands::delete_set(&opts, &id).await,
        },
        Commands::Goals { command } => match command {
            GoalCommands::List => commands::list_goals(&opts).await,
            GoalCommands::Add {
                calories,
                protein,
                training_days,
                sleep,
                status,
                notes,
            } => {
                commands::add_goal(
                    &opts,
                    commands::NewGoal {
                        calories,
                        protein,
                        training_days,
                        sleep_hours: sleep,
                        status,
                        notes,
                    },
                )
                .await
            }
            GoalCommands::SetStatus { id, status } => {
                commands::set_goal_status(&opts, &id, &status).await
            }
            GoalCommands::Delete { id } => commands::delete_goal(&opts, &id).await,
        },
        Commands::Body { command } => match command {
            BodyCommands::List => commands::list_measurements(&opts).await,
            BodyCommands::Add {
                date,
                weight,
                body_fat,
                chest,
                waist,
                hip,
                arm,
                leg,
                notes,
            } => {
                commands::add_measurement(
                    &opts,
                    commands::NewMeasurement {
                        date,
                        weight,
                        body_fat,
                        chest,
                        waist,
                        hip,
                        arm,
                        leg,
                        notes,
                    },
                )
                .await
            }
            BodyCommands::Delete { id } => commands::delete_measurement(&opts, &id).await,
        },
        Commands::Record { command } => match command {
            RecordCommands::Get { collection, id } => {
                commands::get_record(&opts, &collection, &id).await
            }
            RecordCommands::Update {
                collection,
                id,
                fields,
            } => commands::update_record(&opts, &collection, &id, &fields).await,
        },
        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config_path(&opts),
            ConfigCommands::Show => commands::config_show(&opts),
            ConfigCommands::Init { key, force } => commands::config_init(&opts, key, force),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", fitlog_cli::error::format_user_error(&e));
        std::process::exit(1);
    }

    Ok(())
}
