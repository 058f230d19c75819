use crate::core::chat::Persona;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rDietLogger
#[derive(Parser)]
#[command(
    name = "rdietlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple diet tracking CLI: log meals, analyse weekly nutrition and browse recipes",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update, no chat delay)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log a food entry for today
    Add {
        /// Food name (required)
        #[arg(long = "food", default_value = "")]
        food: String,

        /// Calories in kcal (required)
        #[arg(long = "calories", default_value = "")]
        calories: String,

        /// Meal: breakfast, lunch, dinner or snack (also 早餐/午餐/晚餐/加餐)
        #[arg(long = "meal", default_value = "breakfast")]
        meal: String,

        /// Protein in grams
        #[arg(long = "protein")]
        protein: Option<String>,

        /// Carbohydrates in grams
        #[arg(long = "carbs")]
        carbs: Option<String>,

        /// Fat in grams
        #[arg(long = "fat")]
        fat: Option<String>,
    },

    /// Delete a food entry by ID
    Del {
        id: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show today's totals and entries
    Today,

    /// List entries
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (A:B); default: current month"
        )]
        period: Option<String>,

        #[arg(long = "meal", help = "Only show one meal")]
        meal: Option<String>,

        #[arg(long = "today", help = "Show only today's entries")]
        now: bool,
    },

    /// Weekly nutrition analysis against recommended daily intake
    Analyze {
        #[arg(long = "date", help = "Last day of the 7-day window (YYYY-MM-DD), default today")]
        date: Option<String>,
    },

    /// Browse healthy recipes
    Recipes {
        #[arg(long = "category", help = "Only show one category (e.g. 主食, 减脂餐)")]
        category: Option<String>,

        #[arg(long = "show", value_name = "ID", help = "Show ingredients and steps of one recipe")]
        show: Option<String>,
    },

    /// Ask the diet assistant (interactive when no text is given)
    Chat {
        /// Question to ask
        text: Option<String>,

        #[arg(long = "image", value_name = "FILE", help = "Share a food photo")]
        image: Option<String>,

        #[arg(long = "persona", value_enum, default_value = "diet")]
        persona: Persona,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Export food entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
