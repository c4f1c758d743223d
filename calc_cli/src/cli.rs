//! Command-line definitions.
//!
//! Values are taken as raw text so the configured parse policy decides what an
//! unparseable number means, exactly as it does in the menu shell.

use std::path::PathBuf;

use calc_core::calculations::{CalculationRequest, Feature};
use calc_core::inputs::ParsePolicy;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "calc_cli", version, about = "Pocketcalc - nine everyday calculators")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,

    #[arg(long, global = true, help = "How unparseable numbers are handled (strict or coerce-zero)")]
    pub policy: Option<ParsePolicy>,

    #[arg(long, global = true, value_name = "YYYY-MM-DD", help = "Measure ages at this date instead of today")]
    pub today: Option<NaiveDate>,

    #[arg(long, global = true, value_name = "PATH", help = "Config file (default ~/.pocketcalc/config.toml)")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "More log output (-v info, -vv debug)")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone)]
pub struct InterestArgs {
    #[arg(allow_hyphen_values = true)]
    pub principal: String,
    /// Annual rate in percent
    #[arg(allow_hyphen_values = true)]
    pub rate: String,
    /// Time in years
    #[arg(allow_hyphen_values = true)]
    pub years: String,
}

#[derive(Args, Debug, Clone)]
pub struct ModeArgs {
    /// Conversion or function; long labels, short ids and arrows are accepted
    #[arg(short, long)]
    pub mode: Option<String>,
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Simple interest: P·R·T / 100
    Si(InterestArgs),
    /// Compound interest and total amount
    Ci(InterestArgs),
    /// Body mass index and category
    Bmi {
        /// Weight in kg
        #[arg(allow_hyphen_values = true)]
        weight: String,
        /// Height in m
        #[arg(allow_hyphen_values = true)]
        height: String,
    },
    /// Loan equated monthly installment
    Emi(InterestArgs),
    /// Temperature conversion (c2f, f2c, c2k, f2k)
    Temp(ModeArgs),
    /// Unit conversion (m2km, km2mi)
    Unit(ModeArgs),
    /// Whole years since a YYYY-MM-DD date
    Age { date: String },
    /// Simple vs compound interest
    Compare(InterestArgs),
    /// Scientific function (sin, cos, tan in degrees; log10; sqrt)
    Sci(ModeArgs),
    /// List the calculators, their inputs and modes
    List,
    /// Interactive menu (default)
    Menu,
}

impl Commands {
    /// The calculation this command asks for, `None` for `list` and `menu`.
    pub fn request(&self) -> Option<CalculationRequest> {
        let interest = |feature: Feature, args: &InterestArgs| {
            CalculationRequest::new(feature, [&args.principal, &args.rate, &args.years])
        };
        let moded = |feature: Feature, args: &ModeArgs| {
            let request = CalculationRequest::new(feature, [&args.value]);
            match &args.mode {
                Some(mode) => request.with_mode(mode.as_str()),
                None => request,
            }
        };

        let request = match self {
            Commands::Si(args) => interest(Feature::SimpleInterest, args),
            Commands::Ci(args) => interest(Feature::CompoundInterest, args),
            Commands::Compare(args) => interest(Feature::Compare, args),
            Commands::Emi(args) => interest(Feature::Emi, args),
            Commands::Bmi { weight, height } => CalculationRequest::new(Feature::Bmi, [weight, height]),
            Commands::Temp(args) => moded(Feature::Temperature, args),
            Commands::Unit(args) => moded(Feature::Unit, args),
            Commands::Sci(args) => moded(Feature::Scientific, args),
            Commands::Age { date } => CalculationRequest::new(Feature::Age, [date]),
            Commands::List | Commands::Menu => return None,
        };
        Some(request)
    }
}
