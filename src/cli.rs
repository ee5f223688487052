use clap::{Args, Parser, Subcommand};
use irrigops::IrrigationMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "irrigops", version, about = "ET0-driven irrigation decisions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate config and show derived site constants
    Check,
    /// Compute reference evapotranspiration
    Et0(WeatherArgs),
    /// Run one full decision cycle
    Decide(DecideArgs),
}

#[derive(Args)]
pub struct WeatherArgs {
    /// Air temperature, °C
    #[arg(long, allow_negative_numbers = true)]
    pub temperature: f64,

    /// Relative humidity, %
    #[arg(long)]
    pub humidity: f64,

    /// Solar radiation, MJ/m²/day
    #[arg(long)]
    pub radiation: f64,

    /// Override the configured wind speed, m/s
    #[arg(long)]
    pub wind_speed: Option<f64>,
}

#[derive(Args)]
pub struct DecideArgs {
    /// Sensor air temperature, °C
    #[arg(long, allow_negative_numbers = true)]
    pub temperature: f64,

    /// Sensor relative humidity, %
    #[arg(long)]
    pub humidity: f64,

    /// Solar radiation, MJ/m²/day
    #[arg(long)]
    pub radiation: f64,

    /// Solar panel voltage reported with the reading
    #[arg(long, default_value_t = 0.0)]
    pub solar_voltage: f64,

    /// Hour of day, 0-23
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=23))]
    pub hour: u8,

    /// Running on battery
    #[arg(long)]
    pub no_power: bool,

    /// Reservoir level, ml
    #[arg(long)]
    pub water_level: u32,

    /// normal, conservation or extreme
    #[arg(long, default_value = "normal", value_parser = parse_mode)]
    pub mode: IrrigationMode,
}

fn parse_mode(s: &str) -> Result<IrrigationMode, String> {
    IrrigationMode::from_str(s).ok_or_else(|| {
        let valid: Vec<&str> = IrrigationMode::all().iter().map(|m| m.as_str()).collect();
        format!("unknown mode '{}' (expected one of: {})", s, valid.join(", "))
    })
}
