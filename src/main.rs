mod cli;

use clap::Parser;
use cli::{Cli, Commands, DecideArgs, WeatherArgs};
use irrigops::{
    Config, CycleContext, CycleOutcome, DecisionCycle, Result, SensorReading, WeatherSample,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let cycle = DecisionCycle::from_config(&config)?;

    let output = match cli.command {
        Commands::Check => check(&config, &cycle),
        Commands::Et0(args) => et0(&cycle, &args),
        Commands::Decide(args) => decide(&cycle, &args)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn check(config: &Config, cycle: &DecisionCycle) -> serde_json::Value {
    let model = cycle.model();
    json!({
        "config": config,
        "pressure_kpa": model.pressure_kpa(),
        "psychrometric_constant": model.gamma(),
        "rules": cycle
            .engine()
            .list_rules()
            .into_iter()
            .map(|(id, name)| json!({ "id": id, "name": name }))
            .collect::<Vec<_>>(),
    })
}

fn et0(cycle: &DecisionCycle, args: &WeatherArgs) -> serde_json::Value {
    let mut sample = WeatherSample::new(args.temperature, args.humidity, args.radiation);
    if let Some(wind) = args.wind_speed {
        sample = sample.with_wind_speed(wind);
    }

    match cycle.model().compute_sample(&sample) {
        Ok(et0) => json!({ "input": sample, "et0_mm_per_day": et0 }),
        Err(e) => json!({ "input": sample, "error": e.to_string() }),
    }
}

fn decide(cycle: &DecisionCycle, args: &DecideArgs) -> Result<serde_json::Value> {
    let reading = SensorReading::new(args.temperature, args.humidity)
        .with_solar_voltage(args.solar_voltage);
    let context = CycleContext {
        hour: args.hour,
        power_available: !args.no_power,
        water_level_ml: args.water_level,
        mode: args.mode,
    };

    let output = match cycle.run_reading(&reading, None, args.radiation, &context)? {
        CycleOutcome::Decided {
            conditions,
            verdict,
            decision,
        } => json!({
            "reading": reading,
            "conditions": conditions,
            "rule": verdict.rule_id,
            "decision": decision,
        }),
        CycleOutcome::Skipped(reason) => json!({
            "reading": reading,
            "context": context,
            "skipped": reason.to_string(),
        }),
    };

    Ok(output)
}
