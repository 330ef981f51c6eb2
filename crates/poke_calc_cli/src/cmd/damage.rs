use std::path::PathBuf;

use clap::Args;
use poke_calc::{calculate, DamageRequest};

use crate::input::read_request_text;

#[derive(Args, Debug)]
pub struct DamageArgs {
    /// Inline JSON request
    pub request: Option<String>,

    /// Read the JSON request from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print the full result as JSON instead of the summary
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: DamageArgs) -> Result<(), String> {
    let text = read_request_text(args.request.as_deref(), args.file.as_deref())?;
    let request: DamageRequest =
        serde_json::from_str(&text).map_err(|err| format!("malformed damage request: {err}"))?;
    let result = calculate(&request).map_err(|err| err.to_string())?;

    if args.json {
        let json = serde_json::to_string_pretty(&result).map_err(|err| err.to_string())?;
        println!("{json}");
        return Ok(());
    }

    println!("{}", result.description);
    println!();

    let rolls: Vec<String> = result.rolls.iter().map(|roll| roll.to_string()).collect();
    println!("Rolls:          {}", rolls.join(", "));
    println!(
        "Effectiveness:  {}x{}",
        result.type_effectiveness,
        if result.is_stab { " (STAB)" } else { "" }
    );
    if let Some(recoil) = &result.recoil {
        println!(
            "Recoil:         {} ({:.1}% of the attacker's HP)",
            recoil.damage, recoil.percent
        );
    }
    if let Some(recovery) = &result.recovery {
        println!(
            "Recovery:       {}-{} ({:.1} - {:.1}%)",
            recovery.min, recovery.max, recovery.min_percent, recovery.max_percent
        );
    }

    Ok(())
}
