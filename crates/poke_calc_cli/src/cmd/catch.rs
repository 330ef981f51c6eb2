use std::path::PathBuf;

use clap::Args;
use poke_calc::{estimate_catch, CatchRequest};

use crate::input::read_request_text;

#[derive(Args, Debug)]
pub struct CatchArgs {
    /// Inline JSON request
    pub request: Option<String>,

    /// Read the JSON request from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print the full result as JSON instead of the summary
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: CatchArgs) -> Result<(), String> {
    let text = read_request_text(args.request.as_deref(), args.file.as_deref())?;
    let request: CatchRequest =
        serde_json::from_str(&text).map_err(|err| format!("malformed catch request: {err}"))?;
    let result = estimate_catch(&request).map_err(|err| err.to_string())?;

    if args.json {
        let json = serde_json::to_string_pretty(&result).map_err(|err| err.to_string())?;
        println!("{json}");
        return Ok(());
    }

    println!("{} vs. {}", request.ball, request.species);
    println!();
    println!("Per-throw chance: {:.2}%", result.probability * 100.0);
    println!(
        "Cumulative:       {:.2}% ({} throws)",
        result.cumulative_probability * 100.0,
        request.throws
    );
    println!("Expected throws:  {:.1}", result.expected_throws);
    println!("Ball modifier:    {}x", result.ball_modifier);
    println!("Status modifier:  {}x", result.status_modifier);

    Ok(())
}
