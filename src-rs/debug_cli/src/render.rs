use std::io::{self, Write};

use serde_json::Value;

use crate::models::{CLIConfig, ModelListing, ReportInfo, RoundInfo};

pub fn banner(cfg: &CLIConfig) {
    println!("Summarizer Showdown Debug CLI");
    println!("API: {}", cfg.base_url);
    println!(
        "Model A: {}  Model B: {}",
        cfg.model_a.clone().unwrap_or_else(|| "-".to_string()),
        cfg.model_b.clone().unwrap_or_else(|| "-".to_string())
    );
    println!("Type /help for commands. Any other line is summarized by both models.");
}

pub fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

pub fn help() {
    println!("Commands:");
    println!("  /help                         Show commands");
    println!("  /exit | /quit                 Exit");
    println!("  /models                       List available models");
    println!("  /a <model>                    Set model A");
    println!("  /b <model>                    Set model B");
    println!("  /rate <1|2> <c> <a> <k>       Rate clarity, accuracy, conciseness (0-5)");
    println!("  /prefer <1|2|tie|none>        Record overall preference");
    println!("  /report                       Show report for the current round");
    println!("  /rounds [limit]               List recent rounds");
    println!("  /config                       Show current config");
    println!("  /base <url>                   Update base URL");
}

pub fn models(listing: &ModelListing) {
    println!("closed-source:");
    for model in &listing.closed_source {
        println!("  {:<40} {} ({})", model.id, model.display_name, model.display_provider);
    }
    println!("open-source:");
    for model in &listing.open_source {
        println!("  {:<40} {} ({})", model.id, model.display_name, model.display_provider);
    }
}

pub fn round(round: &RoundInfo) {
    println!("round {}", round.id);
    for (label, side) in [("1", &round.first), ("2", &round.second)] {
        println!(
            "[{}] {} / {} ({} ms)",
            label, side.summary.display_name, side.summary.display_provider, side.summary.elapsed_ms
        );
        println!("    {}", side.summary.text);
    }
}

pub fn rounds(items: &[RoundInfo]) {
    if items.is_empty() {
        println!("no rounds");
        return;
    }
    for item in items {
        println!(
            "{}  {}  {} vs {}",
            item.created_at, item.id, item.first.model_id, item.second.model_id
        );
    }
}

pub fn report(report: &ReportInfo) {
    let side = |key: &str| {
        let entry = &report[key];
        println!(
            "  {:<16} avg {:<5} {} ms",
            entry["display_name"].as_str().unwrap_or("?"),
            number(&entry["average"]),
            entry["elapsed_ms"]
        );
    };
    println!("report:");
    side("first");
    side("second");
    println!("  difference: {}", number(&report["difference"]));
    match report["winner"]["outcome"].as_str() {
        Some("tie") => println!("  It's a tie!"),
        Some(_) => println!("  winner: {}", report["winner"]["model"].as_str().unwrap_or("?")),
        None => println!("  rate both summaries to see a winner"),
    }
}

pub fn config(cfg: &CLIConfig, round_id: Option<&str>) {
    println!("config:");
    println!("  base: {}", cfg.base_url);
    println!("  model a: {}", cfg.model_a.clone().unwrap_or_default());
    println!("  model b: {}", cfg.model_b.clone().unwrap_or_default());
    if let Some(id) = round_id {
        println!("  round: {}", id);
    }
}

pub fn info(msg: &str) {
    println!("{}", msg);
}

pub fn error(msg: &str) {
    eprintln!("error: {}", msg);
}

fn number(value: &Value) -> String {
    match value.as_f64() {
        Some(n) => format!("{:.1}", n),
        None => "N/A".to_string(),
    }
}
