use std::io;

use crate::client::HTTPClient;
use crate::models::{CLIConfig, CompareRequest, RatingsRequest};
use crate::render;

pub struct REPL {
    pub config: CLIConfig,
    pub client: HTTPClient,
    pub round_id: Option<String>,
}

impl REPL {
    pub fn new(config: CLIConfig, client: HTTPClient) -> Self {
        Self {
            config,
            client,
            round_id: None,
        }
    }

    pub fn run(&mut self) {
        render::banner(&self.config);
        loop {
            render::prompt();
            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
            let line = line.trim().to_string();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('/') {
                if self.handle_command(&line) {
                    break;
                }
                continue;
            }
            self.compare(&line);
        }
    }

    fn handle_command(&mut self, line: &str) -> bool {
        let mut parts = line.splitn(2, ' ');
        let cmd = parts.next().unwrap_or("").trim_start_matches('/');
        let rest = parts.next().unwrap_or("").trim();
        match cmd {
            "exit" | "quit" => return true,
            "help" => render::help(),
            "models" => match self.client.models() {
                Ok(listing) => render::models(&listing),
                Err(err) => render::error(&err),
            },
            "a" | "b" => {
                if rest.is_empty() {
                    render::error("model id required");
                } else if cmd == "a" {
                    self.config.model_a = Some(rest.to_string());
                    render::info("model a updated");
                } else {
                    self.config.model_b = Some(rest.to_string());
                    render::info("model b updated");
                }
            }
            "rate" => self.rate(rest),
            "prefer" => self.prefer(rest),
            "report" => match self.current_round() {
                Some(id) => match self.client.report(&id) {
                    Ok(report) => render::report(&report),
                    Err(err) => render::error(&err),
                },
                None => render::error("no round yet"),
            },
            "rounds" => {
                let limit = rest.parse::<usize>().unwrap_or(10);
                match self.client.rounds(limit) {
                    Ok(rounds) => render::rounds(&rounds),
                    Err(err) => render::error(&err),
                }
            }
            "config" => render::config(&self.config, self.round_id.as_deref()),
            "base" => {
                if rest.is_empty() {
                    render::info(&format!("base: {}", self.config.base_url));
                } else {
                    match HTTPClient::new(rest) {
                        Ok(client) => {
                            self.config.base_url = rest.to_string();
                            self.client = client;
                            render::info("base url updated");
                        }
                        Err(err) => render::error(&err),
                    }
                }
            }
            _ => render::info("unknown command, type /help"),
        }
        false
    }

    fn compare(&mut self, text: &str) {
        let req = CompareRequest {
            model_a: self.config.model_a.clone().unwrap_or_default(),
            model_b: self.config.model_b.clone().unwrap_or_default(),
            text: text.to_string(),
        };
        render::info("summarizing with both models...");
        match self.client.compare(&req) {
            Ok(round) => {
                self.round_id = Some(round.id.clone());
                render::round(&round);
            }
            Err(err) => render::error(&err),
        }
    }

    fn rate(&self, rest: &str) {
        let Some(id) = self.current_round() else {
            render::error("no round yet");
            return;
        };
        let fields: Vec<&str> = rest.split_whitespace().collect();
        let side = match fields.first() {
            Some(&"1") => "first",
            Some(&"2") => "second",
            _ => {
                render::error("usage: /rate <1|2> <clarity> <accuracy> <conciseness>");
                return;
            }
        };
        let scores: Option<Vec<u8>> = fields[1..].iter().map(|raw| raw.parse::<u8>().ok()).collect();
        let scores = match scores {
            Some(scores) if scores.len() == 3 => scores,
            _ => {
                render::error("usage: /rate <1|2> <clarity> <accuracy> <conciseness>");
                return;
            }
        };
        let req = RatingsRequest {
            side: side.to_string(),
            clarity: scores[0],
            accuracy: scores[1],
            conciseness: scores[2],
        };
        match self.client.rate(&id, &req) {
            Ok(_) => render::info("ratings saved"),
            Err(err) => render::error(&err),
        }
    }

    fn prefer(&self, rest: &str) {
        let Some(id) = self.current_round() else {
            render::error("no round yet");
            return;
        };
        let preference = match rest.to_lowercase().as_str() {
            "1" => Some("first"),
            "2" => Some("second"),
            "tie" => Some("tie"),
            "none" => None,
            _ => {
                render::error("usage: /prefer <1|2|tie|none>");
                return;
            }
        };
        match self.client.prefer(&id, preference) {
            Ok(_) => render::info("preference saved"),
            Err(err) => render::error(&err),
        }
    }

    fn current_round(&self) -> Option<String> {
        self.round_id.clone()
    }
}
