// Copyright 2026 Staffsearch Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::time::Instant;

use anyhow::Result;
use clap::CommandFactory;
use clap::Parser;
use clap_complete::Shell;
use serde_json::json;
use tracing::debug;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use staffsearch::SearchEngine;
use staffsearch::chat::ChatSession;
use staffsearch::chat::SAMPLE_QUERIES;
use staffsearch::chat::SEARCH_TIPS;
use staffsearch::cli::ChatArgs;
use staffsearch::cli::Cli;
use staffsearch::cli::Commands;
use staffsearch::cli::ConfigArgs;
use staffsearch::cli::SearchArgs;
use staffsearch::config;
use staffsearch::config::Config;
use staffsearch::config::LOG_ENV;
use staffsearch::output::JsonResponse;
use staffsearch::output::StatsOut;
use staffsearch::output::employee_json;
use staffsearch::output::print_json;
use staffsearch::output::render_card;
use staffsearch::output::render_facets;
use staffsearch::output::render_results;
use staffsearch::output::result_json;
use staffsearch::respond::build_responder;
use staffsearch::respond::resolve_style;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Search(args) => {
            let json = args.json;
            handle_result(cmd_search(args), json)
        }
        Commands::Chat(args) => cmd_chat(args),
        Commands::Roster { json } => handle_result(cmd_roster(json), json),
        Commands::Samples { json } => handle_result(cmd_samples(json), json),
        Commands::Config(args) => {
            let json = args.json;
            handle_result(cmd_config(args), json)
        }
        Commands::Completions { shell } => cmd_completions(shell),
    }
}

fn handle_result(result: Result<()>, json: bool) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(err) => {
            if json {
                let resp = JsonResponse::error("error", &err.to_string());
                print_json(&resp)?;
                Ok(())
            } else {
                Err(err)
            }
        }
    }
}

fn load_config() -> Result<Config> {
    let config = config::load_global_config()?;
    init_tracing(&config.log_filter);
    Ok(config)
}

fn init_tracing(default_filter: &str) {
    let (filter, rejected) = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => (filter, None),
        Err(_) => match EnvFilter::try_new(default_filter) {
            Ok(filter) => (filter, None),
            Err(_) => (EnvFilter::new("warn"), Some(default_filter)),
        },
    };
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
    if let Some(rejected) = rejected {
        warn!(filter = rejected, "invalid log_filter in config; using warn");
    }
}

fn cmd_search(args: SearchArgs) -> Result<()> {
    let config = load_config()?;
    let style = match args.style {
        Some(style) => style,
        None => resolve_style(&config)?,
    };
    let limit = args.limit.unwrap_or(config.max_cards);
    let engine = SearchEngine::default();

    let started = Instant::now();
    let results = engine.search_employees(&args.query);
    let response = engine.generate_response(&results, &args.query, style);
    let took_ms = started.elapsed().as_millis() as i64;
    debug!(took_ms, hits = results.len(), style = style.as_label(), "search complete");

    if args.json {
        let mut resp = JsonResponse::ok()
            .with_query(&args.query, style.as_label())
            .with_response(response)
            .with_results(results.iter().map(result_json).collect())
            .with_stats(StatsOut {
                took_ms,
                total_hits: results.len() as i64,
                roster_size: engine.roster().len() as i64,
            });
        if args.explain {
            resp = resp.with_facets(&engine.explain(&args.query));
        }
        print_json(&resp)?;
    } else {
        if args.explain {
            println!("{}\n", render_facets(&engine.explain(&args.query)));
        }
        println!("{response}");
        let cards = render_results(&results, limit);
        if !cards.is_empty() {
            println!("\n{cards}");
        }
    }

    Ok(())
}

fn cmd_chat(args: ChatArgs) -> Result<()> {
    let config = load_config()?;
    let style = match args.style {
        Some(style) => style,
        None => resolve_style(&config)?,
    };
    let limit = args.limit.unwrap_or(config.max_cards);
    let engine = SearchEngine::default();
    let session = ChatSession::new(&engine, build_responder(style), limit);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session.run(stdin.lock(), stdout.lock())
}

fn cmd_roster(json: bool) -> Result<()> {
    load_config()?;
    let engine = SearchEngine::default();
    let employees = engine.roster().employees();

    if json {
        let resp = JsonResponse::ok()
            .with_employees(employees.iter().map(employee_json).collect())
            .with_stats(StatsOut {
                took_ms: 0,
                total_hits: employees.len() as i64,
                roster_size: employees.len() as i64,
            });
        print_json(&resp)?;
    } else {
        let cards: Vec<String> = employees.iter().map(|e| render_card(e, None)).collect();
        println!("{}", cards.join("\n\n"));
    }

    Ok(())
}

fn cmd_samples(json: bool) -> Result<()> {
    if json {
        let resp = JsonResponse::ok()
            .with_samples(SAMPLE_QUERIES.iter().map(|q| q.to_string()).collect());
        print_json(&resp)?;
    } else {
        println!("Sample queries:");
        for query in SAMPLE_QUERIES {
            println!("  {query}");
        }
        println!();
        println!("Search tips:");
        for tip in SEARCH_TIPS {
            println!("  {tip}");
        }
    }
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> Result<()> {
    let path = config::global_config_path();
    if args.init {
        let Some(path) = &path else {
            anyhow::bail!("config directory unavailable");
        };
        if path.exists() {
            anyhow::bail!("{} already exists", path.display());
        }
        config::write_config(path, &Config::default())?;
        if !args.json {
            println!("Wrote default config to {}", path.display());
        }
    }

    let config = load_config()?;
    let warnings: Vec<String> = resolve_style(&config)
        .err()
        .map(|err| err.to_string())
        .into_iter()
        .collect();
    let path_text = path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<config dir unavailable>".to_string());

    if args.json {
        let resp = JsonResponse::ok()
            .with_config(json!({
                "path": path_text,
                "response_style": config.response_style,
                "max_cards": config.max_cards,
                "log_filter": config.log_filter,
            }))
            .with_warnings(warnings);
        print_json(&resp)?;
    } else {
        println!("Config: {path_text}");
        println!("Response style: {}", config.response_style);
        println!("Max cards: {}", config.max_cards);
        println!("Log filter: {}", config.log_filter);
        for warn in warnings {
            eprintln!("warning: {warn}");
        }
    }

    Ok(())
}

fn cmd_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "staffsearch", &mut std::io::stdout());
    Ok(())
}
