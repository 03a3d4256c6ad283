mod config;
mod graphql;
mod http;

use std::{collections::BTreeMap, path::PathBuf, sync::Arc};

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use platform_obs::{ObsConfig, init_tracing};
use products_hr::{HrModule, Role};
use tracing::info;

use crate::{
    config::{AppConfig, parse_as_of},
    graphql::GraphqlData,
    http::{AppState, ServeConfig},
};

#[derive(Parser, Debug)]
#[command(name = "hr-dashboard", version, about = "Multi-role HR dashboard")]
struct Cli {
    /// Reference date for overdue and upcoming flags (YYYY-MM-DD).
    #[arg(long, global = true, value_parser = parse_as_of)]
    as_of: Option<NaiveDate>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP + GraphQL server.
    Serve(ServeCommand),
    /// List dashboard pages.
    Pages {
        #[arg(long)]
        role: Option<Role>,
    },
    /// Render one page as JSON.
    Report {
        slug: String,
        /// Filter value, repeatable: `--param status=active`.
        #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Print a month grid.
    Calendar { year: i32, month: u32 },
    /// Print the GraphQL schema snapshot.
    #[command(name = "schema:print")]
    SchemaPrint {
        #[arg(long, value_name = "FILE", help = "Destination file path")]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct ServeCommand {
    #[arg(long, default_value = "0.0.0.0")]
    host: std::net::IpAddr,
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

impl From<ServeCommand> for ServeConfig {
    fn from(value: ServeCommand) -> Self {
        ServeConfig::new(value.host, value.port)
    }
}

fn parse_param(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected KEY=VALUE, got {raw:?}"))?;
    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("empty parameter name in {raw:?}");
    }
    Ok((key.to_string(), value.to_string()))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(ObsConfig::default())?;
    let cli = Cli::parse();
    let config = Arc::new(AppConfig::load()?.with_as_of(cli.as_of));
    let module = HrModule::new(config.as_of);
    match cli.command {
        Command::Serve(cmd) => run_server(cmd, config, module).await,
        Command::Pages { role } => print_json(&module.pages(role)),
        Command::Report { slug, params } => {
            let params: BTreeMap<_, _> = params.into_iter().collect();
            print_json(&module.report(&slug, &params)?)
        }
        Command::Calendar { year, month } => {
            let grid = module.calendar(year, month)?;
            println!("{}", grid.month_label());
            println!("Su Mo Tu We Th Fr Sa");
            for week in grid.weeks() {
                let line = week
                    .iter()
                    .map(|cell| cell.map_or_else(|| "  ".to_string(), |day| format!("{day:>2}")))
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("{}", line.trim_end());
            }
            Ok(())
        }
        Command::SchemaPrint { output } => schema_print(&config, module, output),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn schema_print(config: &AppConfig, module: HrModule, path: Option<PathBuf>) -> Result<()> {
    let schema = graphql::build_schema(GraphqlData {
        module,
        org_name: config.org_name.clone(),
    });
    let sdl = schema.sdl();
    match path {
        Some(target) => {
            std::fs::write(&target, sdl)
                .with_context(|| format!("failed to write {}", target.display()))?;
            info!(path = %target.display(), "schema written");
        }
        None => print!("{sdl}"),
    }
    Ok(())
}

async fn run_server(cmd: ServeCommand, config: Arc<AppConfig>, module: HrModule) -> Result<()> {
    let schema = graphql::build_schema(GraphqlData {
        module,
        org_name: config.org_name.clone(),
    });
    let state = AppState {
        schema,
        module,
        config,
    };
    http::serve(cmd.into(), state).await
}
