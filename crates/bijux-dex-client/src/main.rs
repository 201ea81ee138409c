#![forbid(unsafe_code)]

use bijux_dex_client::repl::{parse_command, ReplCommand, HELP};
use bijux_dex_client::view::{DetailView, View};
use bijux_dex_client::{
    render_view, Action, BrowseController, BrowseState, Gateway, GatewayError, HttpGateway,
    InputError, PageSize, DEFAULT_GATEWAY_URL,
};
use bijux_dex_model::RecordKey;
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use std::process::ExitCode as ProcessExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "bijux-dex")]
#[command(about = "Browse the creature catalog through a dex gateway")]
struct Cli {
    #[arg(long, global = true, env = "DEX_GATEWAY_URL", default_value = DEFAULT_GATEWAY_URL)]
    gateway_url: String,
    #[arg(long, global = true, env = "DEX_GATEWAY_TIMEOUT_MS")]
    timeout_ms: Option<u64>,
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// One page of record cards.
    List {
        #[arg(long, default_value_t = 20)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Detail of one record by id or name.
    Show { id: String },
    /// Detail of one record by name.
    Search { name: String },
    /// Cards for the first members of one type.
    Type { name: String },
    /// Available type filters.
    Types,
    /// One page of abilities.
    Abilities {
        #[arg(long, default_value_t = 20)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Interactive browsing session.
    Browse,
}

#[derive(Debug, Clone, Copy)]
#[repr(u8)]
enum ExitCode {
    Success = 0,
    Usage = 2,
    DependencyFailure = 4,
    Internal = 10,
}

struct Failure {
    code: ExitCode,
    message: String,
}

impl From<InputError> for Failure {
    fn from(err: InputError) -> Self {
        Self {
            code: ExitCode::Usage,
            message: err.to_string(),
        }
    }
}

impl From<GatewayError> for Failure {
    fn from(err: GatewayError) -> Self {
        Self {
            code: ExitCode::DependencyFailure,
            message: err.to_string(),
        }
    }
}

fn internal(message: String) -> Failure {
    Failure {
        code: ExitCode::Internal,
        message,
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Failure> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| internal(format!("json encode failed: {e}")))?;
    println!("{text}");
    Ok(())
}

fn emit_view(view: &View, json: bool) -> Result<(), Failure> {
    if json {
        print_json(view)
    } else {
        print!("{}", render_view(view));
        Ok(())
    }
}

/// Non-interactive commands exit non-zero when the view ends in an error panel.
fn failed_view(view: &View) -> Result<(), Failure> {
    match view.as_grid().and_then(|g| g.error_panel()) {
        Some(panel) => Err(Failure {
            code: ExitCode::DependencyFailure,
            message: panel.message.clone(),
        }),
        None => Ok(()),
    }
}

async fn run_action(
    controller: &mut BrowseController<HttpGateway>,
    action: Action,
    json: bool,
) -> Result<(), Failure> {
    controller.dispatch(action).await?;
    emit_view(controller.view(), json)?;
    failed_view(controller.view())
}

async fn run_browse(
    controller: &mut BrowseController<HttpGateway>,
    json: bool,
) -> Result<(), Failure> {
    match controller.load_type_options().await {
        Ok(options) if !json => {
            let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
            println!("Types: {}", labels.join(", "));
        }
        Ok(_) => {}
        Err(err) => tracing::warn!(error = %err, "type options unavailable"),
    }
    controller.dispatch(Action::LoadList).await?;
    emit_view(controller.view(), json)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| internal(format!("stdin read failed: {e}")))?
        else {
            return Ok(());
        };
        let outcome = match parse_command(&line) {
            Ok(ReplCommand::Quit) => return Ok(()),
            Ok(ReplCommand::Help) => {
                println!("{HELP}");
                continue;
            }
            Ok(ReplCommand::Retry) => controller.retry().await,
            Ok(ReplCommand::Act(action)) => controller.dispatch(action).await,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };
        match outcome {
            Ok(_) => emit_view(controller.view(), json)?,
            Err(err) => eprintln!("{err}"),
        }
    }
}

async fn run(cli: Cli) -> Result<(), Failure> {
    let gateway = HttpGateway::new(&cli.gateway_url, cli.timeout_ms.map(Duration::from_millis))?;
    let gateway = Arc::new(gateway);
    match cli.command {
        Commands::List { limit, offset } => {
            let state = BrowseState::at(offset, PageSize::new(limit)?);
            let mut controller = BrowseController::with_state(gateway, state);
            run_action(&mut controller, Action::LoadList, cli.json).await
        }
        Commands::Show { id } => {
            let key = RecordKey::parse(&id).map_err(|e| InputError::InvalidName(e.to_string()))?;
            let record = gateway.record(&key).await?;
            emit_view(&View::Detail(DetailView::from_record(&record)), cli.json)
        }
        Commands::Search { name } => {
            let mut controller = BrowseController::new(gateway);
            run_action(&mut controller, Action::Search(name), cli.json).await
        }
        Commands::Type { name } => {
            let mut controller = BrowseController::new(gateway);
            run_action(&mut controller, Action::ApplyTypeFilter(name), cli.json).await
        }
        Commands::Types => {
            let options = BrowseController::new(gateway).load_type_options().await?;
            if cli.json {
                return print_json(&options);
            }
            for option in options {
                println!("{:<12} {}", option.value, option.label);
            }
            Ok(())
        }
        Commands::Abilities { limit, offset } => {
            let page = gateway.abilities(limit, offset).await?;
            if cli.json {
                return print_json(&page);
            }
            for ability in &page.results {
                println!("{}", ability.name);
            }
            println!("({} abilities total)", page.count);
            Ok(())
        }
        Commands::Browse => {
            let mut controller = BrowseController::new(gateway);
            run_browse(&mut controller, cli.json).await
        }
    }
}

#[tokio::main]
async fn main() -> ProcessExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli).await {
        Ok(()) => ProcessExitCode::from(ExitCode::Success as u8),
        Err(failure) => {
            eprintln!("{}", failure.message);
            ProcessExitCode::from(failure.code as u8)
        }
    }
}
