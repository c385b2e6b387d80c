use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use eventdesk::config::{API_BASE_URL_ENV, ConfigError, DEFAULT_API_BASE_URL};
use eventdesk::net::events::{Event, EventsClient};
use eventdesk::net::http::{ApiError, HttpAuthApi};
use eventdesk::{
    ConsoleConfig, FileStore, GuardRender, GuardVariant, LoginError, Navigator, ProviderDeps, Role, RouteGuard,
    SessionProvider, SessionView,
};
use serde_json::Value;


/// Admin route that event deletion stands in for.
const ADMIN_EVENTS_PATH: &str = "/admin/events";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("{}", .0.user_message())]
    Login(LoginError),
    #[error("admin session required; run `eventdesk-cli login --role admin` first")]
    NotAuthenticated,
    #[error("api request failed: {0}")]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "eventdesk-cli", about = "EventDesk session and event console")]
struct Cli {
    #[arg(long, env = API_BASE_URL_ENV, default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    /// JSON file holding persisted sessions.
    #[arg(long, env = "EVENTDESK_STATE_FILE", default_value = ".eventdesk-session.json")]
    state_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RoleArg {
    Admin,
    User,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Admin => Role::Admin,
            RoleArg::User => Role::User,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and persist the session.
    Login(LoginArgs),
    /// Drop a role's session.
    Logout {
        #[arg(long, value_enum)]
        role: RoleArg,
    },
    /// Show both roles' sessions.
    Status,
    Events(EventsCommand),
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long, value_enum, default_value = "user")]
    role: RoleArg,

    #[arg(long)]
    email: String,

    #[arg(long, env = "EVENTDESK_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Args, Debug)]
struct EventsCommand {
    #[command(subcommand)]
    command: EventsSubcommand,
}

#[derive(Subcommand, Debug)]
enum EventsSubcommand {
    List,
    Get { id: String },
    /// Requires an admin session.
    Delete { id: String },
}

const SESSION_ENDED_HINT: &str = "admin session ended; sign in again with `eventdesk-cli login --role admin`";

/// Stands in for browser navigation: logs the target and optionally prints a
/// hint when sent to the admin login page.
struct HintNavigator {
    login_hint: Option<&'static str>,
}

impl HintNavigator {
    /// For the provider, whose only redirect follows an admin logout.
    fn after_logout() -> Self {
        Self { login_hint: Some(SESSION_ENDED_HINT) }
    }

    /// For command gates, which report their own error.
    fn quiet() -> Self {
        Self { login_hint: None }
    }

    fn hint_for(&self, path: &str) -> Option<&'static str> {
        self.login_hint.filter(|_| path == eventdesk::ADMIN_LOGIN_PATH)
    }
}

impl Navigator for HintNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(path, "navigation requested");
        if let Some(hint) = self.hint_for(path) {
            eprintln!("{hint}");
        }
    }
}

type Sessions = SessionProvider;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = ConsoleConfig::from_lookup(|_| Some(cli.base_url.clone()))?;
    let sessions = mount_sessions(&config, FileStore::new(&cli.state_file))?;

    match cli.command {
        Command::Login(args) => run_login(&sessions, args).await,
        Command::Logout { role } => {
            sessions.for_role(role.into()).logout();
            println!("{} signed out", Role::from(role));
            Ok(())
        }
        Command::Status => {
            for role in Role::ALL {
                println!("{}", status_line(role, &sessions.for_role(role).view()));
            }
            Ok(())
        }
        Command::Events(events) => run_events(&config, &sessions, events).await,
    }
}

fn mount_sessions(config: &ConsoleConfig, store: FileStore) -> Result<Sessions, CliError> {
    let deps = ProviderDeps {
        storage: Arc::new(store),
        api: Arc::new(HttpAuthApi::new(config)?),
        navigator: Arc::new(HintNavigator::after_logout()),
    };
    Ok(SessionProvider::mount_shared(deps))
}

async fn run_login(sessions: &Sessions, args: LoginArgs) -> Result<(), CliError> {
    let service = sessions.for_role(args.role.into());
    let record = service.try_login(&args.email, &args.password).await.map_err(CliError::Login)?;
    println!("{} signed in as {}", record.role, record.email);
    Ok(())
}

async fn run_events(config: &ConsoleConfig, sessions: &Sessions, events: EventsCommand) -> Result<(), CliError> {
    let client = EventsClient::new(config)?;
    match events.command {
        EventsSubcommand::List => {
            let events = client.list().await?;
            print_json(&serde_json::to_value(events)?)
        }
        EventsSubcommand::Get { id } => {
            let event: Event = client.get(&id).await?;
            print_json(&serde_json::to_value(event)?)
        }
        EventsSubcommand::Delete { id } => {
            require_admin(&sessions.admin().view(), Arc::new(HintNavigator::quiet()))?;
            client.delete(&id).await?;
            println!("deleted event {id}");
            Ok(())
        }
    }
}

/// Gate an admin command the way the admin pages are gated.
fn require_admin(admin: &SessionView, navigator: Arc<dyn Navigator>) -> Result<(), CliError> {
    let mut guard = RouteGuard::new(GuardVariant::Route, ADMIN_EVENTS_PATH, navigator);
    match guard.observe(admin) {
        GuardRender::Children => Ok(()),
        GuardRender::Loading | GuardRender::Nothing => Err(CliError::NotAuthenticated),
    }
}

fn status_line(role: Role, view: &SessionView) -> String {
    match &view.record {
        _ if view.initializing => format!("{role}: checking"),
        Some(record) => format!("{role}: signed in as {}", record.email),
        None => format!("{role}: signed out"),
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
