use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use bloglist_app::config_store;
use bloglist_app::{AppView, BlogApp, FileStorage, KeyValueStorage, MemoryStorage, NewBlog};
use bloglist_http::ApiClient;

#[derive(Parser)]
#[command(name = "bloglist")]
#[command(about = "Browse, create, like and delete blogs")]
struct Cli {
    /// Backend origin, overrides BLOGLIST_API_URL and the saved config
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Keep the session in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and remember the session
    Login {
        username: String,
        /// Read from stdin when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Forget the saved session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// List blogs, most liked first
    List {
        #[arg(long)]
        json: bool,
    },
    /// Create a blog
    Add {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        author: String,
        #[arg(short, long)]
        url: String,
    },
    /// Like a blog by id
    Like { id: String },
    /// Delete a blog by id
    Delete { id: String },
    /// Inspect or change the saved backend URL
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl Command {
    /// Listing and liking work on the loaded collection.
    fn needs_blogs(&self) -> bool {
        matches!(self, Command::List { .. } | Command::Like { .. })
    }
}

#[derive(Subcommand)]
enum ConfigAction {
    Show,
    SetUrl { url: String },
}

fn init_tracing(ephemeral: bool) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bloglist_app=info,bloglist_http=info,warn".into());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(LevelFilter::WARN);

    if ephemeral {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return None;
    }

    let file_appender =
        tracing_appender::rolling::never(bloglist_common::logs_dir(), "bloglist.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .init();

    Some(guard)
}

fn read_password() -> anyhow::Result<String> {
    eprint!("password: ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn print_blogs(app: &BlogApp, view: &AppView) {
    if view.blogs.is_empty() {
        println!("no blogs");
        return;
    }
    for blog in &view.blogs {
        let likes = blog
            .likes
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".to_string());
        let removable = if app.can_delete(blog) { " *" } else { "" };
        println!(
            "{:>4}  {} by {} <{}> [{}]{}",
            likes, blog.title, blog.author, blog.url, blog.id, removable
        );
    }
}

async fn run(cli: Cli, app: &mut BlogApp) -> anyhow::Result<bool> {
    let ok = match cli.command {
        Command::Login { username, password } => {
            let password = match password {
                Some(p) => p,
                None => read_password()?,
            };
            app.login(username, password).await.is_ok()
        }
        Command::Logout => {
            app.logout();
            println!("logged out");
            true
        }
        Command::Whoami => match app.user() {
            Some(user) => {
                println!("{} logged in ({})", user.name, user.username);
                true
            }
            None => {
                println!("not logged in");
                false
            }
        },
        Command::List { json } => {
            if !app.is_logged_in() {
                println!("not logged in");
                return Ok(false);
            }
            let view = app.view();
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_blogs(app, &view);
            }
            true
        }
        Command::Add { title, author, url } => {
            app.show_new_blog_form();
            app.add_blog(NewBlog::new(title, author, url)).await.is_ok()
        }
        Command::Like { id } => app.like_blog(&id).await.is_ok(),
        Command::Delete { id } => app.delete_blog(&id).await.is_ok(),
        Command::Config { action } => {
            run_config(&action, None)?;
            true
        }
    };

    if let Some(notification) = app.notification() {
        println!("{}", notification.message);
    }
    Ok(ok)
}

fn run_config(action: &ConfigAction, api_url: Option<&str>) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            println!("api url:   {}", config_store::resolve_api_url(api_url));
            println!(
                "saved url: {}",
                config_store::load_api_url().unwrap_or_else(|| "(none)".to_string())
            );
            println!("data root: {}", bloglist_common::bloglist_root().display());
        }
        ConfigAction::SetUrl { url } => {
            config_store::save_api_url(url)?;
            println!("saved api url {}", bloglist_common::normalize_base_url(url));
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !cli.ephemeral {
        bloglist_common::init_structure().context("Failed to initialize data directory")?;
    }
    let guard = init_tracing(cli.ephemeral);

    if let Command::Config { action } = &cli.command {
        return run_config(action, cli.api_url.as_deref());
    }

    let api_url = config_store::resolve_api_url(cli.api_url.as_deref());
    info!("Starting bloglist client against {}", api_url);

    let client = ApiClient::new(api_url).context("Invalid API URL")?;
    let storage: Arc<dyn KeyValueStorage> = if cli.ephemeral {
        Arc::new(MemoryStorage::new())
    } else {
        Arc::new(FileStorage::open_default()?)
    };

    let mut app = BlogApp::new(client, storage);
    if cli.command.needs_blogs() {
        app.bootstrap().await;
    } else {
        app.restore_session();
    }

    let ok = run(cli, &mut app).await?;
    drop(guard);
    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> Command {
        Cli::parse_from(std::iter::once("bloglist").chain(args.iter().copied())).command
    }

    #[test]
    fn test_only_list_and_like_load_blogs() {
        assert!(command(&["list"]).needs_blogs());
        assert!(command(&["like", "b1"]).needs_blogs());

        assert!(!command(&["whoami"]).needs_blogs());
        assert!(!command(&["logout"]).needs_blogs());
        assert!(!command(&["delete", "b1"]).needs_blogs());
        assert!(!command(&["login", "root", "-p", "x"]).needs_blogs());
        assert!(!command(&["add", "-t", "T", "-a", "A", "-u", "U"]).needs_blogs());
    }
}
