use clap::{Parser, Subcommand};

use feedboard::ui::console::{self, BoardReload, Console, Spinner};
use feedboard::ui::{refresh, Notify};

/// Terminal front-end for a feedboard server.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Base URL of the server
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    server: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current board
    Show,
    /// Ask the server to re-fetch its feeds, then reload the board
    Refresh,
}

#[actix_rt::main]
async fn main() {
    dotenv::dotenv().ok();

    env_logger::from_env(env_logger::Env::default().default_filter_or("feedboard=info")).init();

    let cli = Cli::parse();
    let http = reqwest::Client::new();

    match cli.command.unwrap_or(Command::Show) {
        Command::Show => {
            if let Err(e) = console::show(&http, &cli.server).await {
                Console.failure(e);
                std::process::exit(1);
            }
        }
        Command::Refresh => {
            let spinner = Spinner::new();
            let reload = BoardReload::new(http.clone(), &cli.server);

            let outcome = refresh::run(&http, &cli.server, &spinner, &Console, &reload).await;
            if outcome == refresh::Outcome::Failed {
                std::process::exit(1);
            }
        }
    }
}
