use clap::Parser;

use fluxaudit::cli::{self, AccountsCommands, Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Records(args) => cli::records::run(&args),
        Commands::Accounts { command } => match command {
            AccountsCommands::List {
                search,
                status,
                sort,
            } => cli::accounts::list(search.as_deref(), status.as_deref(), &sort),
            AccountsCommands::Add {
                name,
                email,
                role,
                status,
                notes,
            } => cli::accounts::add(&name, &email, &role, &status, notes.as_deref()),
            AccountsCommands::Edit {
                id,
                name,
                email,
                role,
                status,
                notes,
            } => cli::accounts::edit(
                &id,
                name.as_deref(),
                email.as_deref(),
                role.as_deref(),
                status.as_deref(),
                notes.as_deref(),
            ),
            AccountsCommands::Delete { ids } => cli::accounts::delete(&ids),
        },
        Commands::Reset => cli::reset::run(),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
