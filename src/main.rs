mod modules;

use modules::{auth, cli, config, database, engagement, error};
use modules::database::{comments, connection, content, relations};
use modules::web::{routes, state};

use actix_web::{middleware, web, App, HttpServer};
use cli::{Commands, ServerArgs};
use config::Config;
use connection::Database;
use log::info;
use state::AppState;

fn main() -> std::io::Result<()> {
    match cli::parse().command {
        Some(Commands::InitConfig { config, force }) => {
            if let Err(e) = cli::init_config(&config, force) {
                eprintln!("Error writing config: {}", e);
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Commands::Serve(args)) => async_web_server(args),
        None => async_web_server(ServerArgs::default()),
    }
}

#[actix_web::main]
async fn async_web_server(args: ServerArgs) -> std::io::Result<()> {
    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting LF Content...");

    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config '{}': {}", args.config.display(), e);
            std::process::exit(1);
        }
    };

    info!("Configuration loaded from {}", args.config.display());
    info!("Database: {}", config.paths.database_path.display());
    info!("Toggle timeout: {} ms", config.engagement.toggle_timeout_ms);

    let db_path = config.paths.database_path.to_string_lossy().to_string();
    let db = match Database::open(&db_path) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to open database: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::new(db, &config);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    info!("Server starting on http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}
