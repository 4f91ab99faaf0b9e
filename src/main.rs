use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use job_match::config::{LoggingSettings, Settings};
use job_match::core::JobMatcher;
use job_match::routes::{self, matches::AppState};
use job_match::services::{JobCache, JobStore, SupabaseClient, SupabaseTables};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();

    init_tracing(
        &settings
            .as_ref()
            .map(|s| s.logging.clone())
            .unwrap_or_default(),
    );

    info!("Starting job matching service...");

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };

    info!("Configuration loaded successfully");

    let tables = SupabaseTables {
        jobs: settings.supabase.jobs_table.clone(),
        user_profiles: settings.supabase.profiles_table.clone(),
    };

    let store: Arc<dyn JobStore> = match SupabaseClient::new(
        settings.supabase.url.clone(),
        settings.supabase.anon_key.clone(),
        tables,
        Duration::from_secs(settings.supabase.timeout_secs),
    ) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("Failed to create Supabase client: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };

    info!("Supabase client initialized");

    let cache = Arc::new(JobCache::new(
        settings.cache.max_entries,
        settings.cache.ttl_secs,
    ));

    info!("Job cache initialized (TTL: {}s)", settings.cache.ttl_secs);

    let weights = settings.scoring_weights();
    let matcher = JobMatcher::new(weights);

    info!("Matcher initialized with weights: {:?}", weights);

    let app_state = AppState {
        store,
        cache,
        matcher,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .app_data(routes::query_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
