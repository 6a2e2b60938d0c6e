use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod error;
mod models;
mod routes;

use moonlore::{AuthProvider, Catalog, LoreAnswerer, TeamRecommender};
use moonlore_integration_supabase::{SupabaseAuth, SupabaseConfig};

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub recommender: Arc<TeamRecommender>,
    pub lore: Arc<LoreAnswerer>,
    pub auth: Option<Arc<dyn AuthProvider>>,
}

impl AppState {
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            catalog: Arc::new(Catalog::new()),
            recommender: Arc::new(TeamRecommender::new(None)),
            lore: Arc::new(LoreAnswerer::new()),
            auth: None,
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Moonlore API is running - face the fear, build the future".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🌙 Moonlore API initializing...");

    // Optional auth provider from environment
    let auth: Option<Arc<dyn AuthProvider>> =
        match (std::env::var("SUPABASE_URL"), std::env::var("SUPABASE_ANON_KEY")) {
            (Ok(url), Ok(key)) => {
                tracing::info!("🔐 Supabase auth provider configured");
                Some(Arc::new(SupabaseAuth::new(SupabaseConfig::new(url, key))))
            }
            _ => {
                tracing::warn!("⚠️  No SUPABASE_URL/SUPABASE_ANON_KEY set - auth routes disabled");
                None
            }
        };

    // Build the catalog once; everything reads it through the shared state
    let catalog = Arc::new(Catalog::new());
    tracing::info!(
        "📚 Catalog loaded: {} sinners, {} identities, {} E.G.O., {} abnormalities",
        catalog.sinners().len(),
        catalog.all_identities().count(),
        catalog.egos().len(),
        catalog.abnormalities().len()
    );

    let state = AppState {
        catalog,
        recommender: Arc::new(TeamRecommender::new(None)),
        lore: Arc::new(LoreAnswerer::new()),
        auth,
    };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::ai::router())
        .merge(routes::limbus::router())
        .merge(routes::lobcorp::router())
        .merge(routes::ruina::router())
        .merge(routes::auth::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = std::env::var("MOONLORE_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    tracing::info!("📖 Swagger UI: /swagger-ui");
    tracing::info!("✅ Moonlore API ready on {}", addr);

    axum::serve(listener, router)
        .await
        .expect("Server error");
}
