//src/main.rs

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_middleware;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");
    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas de autenticação: /login é público, /register exige ADMIN
    // (o RequireRole no handler cuida disso)
    let auth_routes = Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/register", post(handlers::auth::register));

    let address_routes = Router::new()
        .route(
            "/",
            get(handlers::address::get_all_addresses).post(handlers::address::create_address),
        )
        .route(
            "/{id}",
            get(handlers::address::get_address_by_id)
                .put(handlers::address::update_address)
                .delete(handlers::address::delete_address),
        );

    let client_routes = Router::new()
        .route(
            "/",
            get(handlers::client::get_all_clients).post(handlers::client::create_client),
        )
        .route(
            "/{id}",
            get(handlers::client::get_client_by_id)
                .put(handlers::client::update_client)
                .delete(handlers::client::delete_client),
        );

    let technician_routes = Router::new()
        .route(
            "/",
            get(handlers::technician::get_all_technicians)
                .post(handlers::technician::create_technician),
        )
        .route(
            "/{id}",
            get(handlers::technician::get_technician_by_id)
                .put(handlers::technician::update_technician)
                .delete(handlers::technician::delete_technician),
        );

    let task_routes = Router::new()
        .route(
            "/",
            get(handlers::task::get_all_tasks).post(handlers::task::create_task),
        )
        .route(
            "/{id}",
            get(handlers::task::get_task_by_id)
                .put(handlers::task::update_task)
                .delete(handlers::task::delete_task),
        );

    // O auth_middleware cobre tudo: requisições sem token seguem não
    // autenticadas e são barradas pelos extractors das rotas protegidas.
    let app = Router::new()
        .nest("/auth", auth_routes)
        .nest("/addresses", address_routes)
        .nest("/clients", client_routes)
        .nest("/technicians", technician_routes)
        .nest("/tasks", task_routes)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ))
        .with_state(app_state);

    let addr = std::env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
