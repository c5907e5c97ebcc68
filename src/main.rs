// src/main.rs

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tokio::net::TcpListener;

mod common;
mod config;
mod db;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");
    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    let entreprise_routes = Router::new()
        .route("/create", post(handlers::entreprise::save))
        .route("/id/{idEntreprise}", get(handlers::entreprise::find_by_id))
        .route("/nom/{nomEntreprise}", get(handlers::entreprise::find_by_nom))
        .route("/showAll", get(handlers::entreprise::find_all))
        .route("/delete/{idEntreprise}", delete(handlers::entreprise::delete))
        .route("/update/{idEntreprise}", put(handlers::entreprise::update));

    // Os endpoints de create/update de utilisateur aceitam multipart (imagem
    // opcional); os demais são JSON.
    let utilisateur_routes = Router::new()
        .route("/create", post(handlers::utilisateur::save))
        .route("/me", get(handlers::utilisateur::get_me))
        .route("/email/{email}", get(handlers::utilisateur::find_by_email))
        .route("/showAll", get(handlers::utilisateur::find_all))
        .route("/delete/{idUtilisateur}", delete(handlers::utilisateur::delete))
        .route("/update/{idUtilisateur}", put(handlers::utilisateur::update))
        .route("/{idUtilisateur}", get(handlers::utilisateur::find_by_id));

    let roles_routes = Router::new()
        .route("/create", post(handlers::roles::save))
        .route("/id/{idRole}", get(handlers::roles::find_by_id))
        .route("/rolename/{roleName}", get(handlers::roles::find_by_role_name))
        .route("/showAll", get(handlers::roles::find_all))
        .route("/delete/{idRole}", delete(handlers::roles::delete))
        .route("/update/{idRole}", put(handlers::roles::update));

    let categorie_routes = Router::new()
        .route("/create", post(handlers::categorie::save))
        .route("/id/{idCategorie}", get(handlers::categorie::find_by_id))
        .route("/code/{codeCategorie}", get(handlers::categorie::find_by_code))
        .route("/showAll", get(handlers::categorie::find_all))
        .route("/delete/{idCategorie}", delete(handlers::categorie::delete))
        .route("/update/{idCategorie}", put(handlers::categorie::update));

    let article_routes = Router::new()
        .route("/create", post(handlers::article::save))
        .route("/id/{idArticle}", get(handlers::article::find_by_id))
        .route("/code/{codeArticle}", get(handlers::article::find_by_code_article))
        .route("/showAll", get(handlers::article::find_all))
        .route("/delete/{idArticle}", delete(handlers::article::delete))
        .route("/update/{idArticle}", put(handlers::article::update));

    let client_routes = Router::new()
        .route("/create", post(handlers::client::save))
        .route("/id/{idClient}", get(handlers::client::find_by_id))
        .route("/nom/{nomClient}", get(handlers::client::find_by_nom))
        .route("/showAll", get(handlers::client::find_all))
        .route("/delete/{idClient}", delete(handlers::client::delete))
        .route("/update/{idClient}", put(handlers::client::update));

    let fournisseur_routes = Router::new()
        .route("/create", post(handlers::fournisseur::save))
        .route("/id/{idFournisseur}", get(handlers::fournisseur::find_by_id))
        .route("/nom/{nomFournisseur}", get(handlers::fournisseur::find_by_nom))
        .route("/showAll", get(handlers::fournisseur::find_all))
        .route("/delete/{idFournisseur}", delete(handlers::fournisseur::delete))
        .route("/update/{idFournisseur}", put(handlers::fournisseur::update));

    let commande_client_routes = Router::new()
        .route("/create", post(handlers::commande_client::save))
        .route("/id/{idCommande}", get(handlers::commande_client::find_by_id))
        .route("/code/{codeCommande}", get(handlers::commande_client::find_by_code))
        .route("/showAll", get(handlers::commande_client::find_all))
        .route("/delete/{idCommande}", delete(handlers::commande_client::delete))
        .route("/update/{idCommande}", put(handlers::commande_client::update))
        .route(
            "/lignes/{idCommande}",
            post(handlers::commande_client::add_ligne)
                .get(handlers::commande_client::find_all_lignes),
        )
        .route(
            "/lignes/update/{idCommande}/{idLigne}",
            put(handlers::commande_client::update_ligne),
        )
        .route(
            "/lignes/delete/{idCommande}/{idLigne}",
            delete(handlers::commande_client::remove_ligne),
        )
        .route(
            "/lignes/deleteAll/{idCommande}",
            delete(handlers::commande_client::remove_all_lignes),
        );

    let commande_fournisseur_routes = Router::new()
        .route("/create", post(handlers::commande_fournisseur::save))
        .route("/id/{idCommande}", get(handlers::commande_fournisseur::find_by_id))
        .route("/code/{codeCommande}", get(handlers::commande_fournisseur::find_by_code))
        .route("/showAll", get(handlers::commande_fournisseur::find_all))
        .route("/delete/{idCommande}", delete(handlers::commande_fournisseur::delete))
        .route("/update/{idCommande}", put(handlers::commande_fournisseur::update))
        .route(
            "/lignes/{idCommande}",
            post(handlers::commande_fournisseur::add_ligne)
                .get(handlers::commande_fournisseur::find_all_lignes),
        )
        .route(
            "/lignes/update/{idCommande}/{idLigne}",
            put(handlers::commande_fournisseur::update_ligne),
        )
        .route(
            "/lignes/delete/{idCommande}/{idLigne}",
            delete(handlers::commande_fournisseur::remove_ligne),
        )
        .route(
            "/lignes/deleteAll/{idCommande}",
            delete(handlers::commande_fournisseur::remove_all_lignes),
        );

    let mvt_stk_routes = Router::new()
        .route("/create", post(handlers::mvt_stk::save))
        .route("/showAll", get(handlers::mvt_stk::find_all))
        .route("/delete/{idMvtStk}", delete(handlers::mvt_stk::delete))
        .route("/update/{idMvtStk}", put(handlers::mvt_stk::update))
        .route("/{idMvtStk}", get(handlers::mvt_stk::find_by_id));

    let vente_routes = Router::new()
        .route("/create", post(handlers::vente::save))
        .route("/id/{idVente}", get(handlers::vente::find_by_id))
        .route("/code/{codeVente}", get(handlers::vente::find_by_code))
        .route("/showAll", get(handlers::vente::find_all))
        .route("/delete/{idVente}", delete(handlers::vente::delete))
        .route("/update/{idVente}", put(handlers::vente::update));

    // Tudo que é entidade fica atrás do auth_guard.
    let protected_routes = Router::new()
        .nest("/api/entreprises", entreprise_routes)
        .nest("/api/utilisateurs", utilisateur_routes)
        .nest("/api/roles", roles_routes)
        .nest("/api/categories", categorie_routes)
        .nest("/api/articles", article_routes)
        .nest("/api/clients", client_routes)
        .nest("/api/fournisseurs", fournisseur_routes)
        .nest("/api/commandesclients", commande_client_routes)
        .nest("/api/commandesfournisseurs", commande_fournisseur_routes)
        .nest("/api/mvtstk", mvt_stk_routes)
        .nest("/api/ventes", vente_routes)
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .merge(protected_routes)
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
