// src/config/config.rs

use anyhow::Context;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, time::Duration};

use crate::db::{
    ArticleRepository, CategorieRepository, ClientRepository, CommandeClientRepository,
    CommandeFournisseurRepository, EntrepriseRepository, FournisseurRepository, MvtStkRepository,
    RolesRepository, UtilisateurRepository, VenteRepository,
};
use crate::services::{
    ArticleService, AuthService, CategorieService, ClientService, CommandeClientService,
    CommandeFournisseurService, EntrepriseService, FournisseurService, MvtStkService,
    RolesService, UtilisateurService, VenteService,
};

// O estado compartilhado que será acessível em toda a aplicação: a pool, o
// segredo do JWT e os serviços já construídos.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_secret: String,
    pub entreprise_service: EntrepriseService,
    pub utilisateur_service: UtilisateurService,
    pub roles_service: RolesService,
    pub categorie_service: CategorieService,
    pub article_service: ArticleService,
    pub client_service: ClientService,
    pub fournisseur_service: FournisseurService,
    pub commande_client_service: CommandeClientService,
    pub commande_fournisseur_service: CommandeFournisseurService,
    pub mvt_stk_service: MvtStkService,
    pub vente_service: VenteService,
    pub auth_service: AuthService,
}

impl AppState {
    // Carrega as configurações, abre a pool e monta o grafo de serviços.
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET deve ser definido")?;

        let db_pool = match PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await
        {
            Ok(pool) => {
                tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");
                pool
            }
            Err(e) => {
                tracing::error!("🔥 Falha ao conectar ao banco de dados: {:?}", e);
                return Err(e.into());
            }
        };

        let entreprise_repo = EntrepriseRepository::new(db_pool.clone());
        let utilisateur_repo = UtilisateurRepository::new(db_pool.clone());
        let roles_repo = RolesRepository::new(db_pool.clone());
        let categorie_repo = CategorieRepository::new(db_pool.clone());
        let article_repo = ArticleRepository::new(db_pool.clone());
        let client_repo = ClientRepository::new(db_pool.clone());
        let fournisseur_repo = FournisseurRepository::new(db_pool.clone());
        let commande_client_repo = CommandeClientRepository::new(db_pool.clone());
        let commande_fournisseur_repo = CommandeFournisseurRepository::new(db_pool.clone());
        let mvt_stk_repo = MvtStkRepository::new(db_pool.clone());
        let vente_repo = VenteRepository::new(db_pool.clone());

        Ok(Self {
            entreprise_service: EntrepriseService::new(entreprise_repo.clone()),
            utilisateur_service: UtilisateurService::new(
                utilisateur_repo.clone(),
                roles_repo.clone(),
                entreprise_repo.clone(),
                db_pool.clone(),
            ),
            roles_service: RolesService::new(
                roles_repo.clone(),
                utilisateur_repo.clone(),
                db_pool.clone(),
            ),
            categorie_service: CategorieService::new(
                categorie_repo.clone(),
                entreprise_repo.clone(),
            ),
            article_service: ArticleService::new(
                article_repo.clone(),
                categorie_repo,
                entreprise_repo.clone(),
            ),
            client_service: ClientService::new(client_repo.clone(), entreprise_repo.clone()),
            fournisseur_service: FournisseurService::new(
                fournisseur_repo.clone(),
                entreprise_repo.clone(),
            ),
            commande_client_service: CommandeClientService::new(
                commande_client_repo,
                client_repo,
                entreprise_repo.clone(),
                article_repo.clone(),
            ),
            commande_fournisseur_service: CommandeFournisseurService::new(
                commande_fournisseur_repo,
                fournisseur_repo,
                entreprise_repo.clone(),
                article_repo.clone(),
            ),
            mvt_stk_service: MvtStkService::new(mvt_stk_repo, article_repo.clone()),
            vente_service: VenteService::new(
                vente_repo,
                article_repo,
                entreprise_repo.clone(),
                db_pool.clone(),
            ),
            auth_service: AuthService::new(
                utilisateur_repo,
                roles_repo,
                entreprise_repo,
                jwt_secret.clone(),
                db_pool.clone(),
            ),
            db_pool,
            jwt_secret,
        })
    }
}
