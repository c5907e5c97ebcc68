pub mod article_service;
pub use article_service::ArticleService;
pub mod auth_service;
pub use auth_service::AuthService;
pub mod categorie_service;
pub use categorie_service::CategorieService;
pub mod client_service;
pub use client_service::ClientService;
pub mod commande_client_service;
pub use commande_client_service::CommandeClientService;
pub mod commande_fournisseur_service;
pub use commande_fournisseur_service::CommandeFournisseurService;
pub mod entreprise_service;
pub use entreprise_service::EntrepriseService;
pub mod fournisseur_service;
pub use fournisseur_service::FournisseurService;
pub mod mvt_stk_service;
pub use mvt_stk_service::MvtStkService;
pub mod roles_service;
pub use roles_service::RolesService;
pub mod utilisateur_service;
pub use utilisateur_service::UtilisateurService;
pub mod vente_service;
pub use vente_service::VenteService;
