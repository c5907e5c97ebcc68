pub mod article_repo;
pub use article_repo::ArticleRepository;
pub mod categorie_repo;
pub use categorie_repo::CategorieRepository;
pub mod client_repo;
pub use client_repo::ClientRepository;
pub mod commande_client_repo;
pub use commande_client_repo::CommandeClientRepository;
pub mod commande_fournisseur_repo;
pub use commande_fournisseur_repo::CommandeFournisseurRepository;
pub mod entreprise_repo;
pub use entreprise_repo::EntrepriseRepository;
pub mod fournisseur_repo;
pub use fournisseur_repo::FournisseurRepository;
pub mod mvt_stk_repo;
pub use mvt_stk_repo::MvtStkRepository;
pub mod roles_repo;
pub use roles_repo::RolesRepository;
pub mod utilisateur_repo;
pub use utilisateur_repo::UtilisateurRepository;
pub mod vente_repo;
pub use vente_repo::VenteRepository;
