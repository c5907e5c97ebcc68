pub mod article;
pub mod auth;
pub mod categorie;
pub mod client;
pub mod commande_client;
pub mod commande_fournisseur;
pub mod entreprise;
pub mod fournisseur;
pub mod mvt_stk;
pub mod utilisateur;
pub mod vente;
