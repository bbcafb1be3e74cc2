//! Issuing Company Model

use serde::{Deserialize, Serialize};

/// Issuer block printed at the top of documents (singleton per tenant)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    /// Identifiant Commun de l'Entreprise
    #[serde(default)]
    pub ice: String,
    /// Identifiant fiscal
    pub fiscal_id: Option<String>,
    /// Registre de commerce number
    pub rc: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Update company info payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CompanyInfoUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub ice: Option<String>,
    pub fiscal_id: Option<String>,
    pub rc: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}
