// ============================================================================
// ACCOUNT - Datos de solo lectura devueltos por /api/accounts
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Cuenta reportada tal como la devuelve `/api/accounts`. El cliente nunca la modifica.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub countries: Vec<String>,
    pub last_reported_at: DateTime<Utc>,
    #[serde(default)]
    pub report_count: u32,
    #[serde(default)]
    pub data_format_version: String,
}

/// Una página de cuentas más los contadores globales que usan las vistas
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountsPage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub accounts: Vec<Account>,
    pub total_count: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub unique_countries: Vec<String>,
    pub current_page: u32,
    pub total_pages: u32,
}

impl AccountsPage {
    /// Último reporte. La API ordena por `last_reported_at desc`.
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.accounts.first().map(|a| a.last_reported_at)
    }
}

// El servidor manda `null` para listas vacías
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
