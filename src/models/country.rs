use serde::{Deserialize, Serialize};

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderName {
    pub common: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderFlags {
    pub png: Option<String>,
}

/// Entry returned by `/all?fields=name,population`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSummary {
    pub name: ProviderName,
    #[serde(default)]
    pub population: u64,
}

/// Entry returned by `/name/{nome}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderCountry {
    pub name: ProviderName,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub flags: ProviderFlags,
    // Map keeps the provider's key order (serde_json preserve_order).
    #[serde(default)]
    pub currencies: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySummary {
    pub nome: String,
    pub populacao: u64,
}

impl From<ProviderSummary> for CountrySummary {
    fn from(summary: ProviderSummary) -> Self {
        Self {
            nome: summary.name.common,
            populacao: summary.population,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub nome: String,
    pub capital: String,
    pub populacao: u64,
    pub regiao: String,
    pub bandeira: String,
    pub moedas: String,
}

impl From<ProviderCountry> for CountryRecord {
    fn from(country: ProviderCountry) -> Self {
        let capital = country
            .capital
            .and_then(|capitals| capitals.into_iter().next())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let moedas = country
            .currencies
            .map(|currencies| {
                currencies
                    .values()
                    .filter_map(|currency| currency.get("name").and_then(|name| name.as_str()))
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .filter(|joined| !joined.is_empty())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Self {
            nome: country.name.common,
            capital,
            populacao: country.population,
            regiao: country.region,
            bandeira: country.flags.png.unwrap_or_default(),
            moedas,
        }
    }
}
