use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub(crate) struct ScanRequest<'a> {
    pub(crate) symbols: ScanSymbols<'a>,
    pub(crate) columns: Vec<String>,
}

#[derive(Serialize)]
pub(crate) struct ScanSymbols<'a> {
    pub(crate) tickers: [String; 1],
    pub(crate) query: ScanQuery<'a>,
}

#[derive(Serialize)]
pub(crate) struct ScanQuery<'a> {
    pub(crate) types: &'a [&'a str],
}

#[derive(Deserialize)]
pub(crate) struct ScanEnvelope {
    #[serde(default)]
    pub(crate) data: Option<Vec<ScanRow>>,
    #[serde(default)]
    pub(crate) error: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct ScanRow {
    #[serde(rename = "s")]
    pub(crate) ticker: String,
    #[serde(rename = "d")]
    pub(crate) values: Vec<Option<f64>>,
}
