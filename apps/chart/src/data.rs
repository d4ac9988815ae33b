//! Note data loading and chart series preparation.

use std::fs;
use std::path::Path;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use rateio_core::allocation::allocate;
use rateio_core::errors::{Error, Result};

/// Raw note data file: asset lines plus the total acquisition cost to
/// distribute across them.
#[derive(Debug, Deserialize)]
pub struct NoteData {
    pub custo_total: Decimal,
    #[serde(default)]
    pub items: Vec<NoteDataItem>,
}

/// One asset line of the data file.
#[derive(Debug, Deserialize)]
pub struct NoteDataItem {
    pub ticker: String,
    pub valor: ValueField,
}

/// `valor` appears both as a bare number and as a decimal-dot numeric
/// string in exported files; accept both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ValueField {
    Number(Decimal),
    Text(String),
}

impl ValueField {
    fn to_decimal(&self) -> Result<Decimal> {
        match self {
            ValueField::Number(value) => Ok(*value),
            ValueField::Text(raw) => raw.trim().parse::<Decimal>().map_err(|_| {
                Error::InvalidNumericFormat(format!("could not read '{raw}' as a value"))
            }),
        }
    }
}

/// One bar of the rendered chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartItem {
    pub ticker: String,
    pub value: Decimal,
    /// Percentage of the total declared value, by straight division.
    pub percent: Decimal,
    /// Allocated share of the acquisition costs.
    pub cost: Decimal,
}

/// Chart-ready series, sorted by declared value descending.
#[derive(Debug, Clone)]
pub struct ChartData {
    pub total_value: Decimal,
    pub custo_total: Decimal,
    pub items: Vec<ChartItem>,
}

/// Loads the note data JSON file.
pub fn load_note_data(path: &Path) -> Result<NoteData> {
    debug!("loading note data from {}", path.display());
    let raw = fs::read_to_string(path).map_err(|err| {
        Error::ResourceUnavailable(format!("cannot read {}: {err}", path.display()))
    })?;
    serde_json::from_str(&raw).map_err(|err| {
        Error::InvalidNumericFormat(format!("malformed note data in {}: {err}", path.display()))
    })
}

/// Computes percentages and cost shares for every asset line.
///
/// Percentages come from straight division by the declared total, not
/// from the allocator's rounded output; cost shares come from the
/// allocator over the settled total (declared total plus `custo_total`).
pub fn build_chart_data(data: &NoteData) -> Result<ChartData> {
    if data.items.is_empty() {
        return Err(Error::InvalidAllocationInput(
            "no items found in note data".to_string(),
        ));
    }

    let tickers: Vec<String> = data.items.iter().map(|item| item.ticker.clone()).collect();
    let values = data
        .items
        .iter()
        .map(|item| item.valor.to_decimal())
        .collect::<Result<Vec<Decimal>>>()?;

    let total_value: Decimal = values.iter().sum();
    let target_total = total_value + data.custo_total;
    let allocated = allocate(&tickers, &values, target_total)?;

    let mut items: Vec<ChartItem> = tickers
        .iter()
        .zip(&values)
        .map(|(ticker, value)| ChartItem {
            ticker: ticker.clone(),
            value: *value,
            percent: (value / total_value * dec!(100)).round_dp(2),
            cost: allocated
                .get(ticker)
                .map(|entry| entry.share)
                .unwrap_or_default(),
        })
        .collect();
    items.sort_by(|a, b| b.value.cmp(&a.value));

    Ok(ChartData {
        total_value,
        custo_total: data.custo_total,
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note_from_json(raw: &str) -> NoteData {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_valor_accepts_numbers_and_strings() {
        let note = note_from_json(
            r#"{"custo_total": 10.0, "items": [
                {"ticker": "PETR4", "valor": 100.5},
                {"ticker": "VALE3", "valor": "200"}
            ]}"#,
        );

        let chart = build_chart_data(&note).unwrap();
        assert_eq!(chart.total_value, dec!(300.5));
        assert_eq!(chart.items.len(), 2);
    }

    #[test]
    fn test_empty_items_are_rejected() {
        let note = note_from_json(r#"{"custo_total": 10.0, "items": []}"#);
        let err = build_chart_data(&note).unwrap_err();
        assert!(matches!(err, Error::InvalidAllocationInput(_)));
    }

    #[test]
    fn test_missing_items_key_is_rejected() {
        let note = note_from_json(r#"{"custo_total": 10.0}"#);
        let err = build_chart_data(&note).unwrap_err();
        assert!(matches!(err, Error::InvalidAllocationInput(_)));
    }

    #[test]
    fn test_non_numeric_valor_is_rejected() {
        let note = note_from_json(
            r#"{"custo_total": 10.0, "items": [{"ticker": "PETR4", "valor": "muito"}]}"#,
        );
        let err = build_chart_data(&note).unwrap_err();
        assert!(matches!(err, Error::InvalidNumericFormat(_)));
    }

    #[test]
    fn test_items_sorted_by_value_descending() {
        let note = note_from_json(
            r#"{"custo_total": 30.0, "items": [
                {"ticker": "AAA", "valor": 100},
                {"ticker": "BBB", "valor": 300},
                {"ticker": "CCC", "valor": 200}
            ]}"#,
        );

        let chart = build_chart_data(&note).unwrap();
        let order: Vec<&str> = chart.items.iter().map(|i| i.ticker.as_str()).collect();
        assert_eq!(order, vec!["BBB", "CCC", "AAA"]);
    }

    #[test]
    fn test_percent_is_straight_division_and_cost_is_allocated() {
        let note = note_from_json(
            r#"{"custo_total": 50.0, "items": [
                {"ticker": "AAA", "valor": 100},
                {"ticker": "BBB", "valor": 200}
            ]}"#,
        );

        let chart = build_chart_data(&note).unwrap();
        // Sorted descending: BBB first.
        assert_eq!(chart.items[0].ticker, "BBB");
        assert_eq!(chart.items[0].percent, dec!(66.67));
        assert_eq!(chart.items[0].cost, dec!(33.33));
        assert_eq!(chart.items[1].percent, dec!(33.33));
        assert_eq!(chart.items[1].cost, dec!(16.67));
        assert_eq!(chart.custo_total, dec!(50.0));
    }

    #[test]
    fn test_load_note_data_missing_file() {
        let err = load_note_data(Path::new("/nonexistent/demo_data.json")).unwrap_err();
        assert!(matches!(err, Error::ResourceUnavailable(_)));
    }

    #[test]
    fn test_load_note_data_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo_data.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_note_data(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidNumericFormat(_)));
    }
}
