use std::{collections::HashSet, str::FromStr, sync::LazyLock};

use anyhow::{Context, Error, Result};
use csv::Reader;
use regex::Regex;
use rust_decimal_macros::dec;
use tracing::info;

use crate::{
    app::utils::parse_decimal,
    models::{Holding, HoldingStatus, normalize_symbol},
};

const COLUMNS: usize = 9;

static SYMBOL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z0-9][A-Z0-9.\-]{0,14}$").expect("symbol pattern is valid")
});

pub fn is_valid_symbol(symbol: &str) -> bool {
    SYMBOL_PATTERN.is_match(&normalize_symbol(symbol))
}

/// Reads holdings from a CSV file with a header row and the columns
/// `id,symbol,name,current_price,invested_amount,shares,status,platform,change_24h`.
pub fn load_holdings_csv(path: &str) -> Result<Vec<Holding>> {
    let mut reader = Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV file at path: {}", path))?;

    let mut holdings = Vec::new();
    let mut seen_ids = HashSet::new();

    for (row_idx, record) in reader.records().enumerate() {
        let row = row_idx + 1;
        let rec = record.with_context(|| format!("Failed to read CSV record at row {}", row))?;

        if rec.len() < COLUMNS {
            return Err(Error::msg(format!(
                "Invalid CSV format at row {}: expected {} columns, found {}",
                row,
                COLUMNS,
                rec.len()
            )));
        }

        let id = rec[0].trim().to_string();
        if !seen_ids.insert(id.clone()) {
            return Err(Error::msg(format!("Duplicate holding id '{}' at row {}", id, row)));
        }

        let symbol = &rec[1];
        if !is_valid_symbol(symbol) {
            return Err(Error::msg(format!("Invalid symbol '{}' at row {}", symbol, row)));
        }

        let status = HoldingStatus::from_str(rec[6].trim())
            .with_context(|| format!("Unknown status '{}' at row {}", &rec[6], row))?;

        let with_row = |field: &str, name: &str| {
            parse_decimal(field, name).with_context(|| format!("Invalid holding at row {}", row))
        };

        holdings.push(Holding::new(
            id,
            symbol,
            rec[2].trim().to_string(),
            with_row(&rec[3], "current price")?,
            with_row(&rec[4], "invested amount")?,
            with_row(&rec[5], "shares")?,
            status,
            rec[7].trim().to_string(),
            with_row(&rec[8], "24h change")?,
        ));
    }

    info!(count = holdings.len(), path, "loaded holdings");
    Ok(holdings)
}

/// Demo portfolio used when no holdings file is configured.
pub fn sample_holdings() -> Vec<Holding> {
    let holding = |id: &str, symbol, name: &str, price, invested, shares, platform: &str, change| {
        Holding::new(
            id.to_string(),
            symbol,
            name.to_string(),
            price,
            invested,
            shares,
            HoldingStatus::Active,
            platform.to_string(),
            change,
        )
    };

    vec![
        holding("1", "AAPL", "Apple Inc.", dec!(178.72), dec!(5000), dec!(30), "Robinhood", dec!(1.24)),
        holding("2", "MSFT", "Microsoft Corporation", dec!(378.91), dec!(7500), dec!(22), "Fidelity", dec!(0.87)),
        holding("3", "GOOGL", "Alphabet Inc.", dec!(141.80), dec!(4200), dec!(35), "Charles Schwab", dec!(-0.45)),
        holding("4", "TSLA", "Tesla, Inc.", dec!(248.50), dec!(6000), dec!(20), "Webull", dec!(2.31)),
        holding("5", "NVDA", "NVIDIA Corporation", dec!(495.22), dec!(8000), dec!(18), "TD Ameritrade", dec!(3.15)),
        holding("6", "BTC", "Bitcoin", dec!(43250.00), dec!(10000), dec!(0.28), "Coinbase", dec!(-1.23)),
    ]
}
