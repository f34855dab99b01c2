//! Parsing of `--tender NAME[=COUNT]` arguments into a payment ledger.

use till_core::{Change, Denomination, LedgerError};

use crate::error::TenderError;

/// Parses `TEN_EURO`, `TEN_EURO=3` or `twenty-cent=2`.
pub fn parse_tender(arg: &str) -> Result<(Denomination, u32), TenderError> {
    let (name, count) = match arg.split_once('=') {
        Some((name, count)) => (name, Some(count.trim())),
        None => (arg, None),
    };

    let denomination: Denomination = name.parse()?;
    let count = match count {
        None => 1,
        Some(value) => match value.parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(TenderError::InvalidCount {
                    value: value.to_string(),
                })
            }
        },
    };

    Ok((denomination, count))
}

/// Sums tender arguments into one ledger. Repeated names accumulate.
pub fn build_payment(tenders: &[(Denomination, u32)]) -> Result<Change, LedgerError> {
    let mut payment = Change::new();
    for (denomination, count) in tenders {
        payment.add(*denomination, *count)?;
    }
    Ok(payment)
}
