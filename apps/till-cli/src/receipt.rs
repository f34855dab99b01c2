//! What the CLI prints after a successful transaction.

use serde::Serialize;
use std::fmt::Write as _;

use till_core::{Change, Money, TransactionMode};

/// Outcome of one settled (or simulated) sale.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub mode: TransactionMode,
    pub price: Money,
    pub paid: Money,
    pub change: Change,
    pub change_total: Money,
    pub drawer_total: Money,
}

impl Receipt {
    pub fn new(
        mode: TransactionMode,
        price: Money,
        payment: &Change,
        change: Change,
        drawer: &Change,
    ) -> Self {
        Receipt {
            mode,
            price,
            paid: payment.total(),
            change_total: change.total(),
            change,
            drawer_total: drawer.total(),
        }
    }

    /// Human-readable form, largest units first.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Price:   {}", self.price);
        let _ = writeln!(out, "Paid:    {}", self.paid);
        let _ = writeln!(out, "Change:  {}", self.change_total);

        let mut lines: Vec<_> = self.change.iter().collect();
        lines.reverse();
        for (denomination, count) in lines {
            let _ = writeln!(out, "  {:>3} x {}", count, denomination);
        }

        let note = if self.mode.is_simulate() {
            " (dry run, drawer not updated)"
        } else {
            ""
        };
        let _ = writeln!(out, "Drawer:  {}{}", self.drawer_total, note);
        out
    }
}
