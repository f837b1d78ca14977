//! Payroll arithmetic and validation.
//!
//! All amounts are fixed-point centavos ([`Money`]). Gross and net pay are
//! always recomputed from their inputs; stored totals are never trusted as
//! a cache.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// Number of rows per payroll listing page.
pub const PAYROLL_PAGE_SIZE: i64 = 10;

/// Itemized statutory deductions withheld from gross pay.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Deductions {
    /// Social Security System contribution.
    pub sss: Money,
    /// Pag-IBIG housing fund contribution.
    pub pag_ibig: Money,
    /// PhilHealth insurance contribution.
    pub phil_health: Money,
}

impl Deductions {
    /// Sum of all deduction items.
    pub fn total(&self) -> Money {
        self.sss + self.pag_ibig + self.phil_health
    }
}

/// The derived figures of a payroll entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayrollTotals {
    pub gross_pay: Money,
    pub total_deductions: Money,
    pub net_pay: Money,
}

/// Compute gross, total deductions, and net pay.
///
/// gross = daily_rate * days_worked + overtime
/// net   = gross - (sss + pag_ibig + phil_health)
pub fn compute_totals(
    daily_rate: Money,
    days_worked: i64,
    overtime: Money,
    deductions: &Deductions,
) -> PayrollTotals {
    let gross_pay = daily_rate * days_worked + overtime;
    let total_deductions = deductions.total();
    PayrollTotals {
        gross_pay,
        total_deductions,
        net_pay: gross_pay - total_deductions,
    }
}

/// Validate a payroll period: both dates present and from <= to.
pub fn validate_period(from: NaiveDate, to: NaiveDate) -> Result<(), String> {
    if from > to {
        return Err(format!(
            "Invalid payroll period: {from} is after {to}"
        ));
    }
    Ok(())
}

/// Validate that overtime and every deduction item are non-negative.
pub fn validate_amounts(overtime: Money, deductions: &Deductions) -> Result<(), String> {
    for (label, amount) in [
        ("overtime", overtime),
        ("sss", deductions.sss),
        ("pag_ibig", deductions.pag_ibig),
        ("phil_health", deductions.phil_health),
    ] {
        if amount < 0 {
            return Err(format!("Amount '{label}' must not be negative, got {amount}"));
        }
    }
    Ok(())
}
