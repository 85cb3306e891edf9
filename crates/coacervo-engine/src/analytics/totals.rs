use chrono::NaiveDate;

use crate::analytics::category::ExpenseCategory;
use crate::analytics::date::round_money;
use crate::analytics::types::OverallTotals;
use crate::ledger::types::{CashflowRecord, ExpenseRecord};

pub(crate) fn overall_totals(
    expenses: &[ExpenseRecord],
    income: &[CashflowRecord],
    as_of: NaiveDate,
) -> OverallTotals {
    let mut income_total = 0.0;
    for record in income {
        if record.date <= as_of {
            income_total += record.amount;
        }
    }

    let mut expense_total = 0.0;
    let mut savings_total = 0.0;
    for record in expenses {
        if record.date <= as_of {
            expense_total += record.amount;
            if record.category == ExpenseCategory::Savings {
                savings_total += record.amount;
            }
        }
    }

    // Saved = explicit savings transfers plus whatever income was not spent.
    OverallTotals {
        income_total: round_money(income_total),
        expense_total: round_money(expense_total),
        spend_total: round_money(expense_total - savings_total),
        saved_total: round_money(savings_total + (income_total - expense_total)),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::overall_totals;
    use crate::analytics::category::ExpenseCategory;
    use crate::ledger::types::{CashflowRecord, ExpenseRecord};

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(value) => value,
            None => panic!("invalid test date"),
        }
    }

    fn expense(name: &str, amount: f64, category: ExpenseCategory, date: NaiveDate) -> ExpenseRecord {
        ExpenseRecord::new(name.to_string(), amount, category, date)
    }

    fn cashflow(name: &str, amount: f64, date: NaiveDate) -> CashflowRecord {
        CashflowRecord::new(name.to_string(), amount, date)
    }

    #[test]
    fn saved_combines_transfers_and_unspent_income() {
        let expenses = vec![
            expense("Rent", 1200.0, ExpenseCategory::Rent, day(2024, 1, 1)),
            expense("Transfer", 400.0, ExpenseCategory::Savings, day(2024, 1, 15)),
        ];
        let income = vec![cashflow("Paycheck", 2000.0, day(2024, 1, 1))];

        let totals = overall_totals(&expenses, &income, day(2024, 12, 31));
        assert_eq!(totals.income_total, 2000.0);
        assert_eq!(totals.expense_total, 1600.0);
        assert_eq!(totals.spend_total, 1200.0);
        assert_eq!(totals.saved_total, 800.0);
    }

    #[test]
    fn rows_after_the_as_of_date_are_ignored() {
        let expenses = vec![
            expense("Rent", 1200.0, ExpenseCategory::Rent, day(2024, 1, 1)),
            expense("Rent", 1200.0, ExpenseCategory::Rent, day(2024, 2, 1)),
        ];
        let income = vec![
            cashflow("Paycheck", 2000.0, day(2024, 1, 1)),
            cashflow("Paycheck", 2000.0, day(2024, 2, 1)),
        ];

        let totals = overall_totals(&expenses, &income, day(2024, 1, 31));
        assert_eq!(totals.income_total, 2000.0);
        assert_eq!(totals.expense_total, 1200.0);
        assert_eq!(totals.saved_total, 800.0);
    }

    #[test]
    fn empty_ledgers_produce_zero_totals() {
        let totals = overall_totals(&[], &[], day(2024, 1, 1));
        assert_eq!(totals.income_total, 0.0);
        assert_eq!(totals.expense_total, 0.0);
        assert_eq!(totals.spend_total, 0.0);
        assert_eq!(totals.saved_total, 0.0);
    }
}
