use khata_data::{Transaction, TxnKind};

/// Balance over a set of transactions: credit total minus debit
/// total. Derived, never stored.
pub fn balance(transactions: &[Transaction]) -> f64 {
    transactions.iter().fold(0.0, |acc, tx| match tx.kind {
        TxnKind::Credit => acc + tx.amount,
        TxnKind::Debit => acc - tx.amount,
    })
}

/// Sum of all credits: money given out.
pub fn given_total(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|tx| tx.kind == TxnKind::Credit)
        .map(|tx| tx.amount)
        .sum()
}

/// Sum of all debits: money taken in.
pub fn taken_total(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|tx| tx.kind == TxnKind::Debit)
        .map(|tx| tx.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: &str, amount: f64, kind: TxnKind) -> Transaction {
        Transaction::new(id, "p1", amount, kind, None)
    }

    #[test]
    fn test_balance_empty() {
        assert_eq!(balance(&[]), 0.0);
        assert_eq!(given_total(&[]), 0.0);
        assert_eq!(taken_total(&[]), 0.0);
    }

    #[test]
    fn test_balance_is_credits_minus_debits() {
        let txs = vec![
            tx("t1", 100.0, TxnKind::Credit),
            tx("t2", 30.0, TxnKind::Debit),
            tx("t3", 20.0, TxnKind::Credit),
        ];
        assert_eq!(balance(&txs), 90.0);
        assert_eq!(given_total(&txs), 120.0);
        assert_eq!(taken_total(&txs), 30.0);
    }

    #[test]
    fn test_balance_can_go_negative() {
        let txs = vec![
            tx("t1", 10.0, TxnKind::Credit),
            tx("t2", 30.0, TxnKind::Debit),
        ];
        assert_eq!(balance(&txs), -20.0);
    }
}
