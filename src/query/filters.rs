use crate::domain::{entities::Transaction, props::Category};

/// Case-insensitive match on the counterparty name. A blank query keeps everything.
pub fn search_transactions(transactions: &[Transaction], query: &str) -> Vec<Transaction> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return transactions.to_vec();
    }

    transactions
        .iter()
        .filter(|t| t.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn card_transactions(transactions: &[Transaction], last4: &str) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.card_last4.as_deref() == Some(last4))
        .cloned()
        .collect()
}

pub fn in_category(transactions: &[Transaction], category: Category) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.category == category)
        .cloned()
        .collect()
}

pub fn find_transaction<'a>(transactions: &'a [Transaction], id: &str) -> Option<&'a Transaction> {
    transactions.iter().find(|t| t.id.0 == id)
}

#[cfg(test)]
mod tests {
    use crate::{
        domain::props::Category,
        query::filters::{card_transactions, find_transaction, in_category, search_transactions},
        seed,
    };

    #[test]
    fn search_is_case_insensitive() {
        let txns = seed::transactions();

        assert_eq!(search_transactions(&txns, "cAFE").len(), 4);
        assert_eq!(search_transactions(&txns, "   ").len(), txns.len());
        assert!(search_transactions(&txns, "lyft").is_empty());
    }

    #[test]
    fn filters_by_card() {
        let txns = seed::transactions();

        assert_eq!(card_transactions(&txns, "4321").len(), 2);
        assert_eq!(card_transactions(&txns, "7890").len(), 8);
        assert!(card_transactions(&txns, "0000").is_empty());
    }

    #[test]
    fn filters_by_category() {
        let txns = seed::transactions();

        assert_eq!(in_category(&txns, Category::Income).len(), 1);
        assert_eq!(in_category(&txns, Category::Transport).len(), 6);
        assert!(in_category(&txns, Category::Other).is_empty());
    }

    #[test]
    fn finds_by_id() {
        let txns = seed::transactions();

        assert_eq!(
            find_transaction(&txns, "4").map(|t| t.name.as_str()),
            Some("Uber technologies")
        );
        assert!(find_transaction(&txns, "99").is_none());
    }
}
