use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::entities::{Contact, Transaction};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TransactionSection {
    pub date: NaiveDate,
    pub label: String,
    /// Credits minus debits for the day, unrounded.
    pub daily_total: Decimal,
    pub transactions: Vec<Transaction>,
}

/// Groups transactions by calendar day, most recent day first.
///
/// Within a day the input order is kept.
pub fn group_by_date(transactions: &[Transaction]) -> Vec<TransactionSection> {
    let mut groups: BTreeMap<NaiveDate, Vec<Transaction>> = BTreeMap::new();
    for txn in transactions {
        groups.entry(txn.date).or_default().push(txn.clone());
    }

    groups
        .into_iter()
        .rev()
        .map(|(date, transactions)| TransactionSection {
            date,
            label: date_label(date),
            daily_total: transactions.iter().map(Transaction::signed_amount).sum(),
            transactions,
        })
        .collect()
}

/// e.g. `Wednesday, Dec 31`
pub fn date_label(date: NaiveDate) -> String {
    date.format("%A, %b %-d").to_string()
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContactSection {
    pub title: String,
    pub contacts: Vec<Contact>,
}

/// Contact directory: optionally filtered by full name, grouped by the first
/// letter of the first name, sections in alphabetical order.
pub fn contact_sections(contacts: &[Contact], query: &str) -> Vec<ContactSection> {
    let needle = query.trim().to_lowercase();

    let mut groups: BTreeMap<String, Vec<Contact>> = BTreeMap::new();
    for contact in contacts
        .iter()
        .filter(|c| needle.is_empty() || c.full_name().to_lowercase().contains(&needle))
    {
        let letter: String = contact
            .first_name
            .chars()
            .take(1)
            .flat_map(char::to_uppercase)
            .collect();
        groups.entry(letter).or_default().push(contact.clone());
    }

    groups
        .into_iter()
        .map(|(title, contacts)| ContactSection { title, contacts })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::dec;

    use crate::{
        query::sections::{contact_sections, date_label, group_by_date},
        seed,
    };

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, d).unwrap()
    }

    #[test]
    fn groups_seed_by_day_descending() {
        let sections = group_by_date(&seed::transactions());

        let dates: Vec<NaiveDate> = sections.iter().map(|s| s.date).collect();
        assert_eq!(dates, vec![day(31), day(30), day(29), day(28), day(27)]);

        let totals: Vec<_> = sections.iter().map(|s| s.daily_total).collect();
        assert_eq!(
            totals,
            vec![
                dec!(-7.24),
                dec!(52.06),
                dec!(-55.24),
                dec!(-22.40),
                dec!(587.01)
            ]
        );

        assert_eq!(sections[0].label, "Wednesday, Dec 31");
        assert_eq!(sections[1].transactions.len(), 3);
    }

    #[test]
    fn grouping_ignores_input_order() {
        let txns = seed::transactions();
        let mut shuffled = txns.clone();
        shuffled.reverse();
        shuffled.rotate_left(5);

        let expected = group_by_date(&txns);
        let actual = group_by_date(&shuffled);

        assert_eq!(expected.len(), actual.len());
        for (e, a) in expected.iter().zip(actual.iter()) {
            assert_eq!(e.date, a.date);
            assert_eq!(e.daily_total, a.daily_total);

            let mut e_ids: Vec<_> = e.transactions.iter().map(|t| t.id.clone()).collect();
            let mut a_ids: Vec<_> = a.transactions.iter().map(|t| t.id.clone()).collect();
            e_ids.sort_by(|x, y| x.0.cmp(&y.0));
            a_ids.sort_by(|x, y| x.0.cmp(&y.0));
            assert_eq!(e_ids, a_ids);
        }
    }

    #[test]
    fn keeps_input_order_within_a_day() {
        let sections = group_by_date(&seed::transactions());
        let names: Vec<_> = sections[1]
            .transactions
            .iter()
            .map(|t| t.name.as_str())
            .collect();

        assert_eq!(names, vec!["MTA Subway", "Rachel Smith", "Uber technologies"]);
    }

    #[test]
    fn empty_input_has_no_sections() {
        assert!(group_by_date(&[]).is_empty());
    }

    #[test]
    fn labels_weekdays() {
        assert_eq!(date_label(day(27)), "Saturday, Dec 27");
        assert_eq!(
            date_label(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()),
            "Sunday, Mar 1"
        );
    }

    #[test]
    fn contact_directory_is_alphabetical() {
        let sections = contact_sections(&seed::contacts(), "");
        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();

        assert_eq!(titles, vec!["A", "B", "C", "D", "R"]);
        assert_eq!(sections[0].contacts.len(), 2);
    }

    #[test]
    fn contact_directory_search_matches_full_name() {
        let sections = contact_sections(&seed::contacts(), "  y mul ");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].contacts[0].first_name, "Cathy");
        assert!(contact_sections(&seed::contacts(), "zzz").is_empty());
    }
}
