//! Fixed records the store starts from.

use chrono::NaiveDate;
use rust_decimal::{Decimal, dec};

use crate::domain::{
    entities::{
        Account, Card, CategoryInfo, Contact, DebitCard, Employer, Notification, PaymentRequest,
        Statement, StatementSection, Transaction,
    },
    ledger::aggregate::Ledger,
    props::{
        CardColor, CardNetwork, Category, ContactId, IconKind, PaymentStatus, TransactionId,
        TxType,
    },
};

const PRIMARY_DEBIT: (&str, &str) = ("7890", "John Smith's Debit");
const SECONDARY_DEBIT: (&str, &str) = ("4321", "John Smith's Debit 2");

pub fn ledger() -> Ledger {
    Ledger {
        seeded: false,
        account: account(),
        transactions: transactions(),
        payment_requests: payment_requests(),
        scheduled_payments: scheduled_payments(),
        contacts: contacts(),
        notifications: notifications(),
        cards: cards(),
        debit_cards: debit_cards(),
    }
}

pub fn account() -> Account {
    Account {
        name: "John Smith".to_owned(),
        email: "john@bracket.app".to_owned(),
        account_number: "4829 1038 5567".to_owned(),
        routing_number: "021000021".to_owned(),
        balance: dec!(1234.56),
        avatar: "JS".to_owned(),
    }
}

struct Seed {
    id: u32,
    icon: &'static str,
    icon_kind: IconKind,
    color: &'static str,
    name: &'static str,
    category: Category,
    amount: Decimal,
    day: u32,
    tx_type: TxType,
    time: &'static str,
    card: Option<(&'static str, &'static str)>,
    reference: u32,
}

impl Seed {
    fn into_transaction(self) -> Transaction {
        let date = december_2025(self.day);
        Transaction {
            id: TransactionId(self.id.to_string()),
            icon: self.icon.to_owned(),
            icon_kind: self.icon_kind,
            color: self.color.to_owned(),
            name: self.name.to_owned(),
            category: self.category,
            amount: self.amount,
            date,
            tx_type: self.tx_type,
            time: Some(self.time.to_owned()),
            card_last4: self.card.map(|(last4, _)| last4.to_owned()),
            card_name: self.card.map(|(_, name)| name.to_owned()),
            reference: Some(format!(
                "TXN-{}-{:03}",
                date.format("%Y%m%d"),
                self.reference
            )),
            note: None,
            receipt: None,
        }
    }
}

fn december_2025(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, day).unwrap_or(NaiveDate::MIN)
}

fn cafe(id: u32, amount: Decimal, day: u32, time: &'static str, reference: u32) -> Seed {
    Seed {
        id,
        icon: "coffee",
        icon_kind: IconKind::Emoji,
        color: "#FF9757",
        name: "Corner Cafe",
        category: Category::Food,
        amount,
        day,
        tx_type: TxType::Debit,
        time,
        card: Some(PRIMARY_DEBIT),
        reference,
    }
}

fn subway(id: u32, amount: Decimal, day: u32, time: &'static str, reference: u32) -> Seed {
    Seed {
        id,
        icon: "subway",
        icon_kind: IconKind::Emoji,
        color: "#FFD857",
        name: "MTA Subway",
        category: Category::Transport,
        amount,
        day,
        tx_type: TxType::Debit,
        time,
        card: Some(PRIMARY_DEBIT),
        reference,
    }
}

fn uber(id: u32, amount: Decimal, day: u32, time: &'static str, reference: u32) -> Seed {
    Seed {
        id,
        icon: "uber",
        icon_kind: IconKind::Image,
        color: "#000000",
        name: "Uber technologies",
        category: Category::Transport,
        amount,
        day,
        tx_type: TxType::Debit,
        time,
        card: Some(SECONDARY_DEBIT),
        reference,
    }
}

/// Newest first.
pub fn transactions() -> Vec<Transaction> {
    let mut uber_home = uber(4, dec!(22.44), 30, "8:40 pm", 3).into_transaction();
    uber_home.note = Some("Uber back from the Jetsons!".to_owned());
    uber_home.receipt = Some("Receipt.png".to_owned());

    vec![
        cafe(1, dec!(7.24), 31, "9:15 am", 1).into_transaction(),
        subway(2, dec!(3.00), 30, "7:30 am", 1).into_transaction(),
        Seed {
            id: 3,
            icon: "RS",
            icon_kind: IconKind::Initials,
            color: "#ABFF57",
            name: "Rachel Smith",
            category: Category::Transfer,
            amount: dec!(77.50),
            day: 30,
            tx_type: TxType::Credit,
            time: "2:10 pm",
            card: None,
            reference: 2,
        }
        .into_transaction(),
        uber_home,
        cafe(5, dec!(12.80), 29, "10:05 am", 1).into_transaction(),
        subway(6, dec!(3.00), 29, "8:00 am", 2).into_transaction(),
        uber(7, dec!(39.44), 29, "11:30 pm", 3).into_transaction(),
        cafe(8, dec!(8.40), 28, "8:45 am", 1).into_transaction(),
        subway(9, dec!(14.00), 28, "6:15 pm", 2).into_transaction(),
        cafe(10, dec!(9.99), 27, "7:50 am", 1).into_transaction(),
        Seed {
            id: 11,
            icon: "employer",
            icon_kind: IconKind::Emoji,
            color: "#FF9757",
            name: "Employer, Inc.",
            category: Category::Income,
            amount: dec!(600.00),
            day: 27,
            tx_type: TxType::Credit,
            time: "12:00 pm",
            card: None,
            reference: 2,
        }
        .into_transaction(),
        subway(12, dec!(3.00), 27, "5:30 pm", 3).into_transaction(),
    ]
}

fn contact(id: &str, first_name: &str, last_name: &str, color: &str) -> Contact {
    let initials = first_name
        .chars()
        .take(1)
        .chain(last_name.chars().take(1))
        .collect();
    Contact {
        id: ContactId(id.to_owned()),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        initials,
        color: color.to_owned(),
        email: None,
        account_number: None,
        routing_number: None,
        notes: None,
    }
}

pub fn contacts() -> Vec<Contact> {
    let mut rachel = contact("c4", "Rachel", "Smith", "#ABFF57");
    rachel.email = Some("rachel@bracket.app".to_owned());

    vec![
        contact("c1", "Adam", "White", "#56CCFF"),
        contact("c2", "Brock", "Missiles", "#FF56AD"),
        contact("c3", "Cathy", "Mulford", "#8956FF"),
        rachel,
        contact("c5", "Alice", "Nguyen", "#5ADF8D"),
        contact("c6", "Diego", "Ramos", "#60A5FA"),
    ]
}

fn request(id: &str, contact: &Contact, status: PaymentStatus) -> PaymentRequest {
    PaymentRequest {
        id: id.to_owned(),
        name: contact.full_name(),
        initials: contact.initials.clone(),
        color: contact.color.clone(),
        amount: dec!(300),
        status,
        contact_id: Some(contact.id.clone()),
        line_items: vec![],
        created_at: None,
    }
}

fn requests(ids: [&str; 3]) -> Vec<PaymentRequest> {
    let contacts = contacts();
    let statuses = [
        PaymentStatus::Open,
        PaymentStatus::Filled,
        PaymentStatus::Declined,
    ];

    ids.iter()
        .zip(contacts.iter())
        .zip(statuses)
        .map(|((id, contact), status)| request(id, contact, status))
        .collect()
}

pub fn payment_requests() -> Vec<PaymentRequest> {
    requests(["1", "2", "3"])
}

pub fn scheduled_payments() -> Vec<PaymentRequest> {
    requests(["4", "5", "6"])
}

fn notification(id: &str, title: &str, message: &str, time: &str, read: bool) -> Notification {
    Notification {
        id: id.to_owned(),
        title: title.to_owned(),
        message: message.to_owned(),
        time: time.to_owned(),
        read,
    }
}

pub fn notifications() -> Vec<Notification> {
    vec![
        notification(
            "1",
            "Payment Received",
            "You received $77.50 from Rachel Smith",
            "2h ago",
            false,
        ),
        notification(
            "2",
            "Card Transaction",
            "Your card ending in 7890 was used for $7.24 at Corner Cafe",
            "1d ago",
            false,
        ),
        notification(
            "3",
            "Bill Due Soon",
            "Your Electric Bill of $89.00 is due in 3 days",
            "2d ago",
            true,
        ),
        notification(
            "4",
            "Security Alert",
            "New login detected from San Francisco, CA",
            "3d ago",
            true,
        ),
        notification(
            "5",
            "Transfer Complete",
            "Your transfer of $500.00 has been completed",
            "5d ago",
            true,
        ),
    ]
}

pub fn cards() -> Vec<Card> {
    [
        ("1", CardNetwork::Visa, "4242", "09/28", CardColor::Blue),
        ("2", CardNetwork::Mastercard, "8888", "03/27", CardColor::Red),
        ("3", CardNetwork::Visa, "1234", "12/29", CardColor::Black),
    ]
    .into_iter()
    .map(|(id, network, last4, expiry, color)| Card {
        id: id.to_owned(),
        network,
        last4: last4.to_owned(),
        holder: "John Smith".to_owned(),
        expiry: expiry.to_owned(),
        color,
    })
    .collect()
}

pub fn debit_cards() -> Vec<DebitCard> {
    vec![
        DebitCard {
            id: "1".to_owned(),
            name: "John's Debit".to_owned(),
            last4: PRIMARY_DEBIT.0.to_owned(),
            spent_today: dec!(88.00),
        },
        DebitCard {
            id: "2".to_owned(),
            name: "John's Debit 2".to_owned(),
            last4: SECONDARY_DEBIT.0.to_owned(),
            spent_today: dec!(0.00),
        },
    ]
}

pub fn categories() -> Vec<CategoryInfo> {
    [
        ("all", "All", "#4A90D9", None),
        ("income", "Income", "#40C403", Some(Category::Income)),
        ("food", "Food", "#FF9757", Some(Category::Food)),
        ("transport", "Transport", "#FFD857", Some(Category::Transport)),
        ("transfer", "Transfer", "#ABFF57", Some(Category::Transfer)),
    ]
    .into_iter()
    .map(|(id, label, color, category)| CategoryInfo {
        id: id.to_owned(),
        label: label.to_owned(),
        color: color.to_owned(),
        category,
    })
    .collect()
}

pub fn statement_sections() -> Vec<StatementSection> {
    let mut sections = vec![StatementSection {
        title: "2025".to_owned(),
        statements: vec![Statement {
            id: "y2025".to_owned(),
            label: "2025 Statement".to_owned(),
            month: "2025".to_owned(),
        }],
    }];

    let months = [
        ("dec", "December", "Dec"),
        ("nov", "November", "Nov"),
        ("oct", "October", "Oct"),
        ("sep", "September", "Sep"),
        ("aug", "August", "Aug"),
        ("jul", "July", "Jul"),
    ];
    sections.extend(months.iter().map(|(key, long, short)| StatementSection {
        title: format!("{} '25", long),
        statements: vec![Statement {
            id: format!("{}25", key),
            label: format!("{} Statement", long),
            month: format!("{} 2025", short),
        }],
    }));

    sections
}

pub fn employer() -> Employer {
    Employer {
        name: "Acme Corporation".to_owned(),
        role: "Senior Software Engineer".to_owned(),
        pay_schedule: "Bi-weekly".to_owned(),
        last_pay: "Feb 15, 2026".to_owned(),
        next_pay: "Mar 1, 2026".to_owned(),
        last_amount: dec!(2450.00),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use crate::{
        domain::props::{PaymentStatus, TxType},
        seed,
    };

    #[test]
    fn seed_transactions_are_newest_first() {
        let txns = seed::transactions();

        assert_eq!(txns.len(), 12);
        assert!(txns.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(
            txns[0].reference.as_deref(),
            Some("TXN-20251231-001")
        );
        assert_eq!(txns[3].note.as_deref(), Some("Uber back from the Jetsons!"));
    }

    #[test]
    fn seed_requests_cover_every_status() {
        let statuses: Vec<PaymentStatus> = seed::payment_requests()
            .into_iter()
            .map(|r| r.status)
            .collect();

        assert_eq!(
            statuses,
            vec![
                PaymentStatus::Open,
                PaymentStatus::Filled,
                PaymentStatus::Declined
            ]
        );
        assert_eq!(seed::scheduled_payments()[0].id, "4");
    }

    #[test]
    fn seed_credits() {
        let credits: Vec<_> = seed::transactions()
            .into_iter()
            .filter(|t| t.tx_type == TxType::Credit)
            .map(|t| t.amount)
            .collect();

        assert_eq!(credits, vec![dec!(77.50), dec!(600.00)]);
    }

    #[test]
    fn seed_catalogues() {
        assert_eq!(seed::statement_sections().len(), 7);
        assert_eq!(seed::statement_sections()[1].title, "December '25");
        assert_eq!(seed::categories()[0].category, None);
        assert_eq!(seed::contacts()[0].initials, "AW");
        assert_eq!(seed::account().balance, dec!(1234.56));
    }

    #[test]
    fn seed_employer() {
        let employer = seed::employer();

        assert_eq!(employer.name, "Acme Corporation");
        assert_eq!(employer.pay_schedule, "Bi-weekly");
        assert_eq!(employer.last_amount, dec!(2450.00));
    }
}
