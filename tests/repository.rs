use chrono::NaiveDate;
use descont_saude::domain::client::{NewClient, SubscriptionStatus, UpdateClient};
use descont_saude::domain::dependent::NewDependent;
use descont_saude::domain::payment::{NewPayment, PaymentMethod};
use descont_saude::domain::types::{
    ClientId, ClientName, MonthlyFee, PaymentId, PhoneNumber, TaxId,
};
use descont_saude::repository::{
    ClientListQuery, ClientReader, ClientWriter, DependentWriter, DieselRepository,
    PaymentListQuery, PaymentReader, PaymentWriter,
};

mod common;

fn new_client(name: &str, tax_id: &str, fee: f64) -> NewClient {
    NewClient::new(
        ClientName::new(name).unwrap(),
        TaxId::new(tax_id).unwrap(),
        None,
        Some(PhoneNumber::new("+55 11 99999-0000").unwrap()),
        Some("Rua das Flores, 10".to_string()),
        "Essencial".to_string(),
        MonthlyFee::new(fee).unwrap(),
    )
}

#[test]
fn test_client_repository_crud() {
    let test_db = common::TestDb::new("test_client_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let alice = new_client("Alice Santos", "529.982.247-25", 49.9);
    let bob = new_client("Bob Pereira", "390.533.447-05", 89.9);
    assert_eq!(repo.create_clients(&[alice, bob]).unwrap(), 2);

    let (total, mut items) = repo.list_clients(ClientListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(items.len(), 2);
    items.sort_by(|a, b| a.name.cmp(&b.name));
    let alice = items[0].clone();
    let bob = items[1].clone();
    assert_eq!(alice.status, SubscriptionStatus::Pending);

    let (search_total, search_items) = repo
        .list_clients(ClientListQuery::new().search("Bob"))
        .unwrap();
    assert_eq!(search_total, 1);
    assert_eq!(search_items[0].name, "Bob Pereira");

    // Search also matches the tax id digits.
    let (cpf_total, cpf_items) = repo
        .list_clients(ClientListQuery::new().search("39053344705"))
        .unwrap();
    assert_eq!(cpf_total, 1);
    assert_eq!(cpf_items[0].id, bob.id);

    let updates = UpdateClient::new(
        "Roberto Pereira".to_string(),
        bob.tax_id.clone(),
        Some("roberto@example.com".to_string()),
        bob.phone.clone(),
        bob.address.clone(),
        "Família".to_string(),
        MonthlyFee::new(99.9).unwrap(),
        SubscriptionStatus::Active,
    );
    let updated = repo
        .update_client(ClientId::new(bob.id).unwrap(), &updates)
        .unwrap();
    assert_eq!(updated.name, "Roberto Pereira");
    assert_eq!(updated.email.as_deref(), Some("roberto@example.com"));
    assert_eq!(updated.monthly_fee, 99.9);
    assert_eq!(updated.status, SubscriptionStatus::Active);

    let alice_id = ClientId::new(alice.id).unwrap();
    repo.delete_client(alice_id).unwrap();
    assert!(repo.get_client_by_id(alice_id).unwrap().is_none());

    let (total_after, items_after) = repo.list_clients(ClientListQuery::new()).unwrap();
    assert_eq!(total_after, 1);
    assert_eq!(items_after[0].name, "Roberto Pereira");
}

#[test]
fn test_dependents_are_attached_in_order() {
    let test_db = common::TestDb::new("test_dependents_are_attached_in_order.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.create_clients(&[new_client("Maria Souza", "529.982.247-25", 49.9)])
        .unwrap();
    let (_, clients) = repo.list_clients(ClientListQuery::new()).unwrap();
    let client_id = ClientId::new(clients[0].id).unwrap();

    repo.add_dependents(&[
        NewDependent::new(client_id.get(), "João".to_string(), "Filho".to_string()),
        NewDependent::new(client_id.get(), "Ana".to_string(), "Cônjuge".to_string()),
    ])
    .unwrap();

    let loaded = repo.get_client_by_id(client_id).unwrap().unwrap();
    assert_eq!(loaded.dependents.len(), 2);
    assert_eq!(loaded.dependents[0].name, "João");
    assert_eq!(loaded.dependents[1].name, "Ana");
    assert!(loaded.dependents[0].id < loaded.dependents[1].id);
    assert_eq!(loaded.dependents[0].status, SubscriptionStatus::Pending);
}

#[test]
fn test_payment_repository_read_paths() {
    let test_db = common::TestDb::new("test_payment_repository_read_paths.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.create_clients(&[new_client("Carlos Lima", "390.533.447-05", 89.9)])
        .unwrap();
    let (_, clients) = repo.list_clients(ClientListQuery::new()).unwrap();
    let client_id = ClientId::new(clients[0].id).unwrap();

    let due = |day: u32| {
        NaiveDate::from_ymd_opt(2026, 3, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    };

    repo.create_payments(&[
        NewPayment {
            client_id: client_id.get(),
            description: "Mensalidade fevereiro".to_string(),
            amount: 89.9,
            method: PaymentMethod::Boleto,
            due_date: due(10),
            paid_at: Some(due(8)),
        },
        NewPayment {
            client_id: client_id.get(),
            description: "Mensalidade março".to_string(),
            amount: 89.9,
            method: PaymentMethod::Pix,
            due_date: due(20),
            paid_at: None,
        },
    ])
    .unwrap();

    let (total, payments) = repo
        .list_payments(PaymentListQuery::new(client_id))
        .unwrap();
    assert_eq!(total, 2);
    // Most recent due date first.
    assert_eq!(payments[0].description, "Mensalidade março");
    assert_eq!(payments[0].method, PaymentMethod::Pix);
    assert_eq!(payments[1].paid_at, Some(due(8)));

    let found = repo
        .get_payment_by_id(PaymentId::new(payments[0].id).unwrap())
        .unwrap();
    assert!(found.is_some());

    let missing = repo.get_payment_by_id(PaymentId::new(9999).unwrap()).unwrap();
    assert!(missing.is_none());
}
