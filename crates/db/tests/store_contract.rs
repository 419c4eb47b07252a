use std::collections::HashSet;
use std::sync::Arc;

use pizzeria_core::domain::order::{NewOrder, Order};
use pizzeria_core::domain::product::Product;
use pizzeria_db::{
    InMemoryOrderRepository, InMemoryProductCatalog, OrderRepository, ProductCatalog,
};
use uuid::Uuid;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_are_all_visible() {
    let catalog: Arc<dyn ProductCatalog> =
        Arc::new(InMemoryProductCatalog::with_default_ingredients());

    let mut writers = Vec::new();
    for index in 0..64 {
        let catalog = Arc::clone(&catalog);
        writers.push(tokio::spawn(async move {
            let product = Product::new(format!("topping-{index}")).expect("valid name");
            catalog.add(product).await.expect("add");
        }));
    }

    let mut readers = Vec::new();
    for _ in 0..16 {
        let catalog = Arc::clone(&catalog);
        readers.push(tokio::spawn(async move {
            let snapshot = catalog.get_all().await.expect("get all");
            assert!(snapshot.len() >= 6 && snapshot.len() <= 70);
            assert!(snapshot.iter().all(|product| !product.name().is_empty()));
        }));
    }

    for handle in writers.into_iter().chain(readers) {
        handle.await.expect("task should not panic");
    }

    let all = catalog.get_all().await.expect("get all");
    assert_eq!(all.len(), 70);
    let distinct: HashSet<&str> = all.iter().map(Product::name).collect();
    assert_eq!(distinct.len(), 70);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_keep_every_order() {
    let repo = Arc::new(InMemoryOrderRepository::default());

    let mut handles = Vec::new();
    for index in 0..50 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            let order = Order::new(NewOrder {
                first_name: Some(format!("customer-{index}")),
                ..NewOrder::default()
            });
            repo.create(order).await.expect("create")
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let order = handle.await.expect("task should not panic");
        let stored = repo.get(order.order_id().as_str()).await.expect("get");
        assert_eq!(stored.as_ref(), Some(&order));
        ids.insert(order.order_id().as_str().to_owned());
    }

    assert_eq!(ids.len(), 50);
    assert_eq!(repo.len().await, 50);
}

#[tokio::test]
async fn created_order_reads_back_with_valid_id() {
    let repo: Arc<dyn OrderRepository> = Arc::new(InMemoryOrderRepository::default());
    let order = Order::new(NewOrder {
        first_name: Some("Dana".to_string()),
        last_name: Some("Cohen".to_string()),
        street: Some("Herzl".to_string()),
        house_number: Some("7".to_string()),
        city: Some("Tel Aviv".to_string()),
        phone: Some("03-1234567".to_string()),
        pizzas: Some(vec!["Margherita".to_string(), "Onion".to_string()]),
    });

    let created = repo.create(order).await.expect("create");
    let found = repo.get(created.order_id().as_str()).await.expect("get").expect("present");

    assert!(Uuid::parse_str(found.order_id().as_str()).is_ok());
    assert_eq!(found, created);
}
