use order_desk::desk::OrderDesk;
use order_desk::export::render_document;
use order_desk::generator::{generate, GeneratorPlan};
use order_desk::menu_store::MenuError;
use order_desk::model::{ClientCreate, FoodCreate, MenuCreate, OrderCreate, OrderStatus};
use order_desk::order_store::OrderError;
use proptest::prelude::*;
use std::collections::BTreeMap;

#[test]
fn test_dangling_food_reference_survives_delete() {
    let mut desk = OrderDesk::new();
    desk.foods.insert(1, FoodCreate::new("Taco", 2.5, true)).unwrap();
    desk.add_menu(10, MenuCreate::new("2024-01-01", vec![1])).unwrap();

    desk.foods.delete(1).unwrap();

    assert!(desk.foods.find(1).is_none());
    assert_eq!(desk.menus.find(10).unwrap().foods, vec![1]);
    assert!(render_document(&desk).contains("      - id: 1\n        error: \"No encontrado\"\n"));
}

#[test]
fn test_order_for_absent_client_is_rejected() {
    let mut desk = OrderDesk::new();
    let result = desk.add_order(1, OrderCreate::new(5, "2024-01-01", Vec::new(), OrderStatus::Pending));
    assert_eq!(result, Err(OrderError::ClientNotFound(5)));
    assert_eq!(desk.orders.count(), 0);
}

#[test]
fn test_menu_rejections_leave_count_unchanged() {
    let mut desk = OrderDesk::new();
    desk.foods.insert(1, FoodCreate::new("Taco", 2.5, true)).unwrap();
    desk.foods.insert(2, FoodCreate::new("Flan", 1.0, false)).unwrap();

    assert_eq!(
        desk.add_menu(10, MenuCreate::new("2024-01-01", vec![1, 3])),
        Err(MenuError::FoodNotFound(3))
    );
    assert_eq!(
        desk.add_menu(10, MenuCreate::new("2024-01-01", vec![2])),
        Err(MenuError::FoodUnavailable(2))
    );
    assert_eq!(desk.menus.count(), 0);
}

#[test]
fn test_generated_desk_sorts_and_searches_every_table() {
    let mut desk = OrderDesk::new();
    generate(&mut desk, &GeneratorPlan::uniform(150), 99);

    let foods = desk.foods.sorted_by_id();
    for (index, food) in foods.as_slice().iter().enumerate() {
        assert_eq!(foods.search(food.id), Some(index));
    }
    let clients = desk.clients.sorted_by_id();
    assert_eq!(clients.len(), desk.clients.count());
    assert!(clients.as_slice().windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(desk.menus.search_by_id(0), None);
    assert_eq!(desk.orders.search_by_id(151), None);

    let prices: Vec<f64> = desk.foods.sorted_by_price().iter().map(|f| f.price).collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
}

#[derive(Debug, Clone)]
enum Op {
    Insert(i32, u16),
    Update(i32, u16),
    Delete(i32),
}

fn op() -> impl Strategy<Value = Op> {
    let id = -40i32..40;
    prop_oneof![
        (id.clone(), any::<u16>()).prop_map(|(id, cents)| Op::Insert(id, cents)),
        (id.clone(), any::<u16>()).prop_map(|(id, cents)| Op::Update(id, cents)),
        id.prop_map(Op::Delete),
    ]
}

proptest! {
    /// The food store behaves like a map keyed by id, whatever the bucket layout.
    #[test]
    fn food_store_matches_a_map(ops in prop::collection::vec(op(), 0..200)) {
        let mut desk = OrderDesk::new();
        let mut model: BTreeMap<i32, f64> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(id, cents) => {
                    let price = f64::from(cents) / 100.0;
                    let result = desk.foods.insert(id, FoodCreate::new(format!("F{id}"), price, true));
                    if model.contains_key(&id) {
                        prop_assert!(result.unwrap_err().is_duplicate());
                    } else {
                        prop_assert_eq!(result, Ok(id));
                        model.insert(id, price);
                    }
                }
                Op::Update(id, cents) => {
                    let price = f64::from(cents) / 100.0;
                    let result = desk.foods.update(id, FoodCreate::new(format!("F{id}"), price, true));
                    match model.get_mut(&id) {
                        Some(stored) => {
                            prop_assert_eq!(result.map(|f| f.price), Ok(price));
                            *stored = price;
                        }
                        None => prop_assert!(result.unwrap_err().is_not_found()),
                    }
                }
                Op::Delete(id) => {
                    let result = desk.foods.delete(id);
                    match model.remove(&id) {
                        Some(price) => prop_assert_eq!(result.map(|f| f.price), Ok(price)),
                        None => prop_assert!(result.unwrap_err().is_not_found()),
                    }
                }
            }
        }

        prop_assert_eq!(desk.foods.count(), model.len());
        let sorted: Vec<(i32, f64)> = desk
            .foods
            .sorted_by_id()
            .into_vec()
            .into_iter()
            .map(|f| (f.id, f.price))
            .collect();
        let expected: Vec<(i32, f64)> = model.into_iter().collect();
        prop_assert_eq!(sorted, expected);
    }

    /// Orders only ever reference clients and menus that existed when they were placed.
    #[test]
    fn generated_orders_reference_existing_records(seed in any::<u64>(), count in 0usize..40) {
        let mut desk = OrderDesk::new();
        let report = generate(&mut desk, &GeneratorPlan::uniform(count), seed);
        prop_assert_eq!(report.orders.inserted, desk.orders.count());
        for order in desk.orders.iter() {
            prop_assert!(desk.clients.find(order.client_id).is_some());
            for menu in &order.menus {
                prop_assert!(desk.menus.find(*menu).is_some());
            }
        }
    }
}

#[test]
fn test_chain_order_is_most_recent_first() {
    let mut desk = OrderDesk::new();
    for id in [3, 67, 131] {
        desk.clients.insert(id, ClientCreate::new(format!("C{id}"), "1")).unwrap();
    }
    let chains: Vec<(usize, Vec<i32>)> = desk
        .clients
        .bucket_chains()
        .map(|(bucket, chain)| (bucket, chain.iter().map(|c| c.id).collect()))
        .collect();
    assert_eq!(chains, vec![(3, vec![131, 67, 3])]);

    desk.clients.delete(67).unwrap();
    let ids: Vec<i32> = desk.clients.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![131, 3]);
}
