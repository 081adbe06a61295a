//! # Random Data Generator
//!
//! Fills a desk with sample records from a seeded [`ChaCha8Rng`], so the same seed always
//! produces the same desk.
//!
//! | Record | Ids        | Fields                                                        |
//! |--------|------------|---------------------------------------------------------------|
//! | Food   | `1..=n`    | `Alimento{i}`, price 0.00–99.99, availability coin flip       |
//! | Client | `1..=n`    | `Cliente{i}`, phone `55` followed by six digits               |
//! | Menu   | `1..=n`    | 2024 date, 1–3 food ids drawn from `1..=foods`                |
//! | Order  | `1..=n`    | client from `1..=clients`, 2024 date, 1–3 menus, any status   |
//!
//! Records go through the normal validated insert path. A menu that draws an unavailable
//! food is rejected like any other invalid menu; rejections are counted in the
//! [`GeneratorReport`], never fatal.

use crate::desk::OrderDesk;
use crate::model::fields::availability_label;
use crate::model::{ClientCreate, FoodCreate, MenuCreate, OrderCreate, OrderStatus};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// How many records of each kind to attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorPlan {
    pub foods: usize,
    pub clients: usize,
    pub menus: usize,
    pub orders: usize,
}

impl GeneratorPlan {
    /// The same count for every record kind.
    pub fn uniform(count: usize) -> Self {
        Self {
            foods: count,
            clients: count,
            menus: count,
            orders: count,
        }
    }
}

/// Inserted and rejected counts for one record kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub inserted: usize,
    pub rejected: usize,
}

impl Tally {
    fn record<T, E: std::fmt::Display>(&mut self, kind: &str, id: i32, result: Result<T, E>) {
        match result {
            Ok(_) => self.inserted += 1,
            Err(e) => {
                debug!(kind, id, error = %e, "Generated record rejected");
                self.rejected += 1;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorReport {
    pub foods: Tally,
    pub clients: Tally,
    pub menus: Tally,
    pub orders: Tally,
}

/// Inserts the records described by `plan` into `desk`.
///
/// Ids start at 1 for every kind, so generating into a desk that already holds those ids
/// counts the clashes as rejections.
pub fn generate(desk: &mut OrderDesk, plan: &GeneratorPlan, seed: u64) -> GeneratorReport {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut report = GeneratorReport::default();

    for id in ids(plan.foods) {
        let price = f64::from(below(&mut rng, 10_000)) / 100.0;
        let label = availability_label(below(&mut rng, 2) == 0);
        let result = FoodCreate::from_label(format!("Alimento{id}"), price, label)
            .and_then(|params| desk.foods.insert(id, params));
        report.foods.record("food", id, result);
    }

    for id in ids(plan.clients) {
        let phone = format!("55{:06}", below(&mut rng, 100_000));
        let params = ClientCreate::new(format!("Cliente{id}"), phone);
        report.clients.record("client", id, desk.clients.insert(id, params));
    }

    for id in ids(plan.menus) {
        let date = random_date(&mut rng);
        let foods = random_ids(&mut rng, plan.foods);
        report.menus.record("menu", id, desk.add_menu(id, MenuCreate::new(date, foods)));
    }

    for id in ids(plan.orders) {
        let date = random_date(&mut rng);
        let client_id = pick_id(&mut rng, plan.clients).unwrap_or(1);
        let menus = random_ids(&mut rng, plan.menus);
        let status = OrderStatus::ALL[below(&mut rng, 3) as usize];
        let params = OrderCreate::new(client_id, date, menus, status);
        report.orders.record("order", id, desk.add_order(id, params));
    }

    info!(seed, ?report, "Generated random data");
    report
}

fn ids(count: usize) -> impl Iterator<Item = i32> {
    (1..=count).map_while(|id| i32::try_from(id).ok())
}

/// Uniform-ish value in `0..bound`.
fn below(rng: &mut ChaCha8Rng, bound: u32) -> u32 {
    rng.next_u32() % bound
}

/// An id in `1..=count`, or `None` when there is nothing to pick from.
fn pick_id(rng: &mut ChaCha8Rng, count: usize) -> Option<i32> {
    let count = u32::try_from(count).ok().filter(|&c| c > 0 && c <= i32::MAX as u32)?;
    i32::try_from(below(rng, count) + 1).ok()
}

/// One to three ids from `1..=count`; empty when `count` is zero.
fn random_ids(rng: &mut ChaCha8Rng, count: usize) -> Vec<i32> {
    let len = below(rng, 3) + 1;
    (0..len).filter_map(|_| pick_id(rng, count)).collect()
}

/// A date in 2024, days 1–28 so every month is valid.
fn random_date(rng: &mut ChaCha8Rng) -> String {
    let month = below(rng, 12) + 1;
    let day = below(rng, 28) + 1;
    format!("2024-{month:02}-{day:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::render_document;

    #[test]
    fn same_seed_same_desk() {
        let plan = GeneratorPlan::uniform(40);
        let mut first = OrderDesk::new();
        let mut second = OrderDesk::new();
        let report = generate(&mut first, &plan, 7);
        assert_eq!(generate(&mut second, &plan, 7), report);
        assert_eq!(render_document(&first), render_document(&second));
    }

    #[test]
    fn every_generated_reference_resolves() {
        let plan = GeneratorPlan {
            foods: 30,
            clients: 10,
            menus: 40,
            orders: 60,
        };
        let mut desk = OrderDesk::new();
        let report = generate(&mut desk, &plan, 2024);

        assert_eq!(report.foods.inserted, 30);
        assert_eq!(report.clients.inserted, 10);
        assert_eq!(report.menus.inserted + report.menus.rejected, 40);
        assert_eq!(report.menus.inserted, desk.menus.count());
        assert_eq!(report.orders.inserted, desk.orders.count());

        for menu in desk.menus.iter() {
            assert!((1..=3).contains(&menu.food_count()));
            for id in &menu.foods {
                assert!(desk.foods.find(*id).is_some_and(|f| f.available));
            }
        }
        for order in desk.orders.iter() {
            assert!(desk.clients.find(order.client_id).is_some());
            assert!(order.menus.iter().all(|id| desk.menus.find(*id).is_some()));
        }
    }

    #[test]
    fn generated_fields_follow_the_patterns() {
        let mut desk = OrderDesk::new();
        generate(&mut desk, &GeneratorPlan::uniform(20), 1);
        for food in desk.foods.iter() {
            assert_eq!(food.name, format!("Alimento{}", food.id));
            assert!((0.0..100.0).contains(&food.price));
        }
        for client in desk.clients.iter() {
            assert_eq!(client.name, format!("Cliente{}", client.id));
            assert!(client.phone.starts_with("55"));
            assert_eq!(client.phone.len(), 8);
        }
        assert!(desk.foods.iter().any(|f| !f.available));
    }

    #[test]
    fn empty_dependencies() {
        let plan = GeneratorPlan {
            foods: 0,
            clients: 0,
            menus: 3,
            orders: 2,
        };
        let mut desk = OrderDesk::new();
        let report = generate(&mut desk, &plan, 5);
        // Menus with no foods to draw from are empty but valid.
        assert_eq!(report.menus.inserted, 3);
        assert!(desk.menus.iter().all(|m| m.food_count() == 0));
        // Orders need a client.
        assert_eq!(report.orders, Tally { inserted: 0, rejected: 2 });
    }
}
