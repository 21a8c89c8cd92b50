use thiserror::Error;

use stockroom_core::{DomainError, DomainResult, ItemId};

use crate::item::{NewItem, StockItem, StockLine};
use crate::store::{StockStore, StoreError};

/// Catalog operation error: a domain failure or a storage failure.
///
/// Every variant is recoverable; the caller reports it and continues.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The inventory ledger: sole owner of the collection of stock-keeping units.
///
/// The catalog enforces the quantity invariants and derives status labels;
/// the backing [`StockStore`] is exclusively owned and only persists rows.
/// Roles and authorization are not this type's concern; callers gate access
/// before dispatching.
#[derive(Debug)]
pub struct Catalog<S: StockStore> {
    store: S,
}

impl<S: StockStore> Catalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All items in ascending id order, each annotated with its derived
    /// status. Pure read, no side effects.
    pub fn list_all(&self) -> Result<Vec<StockLine>, CatalogError> {
        let lines = self
            .store
            .all()?
            .into_iter()
            .map(|item| {
                let status = item.status();
                StockLine { item, status }
            })
            .collect();
        Ok(lines)
    }

    /// Record a stock reduction and return the resulting balance.
    ///
    /// The check and the decrement form one logical step: on any failure the
    /// item is left unchanged, and no intermediate state is observable.
    ///
    /// # Errors
    /// - `InvalidInput` when `quantity` is not positive (callers validate
    ///   console input, but the catalog rejects on its own account too)
    /// - `NotFound` when no item has `id`
    /// - `InsufficientStock` when the quantity on hand is smaller than the
    ///   requested reduction
    pub fn withdraw(&mut self, id: ItemId, quantity: i64) -> Result<i64, CatalogError> {
        if quantity <= 0 {
            return Err(DomainError::invalid_input(format!(
                "withdrawal quantity must be positive, got {quantity}"
            ))
            .into());
        }

        let item = self.store.get(id)?.ok_or(DomainError::not_found(id))?;

        if item.quantity_on_hand < quantity {
            return Err(
                DomainError::insufficient_stock(item.quantity_on_hand, quantity).into(),
            );
        }

        let balance = item.quantity_on_hand - quantity;
        self.store.set_quantity(id, balance)?;
        Ok(balance)
    }

    /// Ingest a new stock-keeping unit and return it as stored.
    ///
    /// The id is the current maximum plus one, equivalent to a monotonic
    /// counter while no delete operation exists. Negative quantities,
    /// thresholds, or prices are rejected, never clamped.
    pub fn ingest(&mut self, new_item: NewItem) -> Result<StockItem, CatalogError> {
        validate_new_item(&new_item)?;

        let id = ItemId::new(self.store.max_id()? + 1)?;
        let item = StockItem {
            id,
            name: new_item.name.trim().to_string(),
            quantity_on_hand: new_item.initial_quantity,
            reorder_threshold: new_item.reorder_threshold,
            unit_price_cents: new_item.unit_price_cents,
        };

        self.store.insert(&item)?;
        Ok(item)
    }

    /// Seed the fixed example items into an empty store.
    ///
    /// Returns how many items were seeded; a non-empty store is left
    /// untouched and yields 0.
    pub fn bootstrap(&mut self) -> Result<usize, CatalogError> {
        if !self.store.is_empty()? {
            return Ok(0);
        }

        let seeds = example_items();
        let count = seeds.len();
        for seed in seeds {
            self.ingest(seed)?;
        }
        Ok(count)
    }
}

fn validate_new_item(new_item: &NewItem) -> DomainResult<()> {
    if new_item.name.trim().is_empty() {
        return Err(DomainError::invalid_input("name cannot be empty"));
    }
    if new_item.initial_quantity < 0 {
        return Err(DomainError::invalid_input(format!(
            "initial quantity must be >= 0, got {}",
            new_item.initial_quantity
        )));
    }
    if new_item.reorder_threshold < 0 {
        return Err(DomainError::invalid_input(format!(
            "reorder threshold must be >= 0, got {}",
            new_item.reorder_threshold
        )));
    }
    if new_item.unit_price_cents < 0 {
        return Err(DomainError::invalid_input(format!(
            "unit price must be >= 0, got {} cents",
            new_item.unit_price_cents
        )));
    }
    Ok(())
}

/// The example items a fresh store is seeded with.
fn example_items() -> Vec<NewItem> {
    vec![
        NewItem {
            name: "Monitor 27".to_string(),
            initial_quantity: 15,
            reorder_threshold: 5,
            unit_price_cents: 25_000,
        },
        NewItem {
            name: "Teclado Mecanico".to_string(),
            initial_quantity: 3,
            reorder_threshold: 10,
            unit_price_cents: 8_000,
        },
        NewItem {
            name: "Mouse Optico".to_string(),
            initial_quantity: 50,
            reorder_threshold: 20,
            unit_price_cents: 1_500,
        },
        NewItem {
            name: "Webcam HD".to_string(),
            initial_quantity: 15,
            reorder_threshold: 8,
            unit_price_cents: 4_500,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::StatusLabel;
    use crate::store::MemoryStore;

    fn empty_catalog() -> Catalog<MemoryStore> {
        Catalog::new(MemoryStore::new())
    }

    fn seeded_catalog() -> Catalog<MemoryStore> {
        let mut catalog = empty_catalog();
        catalog.bootstrap().unwrap();
        catalog
    }

    fn new_item(name: &str, quantity: i64, threshold: i64) -> NewItem {
        NewItem {
            name: name.to_string(),
            initial_quantity: quantity,
            reorder_threshold: threshold,
            unit_price_cents: 1_000,
        }
    }

    fn id(raw: i64) -> ItemId {
        ItemId::new(raw).unwrap()
    }

    #[test]
    fn bootstrap_seeds_the_example_items_once() {
        let mut catalog = empty_catalog();
        assert_eq!(catalog.bootstrap().unwrap(), 4);
        assert_eq!(catalog.bootstrap().unwrap(), 0);

        let lines = catalog.list_all().unwrap();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].item.name, "Teclado Mecanico");
        assert_eq!(lines[1].item.quantity_on_hand, 3);
    }

    #[test]
    fn list_all_is_ordered_and_annotated() {
        let catalog = seeded_catalog();
        let lines = catalog.list_all().unwrap();

        let ids: Vec<i64> = lines.iter().map(|l| l.item.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        // Seeded levels: 15/5 -> Normal, 3/10 -> Critical, 50/20 -> Normal,
        // 15/8 -> Warning.
        let statuses: Vec<StatusLabel> = lines.iter().map(|l| l.status).collect();
        assert_eq!(
            statuses,
            vec![
                StatusLabel::Normal,
                StatusLabel::Critical,
                StatusLabel::Normal,
                StatusLabel::Warning,
            ]
        );
    }

    #[test]
    fn withdraw_decrements_and_returns_balance() {
        let mut catalog = seeded_catalog();
        let balance = catalog.withdraw(id(1), 5).unwrap();
        assert_eq!(balance, 10);

        let lines = catalog.list_all().unwrap();
        assert_eq!(lines[0].item.quantity_on_hand, 10);
    }

    #[test]
    fn withdraw_rejects_unknown_ids() {
        let mut catalog = seeded_catalog();
        let err = catalog.withdraw(id(99), 1).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Domain(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn withdraw_rejects_non_positive_quantities() {
        let mut catalog = seeded_catalog();
        for quantity in [0, -1, -100] {
            let err = catalog.withdraw(id(1), quantity).unwrap_err();
            assert!(matches!(
                err,
                CatalogError::Domain(DomainError::InvalidInput(_))
            ));
        }
        // State untouched.
        assert_eq!(catalog.list_all().unwrap()[0].item.quantity_on_hand, 15);
    }

    #[test]
    fn insufficient_stock_leaves_state_unchanged() {
        // Seeded item 2: "Teclado Mecanico", 3 on hand, threshold 10.
        let mut catalog = seeded_catalog();

        let err = catalog.withdraw(id(2), 5).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Domain(DomainError::InsufficientStock {
                available: 3,
                requested: 5,
            })
        ));
        assert_eq!(catalog.list_all().unwrap()[1].item.quantity_on_hand, 3);

        let balance = catalog.withdraw(id(2), 3).unwrap();
        assert_eq!(balance, 0);

        let line = &catalog.list_all().unwrap()[1];
        assert_eq!(line.item.quantity_on_hand, 0);
        assert_eq!(line.status, StatusLabel::Critical);
    }

    #[test]
    fn second_withdrawal_fails_after_stock_is_drained() {
        let mut catalog = seeded_catalog();

        // Item 4: 15 on hand. Only the first of two identical withdrawals
        // has sufficient stock.
        assert_eq!(catalog.withdraw(id(4), 10).unwrap(), 5);
        let err = catalog.withdraw(id(4), 10).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Domain(DomainError::InsufficientStock {
                available: 5,
                requested: 10,
            })
        ));
        assert_eq!(catalog.list_all().unwrap()[3].item.quantity_on_hand, 5);
    }

    #[test]
    fn ingest_assigns_max_plus_one_and_lists_exactly_once() {
        let mut catalog = seeded_catalog();

        let item = catalog
            .ingest(NewItem {
                name: "Webcam HD".to_string(),
                initial_quantity: 15,
                reorder_threshold: 8,
                unit_price_cents: 4_500,
            })
            .unwrap();
        assert_eq!(item.id.get(), 5);

        let lines = catalog.list_all().unwrap();
        let matching = lines.iter().filter(|l| l.item.id == item.id).count();
        assert_eq!(matching, 1);
    }

    #[test]
    fn ingest_ids_strictly_increase() {
        let mut catalog = empty_catalog();
        let mut previous = 0;
        for n in 0..10 {
            let item = catalog.ingest(new_item(&format!("item-{n}"), 1, 1)).unwrap();
            assert!(item.id.get() > previous);
            previous = item.id.get();
        }
    }

    #[test]
    fn ingest_trims_the_name() {
        let mut catalog = empty_catalog();
        let item = catalog.ingest(new_item("  Webcam HD  ", 1, 1)).unwrap();
        assert_eq!(item.name, "Webcam HD");
    }

    #[test]
    fn ingest_rejects_invalid_payloads() {
        let mut catalog = empty_catalog();

        assert!(catalog.ingest(new_item("   ", 1, 1)).is_err());
        assert!(catalog.ingest(new_item("x", -1, 1)).is_err());
        assert!(catalog.ingest(new_item("x", 1, -1)).is_err());
        assert!(catalog
            .ingest(NewItem {
                name: "x".to_string(),
                initial_quantity: 1,
                reorder_threshold: 1,
                unit_price_cents: -1,
            })
            .is_err());

        // Nothing was appended by the rejected payloads.
        assert!(catalog.list_all().unwrap().is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: no sequence of withdrawals drives any quantity
            /// below zero; failures leave the targeted item unchanged.
            #[test]
            fn quantities_never_go_negative(
                ops in prop::collection::vec((1i64..=6i64, -5i64..=60i64), 1..50)
            ) {
                let mut catalog = seeded_catalog();

                for (raw_id, quantity) in ops {
                    let target = id(raw_id);
                    let before: Option<i64> = catalog
                        .list_all()
                        .unwrap()
                        .iter()
                        .find(|l| l.item.id == target)
                        .map(|l| l.item.quantity_on_hand);

                    match catalog.withdraw(target, quantity) {
                        Ok(balance) => {
                            prop_assert!(balance >= 0);
                            prop_assert_eq!(before.unwrap() - quantity, balance);
                        }
                        Err(_) => {
                            let after: Option<i64> = catalog
                                .list_all()
                                .unwrap()
                                .iter()
                                .find(|l| l.item.id == target)
                                .map(|l| l.item.quantity_on_hand);
                            prop_assert_eq!(before, after);
                        }
                    }

                    for line in catalog.list_all().unwrap() {
                        prop_assert!(line.item.quantity_on_hand >= 0);
                    }
                }
            }

            /// Property: every ingested id is strictly greater than all
            /// previously assigned ids.
            #[test]
            fn ingested_ids_are_strictly_monotonic(
                names in prop::collection::vec("[A-Za-z][A-Za-z0-9 ]{0,24}", 1..20)
            ) {
                let mut catalog = empty_catalog();
                let mut last = 0;
                for name in names {
                    let item = catalog.ingest(NewItem {
                        name,
                        initial_quantity: 1,
                        reorder_threshold: 1,
                        unit_price_cents: 0,
                    }).unwrap();
                    prop_assert!(item.id.get() > last);
                    last = item.id.get();
                }
            }
        }
    }
}
