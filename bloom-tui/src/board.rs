//! Order List Model
//!
//! Owns the in-memory order collection. Mutations are synchronous and never
//! perform I/O; persistence is the controller's job. Display order is always
//! recomputed from `queue_number` (stable, so insertion order breaks ties).

use shared::Order;

/// In-memory order collection with derived aggregates
#[derive(Debug, Default)]
pub struct OrderBoard {
    orders: Vec<Order>,
}

impl OrderBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection (used after hydration)
    pub fn replace_all(&mut self, orders: Vec<Order>) {
        self.orders = orders;
    }

    /// Optimistic insert; the caller supplies a fresh unique id
    pub fn insert(&mut self, order: Order) {
        debug_assert!(
            !self.orders.iter().any(|o| o.id == order.id),
            "duplicate order id"
        );
        self.orders.push(order);
    }

    /// Flip the paid flag; returns false (no-op) if the id is absent
    pub fn set_paid(&mut self, id: &str, is_paid: bool) -> bool {
        match self.orders.iter_mut().find(|o| o.id == id) {
            Some(order) => {
                order.is_paid = is_paid;
                true
            }
            None => {
                tracing::warn!(id, "set_paid on unknown order");
                false
            }
        }
    }

    /// Remove an order; returns false (no-op) if the id is absent
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.orders.len();
        self.orders.retain(|o| o.id != id);
        before != self.orders.len()
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Read-only snapshot sorted by queue number ascending
    ///
    /// Stable: equal queue numbers keep their relative insertion order.
    /// The stored collection is never reordered.
    pub fn sorted_by_queue(&self) -> Vec<&Order> {
        let mut snapshot: Vec<&Order> = self.orders.iter().collect();
        snapshot.sort_by_key(|o| o.queue_number);
        snapshot
    }

    /// Sum of all prices; a non-finite price contributes 0
    pub fn total_revenue(&self) -> f64 {
        self.orders
            .iter()
            .map(|o| if o.price.is_finite() { o.price } else { 0.0 })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, queue: i64, price: f64) -> Order {
        Order {
            id: id.to_string(),
            customer_name: format!("customer-{}", id),
            queue_number: queue,
            flower_count: 1,
            order_date: String::new(),
            price,
            notes: None,
            flower_colors: String::new(),
            bouquet_colors: String::new(),
            is_paid: false,
        }
    }

    #[test]
    fn test_insert_and_count() {
        let mut board = OrderBoard::new();
        assert!(board.is_empty());
        board.insert(order("a", 1, 10.0));
        board.insert(order("b", 2, 20.0));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_sorted_by_queue_is_stable() {
        let mut board = OrderBoard::new();
        board.insert(order("first", 2, 0.0));
        board.insert(order("second", 1, 0.0));
        board.insert(order("third", 2, 0.0));

        let ids: Vec<&str> = board.sorted_by_queue().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["second", "first", "third"]);

        // Snapshot never reorders the stored collection
        let ids_again: Vec<&str> =
            board.sorted_by_queue().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ids_again);
    }

    #[test]
    fn test_set_paid_and_absent_noop() {
        let mut board = OrderBoard::new();
        board.insert(order("a", 1, 10.0));
        assert!(board.set_paid("a", true));
        assert!(board.get("a").unwrap().is_paid);
        assert!(!board.set_paid("ghost", true));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_remove_and_absent_noop() {
        let mut board = OrderBoard::new();
        board.insert(order("a", 1, 10.0));
        assert!(!board.remove("ghost"));
        assert_eq!(board.len(), 1);
        assert!(board.remove("a"));
        assert!(board.is_empty());
    }

    #[test]
    fn test_total_revenue_ignores_non_finite() {
        let mut board = OrderBoard::new();
        board.insert(order("a", 1, 100.0));
        board.insert(order("b", 2, 20.5));
        board.insert(order("c", 3, f64::NAN));
        assert_eq!(board.total_revenue(), 120.5);
    }

    #[test]
    fn test_replace_all() {
        let mut board = OrderBoard::new();
        board.insert(order("a", 1, 10.0));
        board.replace_all(vec![order("x", 1, 1.0), order("y", 2, 2.0)]);
        assert_eq!(board.len(), 2);
        assert!(board.get("a").is_none());
    }
}
