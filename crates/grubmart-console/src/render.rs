//! Plain-text rendering of the views

use crate::history::CompletedOrdersView;
use grubmart_core::types::{FoodItem, Order};
use grubmart_core::utils::format_thousands;
use std::fmt::Write as _;

/// Format a price with the currency prefix, e.g. `KSH 1,050`
#[must_use]
pub fn price(amount: i64, currency: &str) -> String {
    format!("{currency} {}", format_thousands(amount))
}

/// Render the menu as a table
#[must_use]
pub fn menu_table(items: &[FoodItem], currency: &str) -> String {
    if items.is_empty() {
        return "No products in the menu\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:<24} {:<14} {:>12}  {:<10}", "Name", "Category", "Price", "Prep");
    for item in items {
        let _ = writeln!(
            out,
            "{:<24} {:<14} {:>12}  {:<10}",
            item.name,
            item.category.label(),
            price(item.price, currency),
            item.prep_time.as_deref().unwrap_or("-"),
        );
    }
    let _ = writeln!(out, "{} products", items.len());
    out
}

/// Render one active order as a card, including the actions its status
/// currently offers
#[must_use]
pub fn order_card(order: &Order, currency: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Order {} [{}] {}",
        order.order_id,
        order.status,
        order.created_at.format("%Y-%m-%d %H:%M"),
    );
    for item in &order.items {
        let _ = writeln!(
            out,
            "  {} x {} ({})",
            item.quantity,
            item.name,
            price(item.line_total(), currency),
        );
    }
    let _ = writeln!(
        out,
        "  {} | {} | {}",
        order.order_details.location,
        order.order_details.phone_number,
        order.order_details.payment_method,
    );
    let _ = writeln!(out, "  Total: {}", price(order.total, currency));

    let actions: Vec<&str> = order
        .available_actions()
        .iter()
        .map(|action| action.label())
        .collect();
    if !actions.is_empty() {
        let _ = writeln!(out, "  Actions: {}", actions.join(", "));
    }
    out
}

/// Render one closed order with its outcome badge
#[must_use]
pub fn history_line(order: &Order, currency: &str) -> String {
    format!(
        "{} {} {} {} - {}\n",
        order.created_at.format("%Y-%m-%d %H:%M"),
        order.order_id,
        price(order.total, currency),
        order.order_details.location,
        CompletedOrdersView::badge(order.status),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use grubmart_core::types::{Category, OrderDetails, OrderItem, OrderStatus};
    use pretty_assertions::assert_eq;

    fn sample_order(status: OrderStatus) -> Order {
        Order {
            order_id: "ORD-1001".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 15, 14, 25, 30).unwrap(),
            order_details: OrderDetails {
                location: "Westlands, Nairobi".to_string(),
                phone_number: "+254700000000".to_string(),
                payment_method: "M-Pesa".to_string(),
            },
            items: vec![OrderItem {
                id: "f1".to_string(),
                name: "Chicken Burger".to_string(),
                category: Category::FastFood,
                image: "burger.png".to_string(),
                price: 450,
                quantity: 2,
            }],
            total: 900,
            status,
        }
    }

    #[test]
    fn test_price_formatting() {
        assert_eq!(price(450, "KSH"), "KSH 450");
        assert_eq!(price(1050, "KSH"), "KSH 1,050");
    }

    #[test]
    fn test_menu_table_empty() {
        assert_eq!(menu_table(&[], "KSH"), "No products in the menu\n");
    }

    #[test]
    fn test_menu_table_lists_items() {
        let items = vec![FoodItem {
            id: "a".to_string(),
            name: "Fries".to_string(),
            description: "Golden crispy fries".to_string(),
            price: 150,
            category: Category::Snacks,
            prep_time: Some("10-20 min".to_string()),
            image: "fries.png".to_string(),
        }];

        let table = menu_table(&items, "KSH");
        assert!(table.contains("Fries"));
        assert!(table.contains("Snacks"));
        assert!(table.contains("KSH 150"));
        assert!(table.contains("10-20 min"));
        assert!(table.contains("1 products"));
    }

    #[test]
    fn test_order_card_pending_shows_accept_reject() {
        let card = order_card(&sample_order(OrderStatus::Pending), "KSH");
        assert!(card.contains("Order ORD-1001 [pending]"));
        assert!(card.contains("2 x Chicken Burger (KSH 900)"));
        assert!(card.contains("Total: KSH 900"));
        assert!(card.contains("Actions: Accept, Reject"));
    }

    #[test]
    fn test_order_card_accepted_shows_complete_only() {
        let card = order_card(&sample_order(OrderStatus::Accepted), "KSH");
        assert!(card.contains("Actions: Complete"));
        assert!(!card.contains("Accept,"));
    }

    #[test]
    fn test_history_line_badges() {
        let line = history_line(&sample_order(OrderStatus::Completed), "KSH");
        assert!(line.contains("Order Completed"));

        let line = history_line(&sample_order(OrderStatus::Rejected), "KSH");
        assert!(line.contains("Order Rejected"));
    }
}
