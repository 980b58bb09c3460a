//! Core data types for the GrubMart admin console
//!
//! Wire-compatible with the GrubMart backend: field names and enum strings
//! follow the JSON the REST API produces and consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Food item identifier type (backend `_id`)
pub type FoodId = String;

/// Order identifier type
pub type OrderId = String;

/// Menu categories offered by the vendor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    /// Delight Meals
    DelightMeals,
    /// Fast Food
    FastFood,
    /// Snacks
    Snacks,
    /// GrubMart specials
    GrubMart,
}

impl Category {
    /// All categories, in menu display order
    pub const ALL: [Self; 4] = [
        Self::DelightMeals,
        Self::FastFood,
        Self::Snacks,
        Self::GrubMart,
    ];

    /// Wire representation expected by the backend
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DelightMeals => "DelightMeals",
            Self::FastFood => "FastFood",
            Self::Snacks => "Snacks",
            Self::GrubMart => "GrubMart",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DelightMeals => "Delight Meals",
            Self::FastFood => "Fast Food",
            Self::Snacks => "Snacks",
            Self::GrubMart => "GrubMart",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DelightMeals" => Ok(Self::DelightMeals),
            "FastFood" => Ok(Self::FastFood),
            "Snacks" => Ok(Self::Snacks),
            "GrubMart" => Ok(Self::GrubMart),
            other => Err(Error::validation(
                "category",
                format!("unknown category: {other}"),
            )),
        }
    }
}

/// Preparation time for a food item
///
/// The backend stores this as free text; the add form only ever produces
/// the two shapes modeled here ("15 min" or "10-20 min").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrepTime {
    /// Absolute preparation time in minutes
    Minutes(u32),
    /// Preparation time range in minutes
    Range {
        /// Lower bound
        min: u32,
        /// Upper bound
        max: u32,
    },
}

impl fmt::Display for PrepTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minutes(n) => write!(f, "{n} min"),
            Self::Range { min, max } => write!(f, "{min}-{max} min"),
        }
    }
}

impl FromStr for PrepTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            Error::validation(
                "prepTime",
                format!("expected \"<n> min\" or \"<min>-<max> min\", got {s:?}"),
            )
        };

        let value = s
            .trim()
            .strip_suffix("min")
            .ok_or_else(invalid)?
            .trim_end();

        if let Some((lo, hi)) = value.split_once('-') {
            let min: u32 = lo.trim().parse().map_err(|_| invalid())?;
            let max: u32 = hi.trim().parse().map_err(|_| invalid())?;
            if min >= max {
                return Err(Error::validation(
                    "prepTime",
                    format!("range must increase, got {min}-{max}"),
                ));
            }
            Ok(Self::Range { min, max })
        } else {
            let minutes: u32 = value.trim().parse().map_err(|_| invalid())?;
            Ok(Self::Minutes(minutes))
        }
    }
}

/// A menu entry owned by the backend; the console holds a refreshable copy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoodItem {
    /// Backend-assigned identifier
    #[serde(rename = "_id")]
    pub id: FoodId,

    /// Product name
    pub name: String,

    /// Short description (at most the configured word limit)
    pub description: String,

    /// Price in KSH, positive integer
    pub price: i64,

    /// Menu category
    pub category: Category,

    /// Optional preparation time display string
    #[serde(rename = "prepTime", default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,

    /// Server-stored image filename
    pub image: String,
}

/// Order lifecycle status
///
/// Transitions modeled by this layer: `pending → {accepted, rejected}` and
/// `accepted → on-the-way`. Everything else is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Awaiting vendor decision
    #[serde(rename = "pending")]
    Pending,
    /// Accepted, being prepared
    #[serde(rename = "accepted")]
    Accepted,
    /// Out for delivery (leaves the active set)
    #[serde(rename = "on-the-way")]
    OnTheWay,
    /// Delivered and closed
    #[serde(rename = "completed")]
    Completed,
    /// Rejected by the vendor
    #[serde(rename = "rejected")]
    Rejected,
}

impl OrderStatus {
    /// Whether the status admits no further transition in this layer
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::OnTheWay | Self::Completed | Self::Rejected)
    }

    /// Whether the order belongs in the active view
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Pending | Self::Accepted)
    }

    /// Whether a transition from `self` to `next` is allowed
    #[must_use]
    pub const fn can_transition(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Accepted | Self::Rejected) | (Self::Accepted, Self::OnTheWay)
        )
    }

    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::OnTheWay => "on-the-way",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Vendor actions available on an active order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderAction {
    /// Accept a pending order
    Accept,
    /// Reject a pending order
    Reject,
    /// Mark an accepted order as on the way
    Complete,
}

impl OrderAction {
    /// Status the action transitions the order into
    #[must_use]
    pub const fn target_status(self) -> OrderStatus {
        match self {
            Self::Accept => OrderStatus::Accepted,
            Self::Reject => OrderStatus::Rejected,
            Self::Complete => OrderStatus::OnTheWay,
        }
    }

    /// Button label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Accept => "Accept",
            Self::Reject => "Reject",
            Self::Complete => "Complete",
        }
    }
}

/// Customer contact and delivery details attached to an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderDetails {
    /// Delivery location
    pub location: String,

    /// Customer phone number
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,

    /// Payment method display string from the backend
    #[serde(rename = "paymentMethod")]
    pub payment_method: String,
}

/// A single line in an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    /// Food item identifier
    pub id: FoodId,

    /// Item name at time of purchase
    pub name: String,

    /// Item category
    pub category: Category,

    /// Image reference
    pub image: String,

    /// Unit price in KSH
    pub price: i64,

    /// Quantity ordered
    pub quantity: u32,
}

impl OrderItem {
    /// Per-line display total, `price × quantity`
    #[must_use]
    pub const fn line_total(&self) -> i64 {
        self.price * self.quantity as i64
    }
}

/// A customer order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    /// Backend-assigned order identifier
    #[serde(rename = "orderId")]
    pub order_id: OrderId,

    /// When the order was placed
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    /// Customer details
    #[serde(rename = "orderDetails")]
    pub order_details: OrderDetails,

    /// Ordered items
    pub items: Vec<OrderItem>,

    /// Order total in KSH, trusted from the backend
    pub total: i64,

    /// Current lifecycle status
    pub status: OrderStatus,
}

impl Order {
    /// Actions the current status makes available
    ///
    /// Only `pending` orders offer Accept/Reject and only `accepted` orders
    /// offer Complete; terminal statuses offer nothing.
    #[must_use]
    pub const fn available_actions(&self) -> &'static [OrderAction] {
        match self.status {
            OrderStatus::Pending => &[OrderAction::Accept, OrderAction::Reject],
            OrderStatus::Accepted => &[OrderAction::Complete],
            _ => &[],
        }
    }

    /// Sum of the per-line totals, for display-level comparison only
    #[must_use]
    pub fn items_total(&self) -> i64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}

/// Uniform backend response envelope: `{success, data?, message?}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    /// Whether the backend accepted the request
    pub success: bool,

    /// Response payload, present on success for read endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Failure (or informational) message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response carrying data
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Create a failed response with a message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Body of the order status transition request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusUpdate {
    /// Order being transitioned
    #[serde(rename = "orderId")]
    pub order_id: OrderId,

    /// New status
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_order(status: OrderStatus) -> Order {
        Order {
            order_id: "ORD-1001".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 15, 14, 25, 30).unwrap(),
            order_details: OrderDetails {
                location: "Westlands, Nairobi".to_string(),
                phone_number: "+254700000000".to_string(),
                payment_method: "M-Pesa".to_string(),
            },
            items: vec![
                OrderItem {
                    id: "f1".to_string(),
                    name: "Chicken Burger".to_string(),
                    category: Category::FastFood,
                    image: "burger.png".to_string(),
                    price: 450,
                    quantity: 2,
                },
                OrderItem {
                    id: "f2".to_string(),
                    name: "Fries".to_string(),
                    category: Category::Snacks,
                    image: "fries.png".to_string(),
                    price: 150,
                    quantity: 1,
                },
            ],
            total: 1050,
            status,
        }
    }

    #[test]
    fn test_category_wire_strings() {
        for category in Category::ALL {
            let serialized = serde_json::to_string(&category).unwrap();
            assert_eq!(serialized, format!("\"{}\"", category.as_str()));
            let deserialized: Category = serde_json::from_str(&serialized).unwrap();
            assert_eq!(deserialized, category);
        }
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("FastFood".parse::<Category>().unwrap(), Category::FastFood);
        assert!("Pizza".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::DelightMeals.label(), "Delight Meals");
        assert_eq!(format!("{}", Category::GrubMart), "GrubMart");
    }

    #[test]
    fn test_prep_time_display() {
        assert_eq!(PrepTime::Minutes(15).to_string(), "15 min");
        assert_eq!(PrepTime::Range { min: 10, max: 20 }.to_string(), "10-20 min");
    }

    #[test]
    fn test_prep_time_parse_absolute() {
        assert_eq!("15 min".parse::<PrepTime>().unwrap(), PrepTime::Minutes(15));
        assert_eq!("5min".parse::<PrepTime>().unwrap(), PrepTime::Minutes(5));
    }

    #[test]
    fn test_prep_time_parse_range() {
        assert_eq!(
            "10-20 min".parse::<PrepTime>().unwrap(),
            PrepTime::Range { min: 10, max: 20 }
        );
    }

    #[test]
    fn test_prep_time_parse_rejects_bad_input() {
        assert!("fast".parse::<PrepTime>().is_err());
        assert!("min".parse::<PrepTime>().is_err());
        assert!("20-10 min".parse::<PrepTime>().is_err());
        assert!("10-10 min".parse::<PrepTime>().is_err());
    }

    #[test]
    fn test_prep_time_roundtrip() {
        for value in [PrepTime::Minutes(25), PrepTime::Range { min: 15, max: 30 }] {
            assert_eq!(value.to_string().parse::<PrepTime>().unwrap(), value);
        }
    }

    #[test]
    fn test_food_item_wire_field_names() {
        let item = FoodItem {
            id: "65fd1a".to_string(),
            name: "Chicken Burger".to_string(),
            description: "Juicy grilled chicken burger".to_string(),
            price: 450,
            category: Category::FastFood,
            prep_time: Some("15 min".to_string()),
            image: "1710509130-burger.png".to_string(),
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["_id"], "65fd1a");
        assert_eq!(value["prepTime"], "15 min");
        assert_eq!(value["category"], "FastFood");

        let back: FoodItem = serde_json::from_value(value).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_food_item_without_prep_time() {
        let parsed: FoodItem = serde_json::from_value(json!({
            "_id": "a1",
            "name": "Samosa",
            "description": "Crispy beef samosa",
            "price": 80,
            "category": "Snacks",
            "image": "samosa.png"
        }))
        .unwrap();

        assert_eq!(parsed.prep_time, None);
        let value = serde_json::to_value(&parsed).unwrap();
        assert!(value.get("prepTime").is_none());
    }

    #[test]
    fn test_order_status_wire_strings() {
        let cases = [
            (OrderStatus::Pending, "pending"),
            (OrderStatus::Accepted, "accepted"),
            (OrderStatus::OnTheWay, "on-the-way"),
            (OrderStatus::Completed, "completed"),
            (OrderStatus::Rejected, "rejected"),
        ];

        for (status, wire) in cases {
            assert_eq!(serde_json::to_string(&status).unwrap(), format!("\"{wire}\""));
            assert_eq!(status.as_str(), wire);
        }
    }

    #[test]
    fn test_order_status_classification() {
        assert!(OrderStatus::Pending.is_active());
        assert!(OrderStatus::Accepted.is_active());
        assert!(!OrderStatus::OnTheWay.is_active());

        assert!(OrderStatus::OnTheWay.is_terminal());
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Rejected.is_terminal());
        assert!(!OrderStatus::Pending.is_terminal());
    }

    #[test]
    fn test_order_status_transitions() {
        assert!(OrderStatus::Pending.can_transition(OrderStatus::Accepted));
        assert!(OrderStatus::Pending.can_transition(OrderStatus::Rejected));
        assert!(OrderStatus::Accepted.can_transition(OrderStatus::OnTheWay));

        assert!(!OrderStatus::Pending.can_transition(OrderStatus::OnTheWay));
        assert!(!OrderStatus::Accepted.can_transition(OrderStatus::Rejected));
        assert!(!OrderStatus::Rejected.can_transition(OrderStatus::Pending));
        assert!(!OrderStatus::OnTheWay.can_transition(OrderStatus::Completed));
    }

    #[test]
    fn test_order_action_targets() {
        assert_eq!(OrderAction::Accept.target_status(), OrderStatus::Accepted);
        assert_eq!(OrderAction::Reject.target_status(), OrderStatus::Rejected);
        assert_eq!(OrderAction::Complete.target_status(), OrderStatus::OnTheWay);
    }

    #[test]
    fn test_available_actions_gated_by_status() {
        let pending = sample_order(OrderStatus::Pending);
        assert_eq!(
            pending.available_actions(),
            &[OrderAction::Accept, OrderAction::Reject]
        );

        let accepted = sample_order(OrderStatus::Accepted);
        assert_eq!(accepted.available_actions(), &[OrderAction::Complete]);

        for terminal in [
            OrderStatus::OnTheWay,
            OrderStatus::Completed,
            OrderStatus::Rejected,
        ] {
            assert!(sample_order(terminal).available_actions().is_empty());
        }
    }

    #[test]
    fn test_order_line_and_items_total() {
        let order = sample_order(OrderStatus::Pending);
        assert_eq!(order.items[0].line_total(), 900);
        assert_eq!(order.items[1].line_total(), 150);
        assert_eq!(order.items_total(), 1050);
        assert_eq!(order.items_total(), order.total);
    }

    #[test]
    fn test_order_wire_field_names() {
        let order = sample_order(OrderStatus::Accepted);
        let value = serde_json::to_value(&order).unwrap();

        assert_eq!(value["orderId"], "ORD-1001");
        assert!(value["createdAt"].is_string());
        assert_eq!(value["orderDetails"]["phoneNumber"], "+254700000000");
        assert_eq!(value["orderDetails"]["paymentMethod"], "M-Pesa");
        assert_eq!(value["status"], "accepted");

        let back: Order = serde_json::from_value(value).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn test_api_response_success() {
        let response = ApiResponse::success(vec![1, 2, 3]);
        assert!(response.success);
        assert_eq!(response.data, Some(vec![1, 2, 3]));
        assert!(response.message.is_none());
    }

    #[test]
    fn test_api_response_failure() {
        let response: ApiResponse<()> = ApiResponse::failure("Item not found");
        assert!(!response.success);
        assert!(response.data.is_none());
        assert_eq!(response.message.as_deref(), Some("Item not found"));
    }

    #[test]
    fn test_api_response_deserializes_without_data() {
        let response: ApiResponse<Vec<FoodItem>> =
            serde_json::from_value(json!({"success": false, "message": "boom"})).unwrap();
        assert!(!response.success);
        assert!(response.data.is_none());
    }

    #[test]
    fn test_status_update_wire_shape() {
        let update = StatusUpdate {
            order_id: "ORD-7".to_string(),
            status: OrderStatus::OnTheWay,
        };

        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, json!({"orderId": "ORD-7", "status": "on-the-way"}));
    }
}
