use axum_studio_api::entity::orders::Model as OrderModel;
use axum_studio_api::entity::{OrderStatus, PaymentStatus};
use axum_studio_api::services::customer_service::payment_summary;
use chrono::Utc;
use rust_decimal::Decimal;

fn order(
    advance: Option<i64>,
    advance_status: PaymentStatus,
    balance: Option<i64>,
    balance_status: PaymentStatus,
) -> OrderModel {
    let now = Utc::now().into();
    OrderModel {
        id: 1,
        customer_id: 1,
        order_date: now,
        delivery_date: None,
        total_price: None,
        advance_payment: advance.map(|a| Decimal::new(a, 2)),
        advance_payment_status: advance_status,
        balance_payment: balance.map(|b| Decimal::new(b, 2)),
        balance_payment_status: balance_status,
        order_status: OrderStatus::Pending,
        created_at: now,
    }
}

#[test]
fn empty_orders_give_zero_summary() {
    let summary = payment_summary(&[]);
    assert_eq!(summary.total_paid, Decimal::ZERO);
    assert_eq!(summary.total_pending, Decimal::ZERO);
    assert_eq!(summary.total_orders, 0);
    assert_eq!(summary.paid_orders, 0);
    assert_eq!(summary.pending_orders, 0);
}

#[test]
fn verified_amounts_count_as_paid() {
    let orders = vec![order(
        Some(5000),
        PaymentStatus::Verified,
        Some(10000),
        PaymentStatus::Verified,
    )];
    let summary = payment_summary(&orders);

    assert_eq!(summary.total_paid, Decimal::new(15000, 2));
    assert_eq!(summary.total_pending, Decimal::ZERO);
    assert_eq!(summary.total_advance, Decimal::new(5000, 2));
    assert_eq!(summary.total_balance, Decimal::new(10000, 2));
    assert_eq!(summary.paid_orders, 1);
    assert_eq!(summary.pending_orders, 0);
}

#[test]
fn unverified_amounts_stay_pending() {
    let orders = vec![order(
        Some(5000),
        PaymentStatus::Verified,
        Some(10000),
        PaymentStatus::Pending,
    )];
    let summary = payment_summary(&orders);

    assert_eq!(summary.total_paid, Decimal::new(5000, 2));
    assert_eq!(summary.total_pending, Decimal::new(10000, 2));
    // One unverified half keeps the whole order out of the paid count.
    assert_eq!(summary.paid_orders, 0);
    assert_eq!(summary.pending_orders, 1);
}

#[test]
fn missing_amounts_are_skipped_but_order_still_counted() {
    let orders = vec![order(None, PaymentStatus::Unpaid, None, PaymentStatus::Unpaid)];
    let summary = payment_summary(&orders);

    assert_eq!(summary.total_advance, Decimal::ZERO);
    assert_eq!(summary.total_balance, Decimal::ZERO);
    assert_eq!(summary.total_orders, 1);
    assert_eq!(summary.pending_orders, 1);
}

#[test]
fn totals_are_conserved_across_buckets() {
    let orders = vec![
        order(
            Some(2500),
            PaymentStatus::Verified,
            Some(7500),
            PaymentStatus::Failed,
        ),
        order(
            Some(1000),
            PaymentStatus::Pending,
            Some(4000),
            PaymentStatus::Verified,
        ),
        order(
            Some(3000),
            PaymentStatus::Verified,
            Some(3000),
            PaymentStatus::Verified,
        ),
    ];
    let summary = payment_summary(&orders);

    assert_eq!(
        summary.total_paid + summary.total_pending,
        summary.total_advance + summary.total_balance
    );
    assert_eq!(summary.total_orders, 3);
    assert_eq!(summary.paid_orders + summary.pending_orders, 3);
    assert_eq!(summary.paid_orders, 1);
}
