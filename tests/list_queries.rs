use axum::extract::Query;
use axum::http::Uri;
use axum_studio_api::entity::OrderStatus;
use axum_studio_api::routes::params::{OrderListQuery, Pagination};

fn uri(s: &str) -> Uri {
    s.parse().expect("valid test uri")
}

#[test]
fn order_list_query_parses_pagination_and_status() {
    let query = Query::<OrderListQuery>::try_from_uri(&uri(
        "/api/admin/orders?page=2&per_page=10&status=pending",
    ))
    .expect("query should deserialize");

    assert_eq!(query.page, Some(2));
    assert_eq!(query.per_page, Some(10));
    assert!(matches!(query.status, Some(OrderStatus::Pending)));

    let (page, per_page, offset) = query.pagination().normalize();
    assert_eq!((page, per_page, offset), (2, 10, 10));
}

#[test]
fn order_list_query_fields_are_all_optional() {
    let query = Query::<OrderListQuery>::try_from_uri(&uri("/api/admin/orders"))
        .expect("empty query should deserialize");

    assert_eq!(query.page, None);
    assert!(query.status.is_none());
    assert_eq!(query.pagination().normalize(), (1, 20, 0));
}

#[test]
fn pagination_normalizes_out_of_range_values() {
    let query =
        Query::<Pagination>::try_from_uri(&uri("/api/customers?page=0&per_page=500"))
            .expect("query should deserialize");

    let (page, per_page, offset) = query.normalize();
    assert_eq!(page, 1);
    assert_eq!(per_page, 100);
    assert_eq!(offset, 0);
}
