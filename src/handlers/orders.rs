use std::collections::BTreeMap;
use std::str::FromStr;

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::order::{NewOrderItem, OrderReport, OrderStatus, OrderSummary, OrderWithItems};
use crate::errors::AppError;
use crate::AppOrderService;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItemRequest {
    pub product_name: String,
    pub product_sku: String,
    pub quantity: i32,
    /// Decimal price as a string to avoid floating-point issues, e.g. "25.99"
    pub unit_price: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_id: i32,
    pub items: Vec<CreateOrderItemRequest>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    /// Status wire value: Pending=0, Confirmed=1, Processing=2, Shipped=3,
    /// Delivered=4, Cancelled=5.
    pub status: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub id: i32,
    pub product_name: String,
    pub product_sku: String,
    pub quantity: i32,
    pub unit_price: String,
    pub total_price: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i32,
    pub order_number: String,
    pub customer_id: i32,
    pub customer_name: String,
    pub status: i32,
    pub total_amount: String,
    pub created_at: String,
    pub items: Vec<OrderItemResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummaryResponse {
    pub id: i32,
    pub order_number: String,
    pub customer_name: String,
    pub status: i32,
    pub total_amount: String,
    pub item_count: i64,
    pub created_at: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOrderSummary {
    pub customer_id: i32,
    pub customer_name: String,
    pub order_count: i64,
    pub total_spent: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderReportResponse {
    pub total_orders: i64,
    pub total_revenue: String,
    pub orders_by_status: BTreeMap<String, i64>,
    pub top_customers: Vec<CustomerOrderSummary>,
}

// ── Pagination ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListOrdersParams {
    /// Page number (1-based). Defaults to 1.
    #[serde(default = "default_page")]
    pub page: i64,
    /// Number of items per page. Defaults to 20, maximum 100.
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    20
}

// ── DTO mapping ──────────────────────────────────────────────────────────────

fn order_to_response(order: OrderWithItems) -> OrderResponse {
    let OrderWithItems {
        order,
        customer_name,
        items,
    } = order;
    OrderResponse {
        id: order.id,
        order_number: order.order_number,
        customer_id: order.customer_id,
        customer_name,
        status: order.status.into(),
        total_amount: order.total_amount.to_string(),
        created_at: order.created_at.to_rfc3339(),
        items: items
            .into_iter()
            .map(|i| OrderItemResponse {
                id: i.id,
                total_price: i.line_total().to_string(),
                product_name: i.product_name,
                product_sku: i.product_sku,
                quantity: i.quantity,
                unit_price: i.unit_price.to_string(),
            })
            .collect(),
    }
}

fn summary_to_response(summary: OrderSummary) -> OrderSummaryResponse {
    OrderSummaryResponse {
        id: summary.id,
        order_number: summary.order_number,
        customer_name: summary.customer_name,
        status: summary.status.into(),
        total_amount: summary.total_amount.to_string(),
        item_count: summary.item_count,
        created_at: summary.created_at.to_rfc3339(),
    }
}

fn report_to_response(report: OrderReport) -> OrderReportResponse {
    OrderReportResponse {
        total_orders: report.total_orders,
        total_revenue: report.total_revenue.to_string(),
        orders_by_status: report
            .orders_by_status
            .into_iter()
            .map(|s| (s.status.as_str().to_string(), s.count))
            .collect(),
        top_customers: report
            .top_customers
            .into_iter()
            .map(|c| CustomerOrderSummary {
                customer_id: c.customer_id,
                customer_name: c.customer_name,
                order_count: c.order_count,
                total_spent: c.total_spent.to_string(),
            })
            .collect(),
    }
}

fn parse_items(items: Vec<CreateOrderItemRequest>) -> Result<Vec<NewOrderItem>, AppError> {
    items
        .into_iter()
        .map(|i| {
            let unit_price = BigDecimal::from_str(&i.unit_price).map_err(|e| {
                AppError::BadRequest(format!("Invalid unitPrice '{}': {}", i.unit_price, e))
            })?;
            Ok(NewOrderItem {
                product_name: i.product_name,
                product_sku: i.product_sku,
                quantity: i.quantity,
                unit_price,
            })
        })
        .collect()
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders
///
/// Creates a new order together with its items. The order number and total
/// are assigned server-side; the order, its items, and the number sequence
/// update are committed in a single transaction.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created successfully", body = OrderResponse),
        (status = 400, description = "Unknown customer or invalid items"),
        (status = 409, description = "Order number conflict"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<AppOrderService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let CreateOrderRequest { customer_id, items } = body.into_inner();
    let items = parse_items(items)?;

    let created = web::block(move || service.create_order(customer_id, items))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let response = order_to_response(created);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/orders/{}", response.id)))
        .json(response))
}

/// GET /orders/{id}
///
/// Returns the order together with its items and the owning customer's name.
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<AppOrderService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    let result = web::block(move || service.get_order(order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    match result {
        Some(order) => Ok(HttpResponse::Ok().json(order_to_response(order))),
        None => Err(AppError::NotFound),
    }
}

/// GET /orders
///
/// Returns a paginated list of order summaries, newest first.
#[utoipa::path(
    get,
    path = "/orders",
    params(
        ("page" = Option<i64>, Query, description = "Page number (1-based, default 1)"),
        ("pageSize" = Option<i64>, Query, description = "Items per page (default 20, max 100)"),
    ),
    responses(
        (status = 200, description = "List of order summaries", body = [OrderSummaryResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn list_orders(
    service: web::Data<AppOrderService>,
    query: web::Query<ListOrdersParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let page = params.page.max(1);
    let page_size = params.page_size.clamp(1, 100);

    let summaries = web::block(move || service.list_orders(page, page_size))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let response: Vec<OrderSummaryResponse> =
        summaries.into_iter().map(summary_to_response).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// PATCH /orders/{id}/status
///
/// Sets the order's status. Any status may follow any other.
#[utoipa::path(
    patch,
    path = "/orders/{id}/status",
    params(
        ("id" = i32, Path, description = "Order id"),
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 204, description = "Status updated"),
        (status = 400, description = "Unknown status value"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn update_order_status(
    service: web::Data<AppOrderService>,
    path: web::Path<i32>,
    body: web::Json<UpdateOrderStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let status = OrderStatus::try_from(body.status).map_err(AppError::BadRequest)?;

    web::block(move || service.update_status(order_id, status))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /orders/{id}
///
/// Deletes the order and all of its items.
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order id"),
    ),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn delete_order(
    service: web::Data<AppOrderService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    web::block(move || service.delete_order(order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /orders/reports
///
/// Aggregate report: order count, revenue, per-status counts, and the top 5
/// customers by total spend.
#[utoipa::path(
    get,
    path = "/orders/reports",
    responses(
        (status = 200, description = "Aggregate order report", body = OrderReportResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_report(service: web::Data<AppOrderService>) -> Result<HttpResponse, AppError> {
    let report = web::block(move || service.report())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(report_to_response(report)))
}
