use dioxus::prelude::*;
use jiff::civil::Date;
use types::records::{Category, Period, Role, User};

#[post("/api/users")]
pub async fn list_users() -> ServerFnResult<Vec<User>> {
    Ok(server::SHOP_CLIENT.list_users().await?)
}

#[post("/api/users/create")]
pub async fn create_user(
    email: String,
    password: String,
    role: Role,
    category: Category,
) -> ServerFnResult<()> {
    server::SHOP_CLIENT
        .signup(&email, &password, role, category)
        .await?;
    Ok(())
}

#[post("/api/users/update")]
pub async fn update_user(
    user_id: String,
    email: String,
    role: Role,
    category: Category,
) -> ServerFnResult<()> {
    server::SHOP_CLIENT
        .update_user(&user_id, &email, role, category)
        .await?;
    Ok(())
}

#[post("/api/users/delete")]
pub async fn delete_user(user_id: String) -> ServerFnResult<()> {
    server::SHOP_CLIENT.delete_user(&user_id).await?;
    Ok(())
}

#[post("/api/orders/total")]
pub async fn orders_total(category: Category, period: Period) -> ServerFnResult<f64> {
    Ok(server::SHOP_CLIENT.orders_total(category, period).await?)
}

#[post("/api/revenue")]
pub async fn revenue(category: Category, period: Period) -> ServerFnResult<f64> {
    Ok(server::SHOP_CLIENT.revenue(category, period).await?)
}

/// Fetch the backend-rendered report document for a category and date
/// range. Returned as raw bytes; the client hands them to the browser.
#[post("/api/reports/document")]
pub async fn report_document(
    category: Category,
    start: Date,
    end: Date,
) -> ServerFnResult<Vec<u8>> {
    Ok(server::SHOP_CLIENT
        .report_document(category, start, end)
        .await?)
}
