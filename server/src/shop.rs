use anyhow::anyhow;
use anyhow::Result as HttpResult;
use jiff::civil::Date;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::json;
use types::Result;
use types::records::{Category, Period, Role, User};

trait ReqwestExt {
    async fn try_send<T: DeserializeOwned>(self) -> HttpResult<T>;
    /// For endpoints where success is signalled by status alone; the
    /// response body, if any, is discarded.
    async fn try_send_unit(self) -> HttpResult<()>;
    async fn try_send_bytes(self) -> HttpResult<Vec<u8>>;
}

impl ReqwestExt for RequestBuilder {
    async fn try_send<T: DeserializeOwned>(self) -> HttpResult<T> {
        let response = check_status(self.send().await?).await?;
        let body = response.bytes().await?;

        match serde_json::from_slice(&body) {
            Ok(parsed) => Ok(parsed),
            Err(error) => {
                tracing::warn!(%error, "failed to parse backend response");
                Err(error.into())
            }
        }
    }

    async fn try_send_unit(self) -> HttpResult<()> {
        check_status(self.send().await?).await?;
        Ok(())
    }

    async fn try_send_bytes(self) -> HttpResult<Vec<u8>> {
        let response = check_status(self.send().await?).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// On an error status, surface the backend's `{message}` body when present,
/// falling back to the status line.
async fn check_status(response: Response) -> HttpResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await.unwrap_or_default();
    Err(anyhow!("{}", error_message(status, &body)))
}

fn error_message(status: StatusCode, body: &[u8]) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }

    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) => format!(
            "backend returned {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("unknown status")
        ),
    }
}

#[derive(Clone)]
pub struct ShopClient {
    client: Client,
    base_url: Url,
    token: Option<SecretString>,
}

impl ShopClient {
    pub fn new(base_url: Url, token: Option<SecretString>) -> Self {
        Self {
            client: Client::new(),
            base_url,
            token,
        }
    }

    fn request(&self, method: Method, path: &str) -> HttpResult<RequestBuilder> {
        let url = self.base_url.join(path)?;
        let mut builder = self.client.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token.expose_secret());
        }

        Ok(builder)
    }

    fn get(&self, path: impl AsRef<str>) -> HttpResult<RequestBuilder> {
        self.request(Method::GET, path.as_ref())
    }

    fn post(&self, path: impl AsRef<str>) -> HttpResult<RequestBuilder> {
        self.request(Method::POST, path.as_ref())
    }

    fn patch(&self, path: impl AsRef<str>) -> HttpResult<RequestBuilder> {
        self.request(Method::PATCH, path.as_ref())
    }

    fn delete(&self, path: impl AsRef<str>) -> HttpResult<RequestBuilder> {
        self.request(Method::DELETE, path.as_ref())
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.get("users")?.try_send().await?)
    }

    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        role: Role,
        category: Category,
    ) -> Result<()> {
        Ok(self.post("users/signup")?
            .json(&json!({
                "email": email,
                "password": password,
                "role": role,
                "category": category,
            }))
            .try_send_unit()
            .await?)
    }

    pub async fn update_user(
        &self,
        user_id: &str,
        email: &str,
        role: Role,
        category: Category,
    ) -> Result<()> {
        Ok(self.patch(format!("users/{user_id}"))?
            .json(&json!({
                "email": email,
                "role": role,
                "category": category,
            }))
            .try_send_unit()
            .await?)
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<()> {
        Ok(self.delete(format!("users/{user_id}"))?
            .try_send_unit()
            .await?)
    }

    pub async fn orders_total(&self, category: Category, period: Period) -> Result<f64> {
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct OrdersResponse {
            total_cost: f64,
        }

        let response: OrdersResponse = self
            .get(format!("{}/total-orders", category.slug()))?
            .query(&[("filter", period.as_str())])
            .try_send()
            .await?;

        Ok(response.total_cost)
    }

    pub async fn revenue(&self, category: Category, period: Period) -> Result<f64> {
        #[derive(serde::Deserialize)]
        struct RevenueResponse {
            revenue: f64,
        }

        let response: RevenueResponse = self
            .get(format!("{}/revenue", category.slug()))?
            .query(&[("period", period.as_str())])
            .try_send()
            .await?;

        Ok(response.revenue)
    }

    /// The backend renders the report document itself; we pass the bytes
    /// through untouched.
    pub async fn report_document(
        &self,
        category: Category,
        start: Date,
        end: Date,
    ) -> Result<Vec<u8>> {
        Ok(self.get(format!("{}/reports", category.slug()))?
            .query(&[
                ("startDate", start.to_string()),
                ("endDate", end.to_string()),
            ])
            .try_send_bytes()
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_backend_body() {
        let body = br#"{"message":"email already registered"}"#;
        assert_eq!(
            error_message(StatusCode::CONFLICT, body),
            "email already registered"
        );
    }

    #[test]
    fn error_message_falls_back_to_status_line() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, b"<html>nope</html>"),
            "backend returned 502 Bad Gateway"
        );
        assert_eq!(
            error_message(StatusCode::NOT_FOUND, b""),
            "backend returned 404 Not Found"
        );
    }
}
