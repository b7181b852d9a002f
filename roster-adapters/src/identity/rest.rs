use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use roster_core::{AccountId, CallerContext, IdentityError, IdentityProvider, NewAccount};

const API_KEY_HEADER: &str = "X-Identity-Api-Key";

/// Identity service client.
///
/// Provider wire codes are mapped to [`IdentityError`] here and nowhere
/// else; callers only ever see the closed enum.
pub struct RestIdentityProvider {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

impl RestIdentityProvider {
    pub fn new(base_url: String, api_key: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, IdentityError> {
        Url::parse(&self.base_url)
            .and_then(|base| base.join(path))
            .map_err(|e| IdentityError::Unexpected(e.to_string()))
    }
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    #[tracing::instrument(name = "Identity::create_account", skip_all)]
    async fn create_account(&self, account: NewAccount) -> Result<AccountId, IdentityError> {
        let url = self.endpoint("/accounts")?;

        let body = CreateAccountRequest {
            email: account.email.as_ref().expose_secret(),
            password: account.password.as_ref().expose_secret(),
            display_name: &account.display_name,
            phone_number: account.phone_number.as_deref(),
        };

        let response = self
            .http_client
            .post(url)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| IdentityError::Unexpected(e.to_string()))?;

        if !response.status().is_success() {
            return Err(decode_error(response).await);
        }

        let created: AccountRef = response
            .json()
            .await
            .map_err(|e| IdentityError::Unexpected(e.to_string()))?;

        Ok(AccountId::new(created.account_id))
    }

    #[tracing::instrument(name = "Identity::set_role_claim", skip(self))]
    async fn set_role_claim(&self, id: &AccountId, role: &str) -> Result<(), IdentityError> {
        let url = self.endpoint(&format!("/accounts/{id}/claims"))?;

        let response = self
            .http_client
            .put(url)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .json(&ClaimsRequest { role })
            .send()
            .await
            .map_err(|e| IdentityError::Unexpected(e.to_string()))?;

        if !response.status().is_success() {
            return Err(decode_error(response).await);
        }

        Ok(())
    }

    #[tracing::instrument(name = "Identity::delete_account", skip(self))]
    async fn delete_account(&self, id: &AccountId) -> Result<(), IdentityError> {
        let url = self.endpoint(&format!("/accounts/{id}"))?;

        let response = self
            .http_client
            .delete(url)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| IdentityError::Unexpected(e.to_string()))?;

        if !response.status().is_success() {
            return Err(decode_error(response).await);
        }

        Ok(())
    }

    #[tracing::instrument(name = "Identity::verify_id_token", skip_all)]
    async fn verify_id_token(
        &self,
        token: &Secret<String>,
    ) -> Result<CallerContext, IdentityError> {
        let url = self.endpoint("/accounts/lookup")?;

        let response = self
            .http_client
            .get(url)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .bearer_auth(token.expose_secret())
            .send()
            .await
            .map_err(|e| IdentityError::Unexpected(e.to_string()))?;

        if !response.status().is_success() {
            return Err(decode_error(response).await);
        }

        let caller: AccountRef = response
            .json()
            .await
            .map_err(|e| IdentityError::Unexpected(e.to_string()))?;

        Ok(CallerContext {
            account_id: AccountId::new(caller.account_id),
        })
    }
}

async fn decode_error(response: Response) -> IdentityError {
    let status = response.status();
    match response.json::<WireError>().await {
        Ok(err) => match err.code.as_str() {
            "email-already-in-use" => IdentityError::EmailAlreadyInUse,
            "weak-password" => IdentityError::WeakPassword,
            "account-not-found" => IdentityError::AccountNotFound,
            "invalid-token" => IdentityError::InvalidToken,
            _ => IdentityError::Unexpected(err.message),
        },
        Err(_) => IdentityError::Unexpected(format!("identity service returned {status}")),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateAccountRequest<'a> {
    email: &'a str,
    password: &'a str,
    display_name: &'a str,
    phone_number: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ClaimsRequest<'a> {
    role: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountRef {
    account_id: String,
}

#[derive(Debug, Deserialize)]
struct WireError {
    code: String,
    message: String,
}
