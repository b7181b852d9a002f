use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header},
    response::IntoResponse,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use roster_application::{ProvisionAccountUseCase, ProvisionRequest};
use roster_core::{Email, IdentityError, IdentityProvider, Password, ProfileStore};

use super::error::ApiError;
use crate::http::AppState;

/// Callable request body. Every field is optional at the wire level so the
/// missing-field set can be reported as one validation error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<Secret<String>>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub success: bool,
    pub message: String,
}

/// Callable account provisioner: authenticate the caller, validate the
/// request, then create account, write profile, set the role claim.
#[tracing::instrument(name = "CreateUser", skip_all)]
pub async fn create_user<I, P>(
    State(state): State<AppState<I, P>>,
    headers: HeaderMap,
    Json(request): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    I: IdentityProvider + 'static,
    P: ProfileStore + 'static,
{
    // Caller identity comes first; the body is not inspected until the
    // bearer token has been verified.
    let token = bearer_token(&headers).ok_or_else(|| {
        ApiError::Unauthenticated("Authentication required to call this operation".to_string())
    })?;

    state
        .identity
        .verify_id_token(&token)
        .await
        .map_err(|e| match e {
            IdentityError::InvalidToken => {
                ApiError::Unauthenticated("Authentication required to call this operation".to_string())
            }
            other => ApiError::Internal(other.to_string()),
        })?;

    let request = validate(request)?;

    let use_case = ProvisionAccountUseCase::new(state.identity.clone(), state.profiles.clone());
    use_case.execute(request).await?;

    Ok(Json(CreateUserResponse {
        success: true,
        message: "User created successfully.".to_string(),
    }))
}

fn bearer_token(headers: &HeaderMap) -> Option<Secret<String>> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(Secret::from(token.to_string()))
}

/// Local validation; nothing here makes a remote call.
fn validate(request: CreateUserRequest) -> Result<ProvisionRequest, ApiError> {
    fn required(
        value: Option<String>,
        field: &'static str,
        missing: &mut Vec<&'static str>,
    ) -> String {
        match value {
            Some(v) if !v.is_empty() => v,
            _ => {
                missing.push(field);
                String::new()
            }
        }
    }

    let mut missing = Vec::new();
    let email = required(request.email, "email", &mut missing);
    let password = match request.password {
        Some(p) if !p.expose_secret().is_empty() => p,
        _ => {
            missing.push("password");
            Secret::from(String::new())
        }
    };
    let name = required(request.name, "name", &mut missing);
    let department = required(request.department, "department", &mut missing);
    let role = required(request.role, "role", &mut missing);

    if !missing.is_empty() {
        return Err(ApiError::InvalidArgument(format!(
            "missing required fields: {}",
            missing.join(", ")
        )));
    }

    let password = Password::try_from(password)?;
    let email = Email::try_from(Secret::from(email))?;

    Ok(ProvisionRequest {
        name,
        email,
        password,
        phone_number: request.phone_number.filter(|p| !p.is_empty()),
        department,
        role,
    })
}
