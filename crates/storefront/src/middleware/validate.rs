use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::{Validate, ValidationError, ValidationErrors};

/// JSON body extractor that runs `validator` rules before the handler.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(body) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let payload = json!({
                    "status": "error",
                    "message": rejection.body_text(),
                });
                (rejection.status(), axum::Json(payload))
            })?;

        body.validate().map_err(|errors| {
            let payload = json!({
                "status": "error",
                "message": format_validation_errors(&errors),
                "details": field_messages(&errors),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload))
        })?;

        Ok(Self(body))
    }
}

fn describe(field: &str, error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| match error.code.as_ref() {
            "email" => "Invalid email format".to_string(),
            "length" => "Invalid length".to_string(),
            "range" => "Value out of range".to_string(),
            _ => format!("Invalid {field}"),
        })
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors
                .iter()
                .map(move |e| format!("{field}: {}", describe(&field, e)))
        })
        .collect();

    if messages.is_empty() {
        return "Validation failed".to_string();
    }

    messages.sort();
    messages.join("; ")
}

fn field_messages(errors: &ValidationErrors) -> Value {
    let mut map = serde_json::Map::new();

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors.iter().map(|e| describe(&field, e)).collect();
        map.insert(field.to_string(), json!(messages));
    }

    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::requests::CreateProductRequest;

    #[test]
    fn messages_name_each_failing_field() {
        let req = CreateProductRequest {
            name: String::new(),
            description: String::new(),
            category_id: 1,
            price: -5,
            quantity: 0,
        };

        let errors = req.validate().unwrap_err();
        let message = format_validation_errors(&errors);

        assert!(message.contains("name: "));
        assert!(message.contains("price: "));
        assert!(!message.contains("quantity"));
    }
}
