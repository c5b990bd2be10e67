use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::client::{NewClient, UpdateClient};
use crate::domain::types::{ChildrenCount, ClientName, Cpf, Income, is_valid_cpf};
use crate::forms::FormError;

fn validate_cpf(cpf: &str) -> Result<(), ValidationError> {
    if is_valid_cpf(cpf.trim()) {
        Ok(())
    } else {
        Err(ValidationError::new("cpf"))
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// JSON body accepted when inserting or replacing a client.
pub struct ClientForm {
    /// Ignored; the identifier comes from storage or the request path.
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(custom(function = "validate_cpf"))]
    pub cpf: String,
    #[validate(range(min = 0.0))]
    pub income: f64,
    pub birth_date: DateTime<Utc>,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub children: i32,
}

/// Validated client fields ready to become a domain insert or update.
pub struct ClientPayload {
    pub name: ClientName,
    pub cpf: Cpf,
    pub income: Income,
    pub birth_date: DateTime<Utc>,
    pub children: ChildrenCount,
}

impl TryFrom<ClientForm> for ClientPayload {
    type Error = FormError;

    fn try_from(form: ClientForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            name: ClientName::new(form.name).map_err(|_| FormError::InvalidName)?,
            cpf: Cpf::new(form.cpf).map_err(|_| FormError::InvalidCpf)?,
            income: Income::new(form.income).map_err(|_| FormError::InvalidIncome)?,
            birth_date: form.birth_date,
            children: ChildrenCount::new(form.children)
                .map_err(|_| FormError::InvalidChildren)?,
        })
    }
}

impl ClientPayload {
    pub fn into_new_client(self) -> NewClient {
        NewClient::new(
            self.name,
            self.cpf,
            self.income,
            self.birth_date,
            self.children,
        )
    }

    pub fn into_update(self) -> UpdateClient {
        UpdateClient::new(
            self.name,
            self.cpf,
            self.income,
            self.birth_date,
            self.children,
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn form() -> ClientForm {
        ClientForm {
            id: Some(10),
            name: "Laura Cristina".to_string(),
            cpf: "88829955678".to_string(),
            income: 5000.0,
            birth_date: Utc.with_ymd_and_hms(1995, 6, 15, 7, 0, 0).unwrap(),
            children: 0,
        }
    }

    #[test]
    fn deserializes_camel_case_body_without_id() {
        let form: ClientForm = serde_json::from_value(json!({
            "name": "Laura Cristina",
            "cpf": "88829955678",
            "income": 5000.0,
            "birthDate": "1995-06-15T07:00:00Z",
            "children": 0
        }))
        .unwrap();

        assert_eq!(form.id, None);
        assert_eq!(
            form.birth_date,
            Utc.with_ymd_and_hms(1995, 6, 15, 7, 0, 0).unwrap()
        );
    }

    #[test]
    fn valid_form_converts_to_new_client() {
        let new_client = ClientPayload::try_from(form()).unwrap().into_new_client();

        assert_eq!(new_client.name.as_str(), "Laura Cristina");
        assert_eq!(new_client.cpf.as_str(), "88829955678");
        assert_eq!(new_client.income.get(), 5000.0);
        assert_eq!(new_client.children.get(), 0);
    }

    #[test]
    fn rejects_malformed_cpf() {
        let mut form = form();
        form.cpf = "888.299.556-78".to_string();

        assert!(matches!(
            ClientPayload::try_from(form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn rejects_negative_income_and_children() {
        let mut form = form();
        form.income = -10.0;
        assert!(ClientPayload::try_from(form.clone()).is_err());

        form.income = 10.0;
        form.children = -1;
        assert!(ClientPayload::try_from(form).is_err());
    }

    #[test]
    fn rejects_blank_name() {
        let mut form = form();
        form.name = "   ".to_string();

        assert!(matches!(
            ClientPayload::try_from(form),
            Err(FormError::InvalidName)
        ));
    }
}
