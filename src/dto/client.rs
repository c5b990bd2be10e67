//! JSON projection of a client returned by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::client::Client;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    pub id: i32,
    pub name: String,
    pub cpf: String,
    pub income: f64,
    pub birth_date: DateTime<Utc>,
    pub children: i32,
}

impl From<Client> for ClientDto {
    fn from(client: Client) -> Self {
        Self {
            id: client.id.get(),
            name: client.name.into_inner(),
            cpf: client.cpf.into_inner(),
            income: client.income.get(),
            birth_date: client.birth_date,
            children: client.children.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::domain::client::UpdateClient;
    use crate::domain::types::ClientId;

    #[test]
    fn serializes_with_api_field_names() {
        let birth = Utc.with_ymd_and_hms(1995, 6, 15, 7, 0, 0).unwrap();
        let client = UpdateClient::try_new("Laura Cristina", "88829955678", 5000.0, birth, 0)
            .unwrap()
            .apply_to(ClientId::new(10).unwrap());

        let json = serde_json::to_value(ClientDto::from(client)).unwrap();

        assert_eq!(
            json,
            json!({
                "id": 10,
                "name": "Laura Cristina",
                "cpf": "88829955678",
                "income": 5000.0,
                "birthDate": "1995-06-15T07:00:00Z",
                "children": 0,
            })
        );
    }
}
