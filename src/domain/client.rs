use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ChildrenCount, ClientId, ClientName, Cpf, Income, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: ClientName,
    pub cpf: Cpf,
    pub income: Income,
    pub birth_date: DateTime<Utc>,
    pub children: ChildrenCount,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewClient {
    pub name: ClientName,
    pub cpf: Cpf,
    pub income: Income,
    pub birth_date: DateTime<Utc>,
    pub children: ChildrenCount,
}

impl NewClient {
    #[must_use]
    pub fn new(
        name: ClientName,
        cpf: Cpf,
        income: Income,
        birth_date: DateTime<Utc>,
        children: ChildrenCount,
    ) -> Self {
        Self {
            name,
            cpf,
            income,
            birth_date,
            children,
        }
    }

    /// Builds a new client from raw values, validating each field.
    pub fn try_new(
        name: impl Into<String>,
        cpf: impl Into<String>,
        income: f64,
        birth_date: DateTime<Utc>,
        children: i32,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self::new(
            ClientName::new(name)?,
            Cpf::new(cpf)?,
            Income::new(income)?,
            birth_date,
            ChildrenCount::new(children)?,
        ))
    }
}

/// Full replacement of the mutable client fields.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateClient {
    pub name: ClientName,
    pub cpf: Cpf,
    pub income: Income,
    pub birth_date: DateTime<Utc>,
    pub children: ChildrenCount,
}

impl UpdateClient {
    #[must_use]
    pub fn new(
        name: ClientName,
        cpf: Cpf,
        income: Income,
        birth_date: DateTime<Utc>,
        children: ChildrenCount,
    ) -> Self {
        Self {
            name,
            cpf,
            income,
            birth_date,
            children,
        }
    }

    /// Builds the update from raw values, validating each field.
    pub fn try_new(
        name: impl Into<String>,
        cpf: impl Into<String>,
        income: f64,
        birth_date: DateTime<Utc>,
        children: i32,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self::new(
            ClientName::new(name)?,
            Cpf::new(cpf)?,
            Income::new(income)?,
            birth_date,
            ChildrenCount::new(children)?,
        ))
    }

    /// Applies the update to an existing client, keeping its identifier.
    #[must_use]
    pub fn apply_to(self, id: ClientId) -> Client {
        Client {
            id,
            name: self.name,
            cpf: self.cpf,
            income: self.income,
            birth_date: self.birth_date,
            children: self.children,
        }
    }
}
