use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    domain::{
        client::{Client, NewClient, UpdateClient},
        types::ClientId,
    },
    models::client::{
        Client as DbClient, NewClient as DbNewClient, UpdateClient as DbUpdateClient,
    },
    pagination::{Direction, Sort, SortField},
    repository::{
        ClientListQuery, ClientReader, ClientWriter, DieselRepository, Pagination,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::clients,
};

type BoxedClients = clients::BoxedQuery<'static, Sqlite>;

/// Applies the filters of `query` to a fresh boxed selection.
fn filtered(query: &ClientListQuery) -> BoxedClients {
    let mut items = clients::table.into_boxed();
    if let Some(income) = query.income_greater_than {
        items = items.filter(clients::income.gt(income));
    }
    items
}

fn ordered(items: BoxedClients, sort: Sort) -> BoxedClients {
    let items = match (sort.field, sort.direction) {
        (SortField::Id, Direction::Asc) => items.order(clients::id.asc()),
        (SortField::Id, Direction::Desc) => items.order(clients::id.desc()),
        (SortField::Name, Direction::Asc) => items.order(clients::name.asc()),
        (SortField::Name, Direction::Desc) => items.order(clients::name.desc()),
        (SortField::Cpf, Direction::Asc) => items.order(clients::cpf.asc()),
        (SortField::Cpf, Direction::Desc) => items.order(clients::cpf.desc()),
        (SortField::Income, Direction::Asc) => items.order(clients::income.asc()),
        (SortField::Income, Direction::Desc) => items.order(clients::income.desc()),
        (SortField::BirthDate, Direction::Asc) => items.order(clients::birth_date.asc()),
        (SortField::BirthDate, Direction::Desc) => items.order(clients::birth_date.desc()),
        (SortField::Children, Direction::Asc) => items.order(clients::children.asc()),
        (SortField::Children, Direction::Desc) => items.order(clients::children.desc()),
    };
    // Ties fall back to insertion order so pages never overlap.
    items.then_order_by(clients::id.asc())
}

/// SQL `LIMIT`/`OFFSET` for a page, rejecting pages past the `i64` range.
fn limit_and_offset(pagination: &Pagination) -> RepositoryResult<(i64, i64)> {
    let out_of_range = || {
        RepositoryError::ValidationError(format!(
            "page {} of size {} is out of range",
            pagination.page, pagination.per_page
        ))
    };
    let limit = i64::try_from(pagination.per_page.max(1)).map_err(|_| out_of_range())?;
    let offset = i64::try_from(pagination.page)
        .ok()
        .and_then(|page| page.checked_mul(limit))
        .ok_or_else(out_of_range)?;
    Ok((limit, offset))
}

fn into_domain(db_client: DbClient) -> RepositoryResult<Client> {
    Client::try_from(db_client).map_err(RepositoryError::from)
}

impl ClientReader for DieselRepository {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        let mut conn = self.conn()?;
        let client = clients::table
            .find(id.get())
            .select(DbClient::as_select())
            .first::<DbClient>(&mut conn)
            .optional()?;

        client.map(into_domain).transpose()
    }

    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)> {
        let mut conn = self.conn()?;

        let total: i64 = filtered(&query).count().get_result(&mut conn)?;

        let mut items = ordered(filtered(&query), query.sort);
        if let Some(pagination) = &query.pagination {
            let (limit, offset) = limit_and_offset(pagination)?;
            items = items.limit(limit).offset(offset);
        }

        let clients = items
            .select(DbClient::as_select())
            .load::<DbClient>(&mut conn)?
            .into_iter()
            .map(into_domain)
            .collect::<RepositoryResult<Vec<Client>>>()?;

        Ok((total as usize, clients))
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        let mut conn = self.conn()?;
        let insertable: DbNewClient = new_client.into();

        let created = diesel::insert_into(clients::table)
            .values(&insertable)
            .returning(DbClient::as_returning())
            .get_result::<DbClient>(&mut conn)?;

        into_domain(created)
    }

    fn update_client(
        &self,
        client_id: ClientId,
        updates: &UpdateClient,
    ) -> RepositoryResult<Client> {
        let mut conn = self.conn()?;
        let db_updates: DbUpdateClient = updates.into();

        let updated = diesel::update(clients::table.find(client_id.get()))
            .set(&db_updates)
            .returning(DbClient::as_returning())
            .get_result::<DbClient>(&mut conn)?;

        into_domain(updated)
    }

    fn delete_client(&self, client_id: ClientId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(clients::table.find(client_id.get())).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
