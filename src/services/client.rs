//! Client CRUD operations shared by the `/clients` routes.

use crate::domain::types::ClientId;
use crate::dto::client::ClientDto;
use crate::forms::client::{ClientForm, ClientPayload};
use crate::pagination::{Page, PageRequest};
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

fn load_page<R>(
    repo: &R,
    query: ClientListQuery,
    request: &PageRequest,
) -> ServiceResult<Page<ClientDto>>
where
    R: ClientReader + ?Sized,
{
    let query = query
        .sort(request.sort)
        .paginate(request.page, request.size);

    let (total, clients) = repo.list_clients(query).map_err(|err| {
        log::error!("Failed to list clients: {err}");
        err
    })?;

    Ok(Page::new(clients, request, total).map(ClientDto::from))
}

/// Returns one page of all clients.
pub fn find_all_paged<R>(repo: &R, request: PageRequest) -> ServiceResult<Page<ClientDto>>
where
    R: ClientReader + ?Sized,
{
    load_page(repo, ClientListQuery::new(), &request)
}

/// Returns one page of clients earning strictly more than `income`.
pub fn find_by_income_greater_than<R>(
    repo: &R,
    income: f64,
    request: PageRequest,
) -> ServiceResult<Page<ClientDto>>
where
    R: ClientReader + ?Sized,
{
    load_page(
        repo,
        ClientListQuery::new().income_greater_than(income),
        &request,
    )
}

pub fn find_by_id<R>(repo: &R, client_id: i32) -> ServiceResult<ClientDto>
where
    R: ClientReader + ?Sized,
{
    let client_id = ClientId::new(client_id)?;

    repo.get_client_by_id(client_id)?
        .map(ClientDto::from)
        .ok_or(ServiceError::NotFound)
}

/// Validates the form and stores a new client, returning it with its id.
pub fn insert<R>(repo: &R, form: ClientForm) -> ServiceResult<ClientDto>
where
    R: ClientWriter + ?Sized,
{
    let new_client = ClientPayload::try_from(form)?.into_new_client();

    let client = repo.create_client(&new_client).map_err(|err| {
        log::error!("Failed to insert client: {err}");
        err
    })?;

    log::info!("Inserted client {}", client.id);
    Ok(client.into())
}

/// Replaces every field of an existing client.
pub fn update<R>(repo: &R, client_id: i32, form: ClientForm) -> ServiceResult<ClientDto>
where
    R: ClientWriter + ?Sized,
{
    let client_id = ClientId::new(client_id)?;
    let updates = ClientPayload::try_from(form)?.into_update();

    let client = repo.update_client(client_id, &updates)?;

    Ok(client.into())
}

pub fn delete<R>(repo: &R, client_id: i32) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    let client_id = ClientId::new(client_id)?;

    repo.delete_client(client_id)?;

    log::info!("Deleted client {client_id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::client::{Client, UpdateClient};
    use crate::pagination::{Direction, Sort, SortField};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn client(id: i32, name: &str, cpf: &str, income: f64) -> Client {
        let birth = Utc.with_ymd_and_hms(1996, 12, 23, 7, 0, 0).unwrap();
        UpdateClient::try_new(name, cpf, income, birth, 0)
            .expect("valid client")
            .apply_to(ClientId::new(id).expect("valid id"))
    }

    fn form() -> ClientForm {
        ClientForm {
            id: None,
            name: "Laura Cristina".to_string(),
            cpf: "88829955678".to_string(),
            income: 5000.0,
            birth_date: Utc.with_ymd_and_hms(1995, 6, 15, 7, 0, 0).unwrap(),
            children: 0,
        }
    }

    #[test]
    fn find_all_paged_forwards_paging_and_sort() {
        let mut repo = MockRepository::new();
        repo.expect_list_clients()
            .withf(|query| {
                query.income_greater_than.is_none()
                    && query.sort == Sort::new(SortField::Income, Direction::Desc)
                    && query.pagination.map(|p| (p.page, p.per_page)) == Some((1, 2))
            })
            .times(1)
            .returning(|_| Ok((3, vec![client(8, "Toni Morrison", "10219344681", 10000.0)])));

        let request = PageRequest::new(1, 2, Sort::new(SortField::Income, Direction::Desc));
        let page = find_all_paged(&repo, request).expect("page");

        assert_eq!(page.number_of_elements, 1);
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.total_pages, 2);
        assert!(page.last);
        assert_eq!(page.content[0].id, 8);
    }

    #[test]
    fn find_by_income_applies_threshold() {
        let mut repo = MockRepository::new();
        repo.expect_list_clients()
            .withf(|query| query.income_greater_than == Some(5000.0))
            .times(1)
            .returning(|_| Ok((1, vec![client(7, "Jose Saramago", "10239254871", 7500.0)])));

        let page = find_by_income_greater_than(&repo, 5000.0, PageRequest::default())
            .expect("page");

        assert_eq!(page.number_of_elements, 1);
    }

    #[test]
    fn find_by_id_reports_missing_client() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_id().returning(|_| Ok(None));

        assert!(matches!(find_by_id(&repo, 100), Err(ServiceError::NotFound)));
    }

    #[test]
    fn find_by_id_rejects_non_positive_id() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_id().times(0);

        assert!(matches!(
            find_by_id(&repo, 0),
            Err(ServiceError::TypeConstraint(_))
        ));
    }

    #[test]
    fn insert_returns_stored_client() {
        let mut repo = MockRepository::new();
        repo.expect_create_client()
            .withf(|new_client| new_client.cpf.as_str() == "88829955678")
            .times(1)
            .returning(|new_client| {
                Ok(Client {
                    id: ClientId::new(10).unwrap(),
                    name: new_client.name.clone(),
                    cpf: new_client.cpf.clone(),
                    income: new_client.income,
                    birth_date: new_client.birth_date,
                    children: new_client.children,
                })
            });

        let dto = insert(&repo, form()).expect("inserted");

        assert_eq!(dto.id, 10);
        assert_eq!(dto.name, "Laura Cristina");
    }

    #[test]
    fn insert_rejects_invalid_form_without_touching_storage() {
        let mut repo = MockRepository::new();
        repo.expect_create_client().times(0);
        let mut form = form();
        form.cpf = "123".to_string();

        assert!(matches!(insert(&repo, form), Err(ServiceError::Form(_))));
    }

    #[test]
    fn update_maps_repository_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_update_client()
            .withf(|id, _| id.get() == 100)
            .times(1)
            .returning(|_, _| Err(RepositoryError::NotFound));

        assert!(matches!(
            update(&repo, 100, form()),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn delete_maps_repository_failures() {
        let mut repo = MockRepository::new();
        repo.expect_delete_client()
            .returning(|_| Err(RepositoryError::ConnectionError("pool closed".into())));

        assert!(matches!(delete(&repo, 4), Err(ServiceError::Internal(_))));
    }
}
