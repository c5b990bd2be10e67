use actix_web::http::header;
use actix_web::{HttpResponse, Responder, web};

use crate::forms::client::ClientForm;
use crate::forms::page::{IncomeQuery, PageQuery};
use crate::pagination::PageRequest;
use crate::repository::{ClientReader, ClientWriter};
use crate::routes::{bad_request, service_error_response};
use crate::services::{ServiceError, client as client_service};

/// Registers the `/clients` resource backed by the repository `R`.
pub fn configure<R>(cfg: &mut web::ServiceConfig)
where
    R: ClientReader + ClientWriter + 'static,
{
    cfg.service(
        web::scope("/clients")
            .route("/", web::get().to(list_clients::<R>))
            .route("/", web::post().to(insert_client::<R>))
            .route(
                "/incomeGreaterThan/",
                web::get().to(list_clients_by_income::<R>),
            )
            .route("/{client_id}", web::get().to(show_client::<R>))
            .route("/{client_id}", web::put().to(update_client::<R>))
            .route("/{client_id}", web::delete().to(delete_client::<R>)),
    );
}

pub async fn list_clients<R>(
    repo: web::Data<R>,
    web::Query(params): web::Query<PageQuery>,
) -> impl Responder
where
    R: ClientReader + 'static,
{
    let request = match PageRequest::try_from(params) {
        Ok(request) => request,
        Err(err) => return bad_request(&err),
    };

    match client_service::find_all_paged(repo.get_ref(), request) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err),
    }
}

pub async fn list_clients_by_income<R>(
    repo: web::Data<R>,
    web::Query(filter): web::Query<IncomeQuery>,
    web::Query(params): web::Query<PageQuery>,
) -> impl Responder
where
    R: ClientReader + 'static,
{
    let income = match filter.threshold() {
        Ok(income) => income,
        Err(err) => return bad_request(&err),
    };
    let request = match PageRequest::try_from(params) {
        Ok(request) => request,
        Err(err) => return bad_request(&err),
    };

    match client_service::find_by_income_greater_than(repo.get_ref(), income, request) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err),
    }
}

pub async fn show_client<R>(repo: web::Data<R>, client_id: web::Path<i32>) -> impl Responder
where
    R: ClientReader + 'static,
{
    match client_service::find_by_id(repo.get_ref(), client_id.into_inner()) {
        Ok(client) => HttpResponse::Ok().json(client),
        Err(err) => service_error_response(err),
    }
}

pub async fn insert_client<R>(
    repo: web::Data<R>,
    web::Json(form): web::Json<ClientForm>,
) -> impl Responder
where
    R: ClientWriter + 'static,
{
    match client_service::insert(repo.get_ref(), form) {
        Ok(client) => HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/clients/{}", client.id)))
            .json(client),
        Err(err) => service_error_response(err),
    }
}

pub async fn update_client<R>(
    repo: web::Data<R>,
    client_id: web::Path<i32>,
    web::Json(form): web::Json<ClientForm>,
) -> impl Responder
where
    R: ClientWriter + 'static,
{
    let client_id = client_id.into_inner();

    match client_service::update(repo.get_ref(), client_id, form) {
        Ok(client) => HttpResponse::Ok().json(client),
        // A missing client is reported as a bad request on this route.
        Err(ServiceError::NotFound) => {
            log::warn!("Update rejected, client {client_id} does not exist");
            bad_request(&ServiceError::NotFound)
        }
        Err(err) => service_error_response(err),
    }
}

pub async fn delete_client<R>(repo: web::Data<R>, client_id: web::Path<i32>) -> impl Responder
where
    R: ClientWriter + 'static,
{
    match client_service::delete(repo.get_ref(), client_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => service_error_response(err),
    }
}
