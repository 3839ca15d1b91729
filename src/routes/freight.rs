use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::dto::freight::{FreightDto, FreightsQuery};
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::freight as freight_service;

#[get("/freights")]
pub async fn list_freights(
    params: web::Query<FreightsQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let page = freight_service::list_freights(repo.get_ref(), params.into_inner())?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/freights/statuses")]
pub async fn list_statuses(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let statuses = freight_service::list_statuses(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(statuses))
}

#[get("/freights/{id}")]
pub async fn get_freight(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let freight = freight_service::get_freight(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::Ok().json(freight))
}

#[post("/freights")]
pub async fn create_freight(
    repo: web::Data<DieselRepository>,
    web::Json(payload): web::Json<FreightDto>,
) -> Result<HttpResponse, ServiceError> {
    let freight = freight_service::create_freight(repo.get_ref(), &payload)?;
    Ok(HttpResponse::Ok().json(freight))
}

#[put("/freights/{id}")]
pub async fn update_freight(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(payload): web::Json<FreightDto>,
) -> Result<HttpResponse, ServiceError> {
    let freight = freight_service::update_freight(repo.get_ref(), id.into_inner(), &payload)?;
    Ok(HttpResponse::Ok().json(freight))
}

#[delete("/freights/{id}")]
pub async fn delete_freight(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    freight_service::delete_freight(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::Ok().finish())
}
