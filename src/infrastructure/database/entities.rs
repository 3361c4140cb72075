use crate::domain::entities::event_status::EventStatus;
use crate::infrastructure::database::schema::{
    companies, companies_users_link, events, roles, services, users,
};
use chrono::NaiveDateTime;
use diesel::{Insertable, Queryable, Selectable};

#[derive(Insertable)]
#[diesel(table_name = companies)]
pub struct NewCompanyDto<'a> {
    pub name: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUserDto<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = roles)]
pub struct NewRoleDto<'a> {
    pub name: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = services)]
pub struct NewServiceDto<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = companies_users_link)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CompanyUserLinkDto {
    pub id: i32,
    pub company_id: i32,
    pub user_id: i32,
    pub role_id: i32,
    pub is_active: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// `None` in `is_active` keeps the column default (active).
#[derive(Insertable)]
#[diesel(table_name = companies_users_link)]
pub struct NewCompanyUserLinkDto {
    pub company_id: i32,
    pub user_id: i32,
    pub role_id: i32,
    pub is_active: Option<bool>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = events)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EventDto {
    pub id: i32,
    pub service_id: i32,
    pub client_first_name: String,
    pub client_last_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl EventDto {
    /// Typed status. `None` only if the row bypassed the table's CHECK constraint.
    #[must_use]
    pub fn event_status(&self) -> Option<EventStatus> {
        EventStatus::parse(&self.status)
    }
}

/// `None` in `status` keeps the column default (`scheduled`).
#[derive(Insertable)]
#[diesel(table_name = events)]
pub struct NewEventDto<'a> {
    pub service_id: i32,
    pub client_first_name: &'a str,
    pub client_last_name: &'a str,
    pub client_email: &'a str,
    pub client_phone: &'a str,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub status: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
