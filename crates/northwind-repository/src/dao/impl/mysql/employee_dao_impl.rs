//! MySQL implementation of [`EmployeeDao`].

use super::{inserted_id, required, statement};
use crate::dao::guard::{ensure_not_empty, ensure_positive_id, ensure_saved, ensure_unsaved};
use crate::timeout::with_deadline;
use crate::{DatabasePoolInterface, EmployeeDao};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use northwind_core::{EmployeeRecord, NorthwindError, NorthwindResult, PageRequest, ValidateExt};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const SELECT_EMPLOYEES: &str = r#"
    SELECT e.EmployeeID AS id, e.LastName AS last_name, e.FirstName AS first_name,
           e.Title AS title, e.TitleOfCourtesy AS title_of_courtesy,
           e.BirthDate AS birth_date, e.HireDate AS hire_date, e.Address AS address,
           e.City AS city, e.Region AS region, e.PostalCode AS postal_code,
           e.Country AS country, e.HomePhone AS home_phone, e.Extension AS extension,
           e.Photo AS photo, e.Notes AS notes, e.ReportsTo AS reports_to,
           e.PhotoPath AS photo_path
    FROM Employees AS e"#;

/// MySQL employee DAO.
#[derive(Component, Clone)]
#[shaku(interface = EmployeeDao)]
pub struct MySqlEmployeeDaoImpl {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlEmployeeDaoImpl {
    /// Creates a new MySQL employee DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EmployeeRow {
    id: Option<i32>,
    last_name: Option<String>,
    first_name: Option<String>,
    title: Option<String>,
    title_of_courtesy: Option<String>,
    birth_date: Option<NaiveDateTime>,
    hire_date: Option<NaiveDateTime>,
    address: Option<String>,
    city: Option<String>,
    region: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
    home_phone: Option<String>,
    extension: Option<String>,
    photo: Option<Vec<u8>>,
    notes: Option<String>,
    reports_to: Option<i32>,
    photo_path: Option<String>,
}

impl TryFrom<EmployeeRow> for EmployeeRecord {
    type Error = NorthwindError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        Ok(EmployeeRecord {
            id: Some(required(row.id, "EmployeeID", "Employees")?),
            last_name: required(row.last_name, "LastName", "Employees")?,
            first_name: required(row.first_name, "FirstName", "Employees")?,
            title: row.title,
            title_of_courtesy: row.title_of_courtesy,
            birth_date: row.birth_date,
            hire_date: row.hire_date,
            address: row.address,
            city: row.city,
            region: row.region,
            postal_code: row.postal_code,
            country: row.country,
            home_phone: row.home_phone,
            extension: row.extension,
            photo: row.photo,
            notes: row.notes,
            reports_to: row.reports_to,
            photo_path: row.photo_path,
        })
    }
}

fn into_records(rows: Vec<EmployeeRow>) -> NorthwindResult<Vec<EmployeeRecord>> {
    rows.into_iter().map(EmployeeRecord::try_from).collect()
}

#[async_trait]
impl EmployeeDao for MySqlEmployeeDaoImpl {
    async fn insert(&self, employee: &EmployeeRecord) -> NorthwindResult<i32> {
        ensure_unsaved(employee.id)?;
        employee.validate_record()?;
        debug!("Inserting employee: {} {}", employee.first_name, employee.last_name);

        with_deadline(self.pool.statement_timeout(), "insert employee", async {
            let result = sqlx::query(
                r#"
                INSERT INTO Employees (LastName, FirstName, Title, TitleOfCourtesy, BirthDate,
                                       HireDate, Address, City, Region, PostalCode, Country,
                                       HomePhone, Extension, Photo, Notes, ReportsTo, PhotoPath)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&employee.last_name)
            .bind(&employee.first_name)
            .bind(&employee.title)
            .bind(&employee.title_of_courtesy)
            .bind(employee.birth_date)
            .bind(employee.hire_date)
            .bind(&employee.address)
            .bind(&employee.city)
            .bind(&employee.region)
            .bind(&employee.postal_code)
            .bind(&employee.country)
            .bind(&employee.home_phone)
            .bind(&employee.extension)
            .bind(&employee.photo)
            .bind(&employee.notes)
            .bind(employee.reports_to)
            .bind(&employee.photo_path)
            .execute(self.pool.inner())
            .await?;

            inserted_id(result.last_insert_id(), "Employees")
        })
        .await
    }

    async fn find(&self, id: i32) -> NorthwindResult<EmployeeRecord> {
        ensure_positive_id("id", id)?;
        debug!("Finding employee by id: {}", id);

        let row = with_deadline(self.pool.statement_timeout(), "find employee", async {
            let row = statement::select_by_id(SELECT_EMPLOYEES, "e.EmployeeID", id)
                .build_query_as::<EmployeeRow>()
                .fetch_optional(self.pool.inner())
                .await?;
            Ok::<_, NorthwindError>(row)
        })
        .await?;

        row.map(EmployeeRecord::try_from)
            .transpose()?
            .ok_or_else(|| NorthwindError::not_found("Employee", id))
    }

    async fn update(&self, employee: &EmployeeRecord) -> NorthwindResult<bool> {
        let id = ensure_saved(employee.id)?;
        employee.validate_record()?;
        debug!("Updating employee: {}", id);

        with_deadline(self.pool.statement_timeout(), "update employee", async {
            let result = sqlx::query(
                r#"
                UPDATE Employees
                SET LastName = ?, FirstName = ?, Title = ?, TitleOfCourtesy = ?, BirthDate = ?,
                    HireDate = ?, Address = ?, City = ?, Region = ?, PostalCode = ?,
                    Country = ?, HomePhone = ?, Extension = ?, Photo = ?, Notes = ?,
                    ReportsTo = ?, PhotoPath = ?
                WHERE EmployeeID = ?
                "#,
            )
            .bind(&employee.last_name)
            .bind(&employee.first_name)
            .bind(&employee.title)
            .bind(&employee.title_of_courtesy)
            .bind(employee.birth_date)
            .bind(employee.hire_date)
            .bind(&employee.address)
            .bind(&employee.city)
            .bind(&employee.region)
            .bind(&employee.postal_code)
            .bind(&employee.country)
            .bind(&employee.home_phone)
            .bind(&employee.extension)
            .bind(&employee.photo)
            .bind(&employee.notes)
            .bind(employee.reports_to)
            .bind(&employee.photo_path)
            .bind(id)
            .execute(self.pool.inner())
            .await?;

            Ok::<_, NorthwindError>(result.rows_affected() == 1)
        })
        .await
    }

    async fn delete(&self, id: i32) -> NorthwindResult<bool> {
        ensure_positive_id("id", id)?;
        debug!("Deleting employee: {}", id);

        with_deadline(self.pool.statement_timeout(), "delete employee", async {
            let result = sqlx::query("DELETE FROM Employees WHERE EmployeeID = ?")
                .bind(id)
                .execute(self.pool.inner())
                .await?;

            Ok::<_, NorthwindError>(result.rows_affected() == 1)
        })
        .await
    }

    async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<EmployeeRecord>> {
        debug!("Selecting employees, offset: {}, limit: {}", page.offset(), page.limit());

        let rows = with_deadline(self.pool.statement_timeout(), "select employees", async {
            let rows = statement::select_page(SELECT_EMPLOYEES, "e.EmployeeID", page)
                .build_query_as::<EmployeeRow>()
                .fetch_all(self.pool.inner())
                .await?;
            Ok::<_, NorthwindError>(rows)
        })
        .await?;

        into_records(rows)
    }

    async fn select_by_last_names(&self, last_names: &[String]) -> NorthwindResult<Vec<EmployeeRecord>> {
        ensure_not_empty("last_names", last_names)?;
        debug!("Selecting employees by {} last names", last_names.len());

        let rows = with_deadline(self.pool.statement_timeout(), "select employees by name", async {
            let mut query = statement::select_where_in(
                SELECT_EMPLOYEES,
                "e.LastName",
                last_names,
                "ORDER BY e.EmployeeID",
            );
            let rows = query
                .build_query_as::<EmployeeRow>()
                .fetch_all(self.pool.inner())
                .await?;
            Ok::<_, NorthwindError>(rows)
        })
        .await?;

        into_records(rows)
    }
}

impl std::fmt::Debug for MySqlEmployeeDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlEmployeeDaoImpl").finish_non_exhaustive()
    }
}
