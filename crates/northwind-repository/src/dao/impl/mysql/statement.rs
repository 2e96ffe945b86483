//! Select statements built on top of a shared column list.

use northwind_core::PageRequest;
use sqlx::{Encode, MySql, QueryBuilder, Type};

/// Builds `{select} WHERE {column} = ?` bound to `id`.
pub(super) fn select_by_id(
    select: &'static str,
    column: &'static str,
    id: i32,
) -> QueryBuilder<'static, MySql> {
    let mut builder = QueryBuilder::new(select);
    builder.push(" WHERE ").push(column).push(" = ").push_bind(id);
    builder
}

/// Builds `{select} ORDER BY {order_by} LIMIT ? OFFSET ?` for one page.
pub(super) fn select_page(
    select: &'static str,
    order_by: &'static str,
    page: PageRequest,
) -> QueryBuilder<'static, MySql> {
    let mut builder = QueryBuilder::new(select);
    builder
        .push(" ORDER BY ")
        .push(order_by)
        .push(" LIMIT ")
        .push_bind(page.limit())
        .push(" OFFSET ")
        .push_bind(page.offset());
    builder
}

/// Builds `{select} WHERE {column} IN (?, ?, ...) {tail}` with one bound
/// placeholder per key.
///
/// `select`, `column` and `tail` are static SQL fragments; keys only ever
/// travel as bind arguments.
pub(super) fn select_where_in<'args, T>(
    select: &'static str,
    column: &'static str,
    keys: &'args [T],
    tail: &'static str,
) -> QueryBuilder<'args, MySql>
where
    T: Encode<'args, MySql> + Type<MySql> + Sync,
{
    let mut builder = QueryBuilder::new(select);
    builder.push(" WHERE ").push(column).push(" IN (");

    let mut separated = builder.separated(", ");
    for key in keys {
        separated.push_bind(key);
    }
    separated.push_unseparated(")");

    builder.push(" ").push(tail);
    builder
}
