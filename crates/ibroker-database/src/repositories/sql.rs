//! SQL statement builders for catalog tables.
//!
//! Identifiers come from static entity declarations and are always quoted;
//! every value is sent as a bind parameter.

use sqlx::{Postgres, QueryBuilder};

use ibroker_core::types::{FieldSpec, FieldValue, PageRequest};

use super::TypedFilter;

/// Quote an SQL identifier.
pub fn quote(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

fn push_value(builder: &mut QueryBuilder<'static, Postgres>, value: FieldValue) {
    match value {
        FieldValue::Integer(v) => builder.push_bind(v),
        FieldValue::Text(v) => builder.push_bind(v),
        FieldValue::Boolean(v) => builder.push_bind(v),
        FieldValue::Timestamp(v) => builder.push_bind(v),
    };
}

/// Append ` WHERE "a" > $1 AND "b" = $2 ...` for the given filters.
pub fn push_where(builder: &mut QueryBuilder<'static, Postgres>, filters: &[TypedFilter]) {
    for (idx, filter) in filters.iter().enumerate() {
        builder.push(if idx == 0 { " WHERE " } else { " AND " });
        builder
            .push(quote(filter.column))
            .push(" ")
            .push(filter.op.as_sql())
            .push(" ");
        push_value(builder, filter.value.clone());
    }
}

/// `SELECT COUNT(*)` over the filtered table.
pub fn count_query(table: &str, filters: &[TypedFilter]) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT COUNT(*) FROM {}", quote(table)));
    push_where(&mut builder, filters);
    builder
}

/// One page of the filtered table, ordered by id.
pub fn page_query(
    table: &str,
    filters: &[TypedFilter],
    page: &PageRequest,
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT * FROM {}", quote(table)));
    push_where(&mut builder, filters);
    builder.push(" ORDER BY \"id\" LIMIT ");
    builder.push_bind(to_i64(page.limit()));
    builder.push(" OFFSET ");
    builder.push_bind(to_i64(page.offset()));
    builder
}

/// `INSERT ... RETURNING *` of the writable columns.
pub fn insert_query(
    table: &str,
    columns: &[FieldSpec],
    values: Vec<FieldValue>,
) -> QueryBuilder<'static, Postgres> {
    let names: Vec<String> = columns.iter().map(|spec| quote(spec.name)).collect();
    let mut builder = QueryBuilder::new(format!(
        "INSERT INTO {} ({}) VALUES (",
        quote(table),
        names.join(", ")
    ));
    for (idx, value) in values.into_iter().enumerate() {
        if idx > 0 {
            builder.push(", ");
        }
        push_value(&mut builder, value);
    }
    builder.push(") RETURNING *");
    builder
}

/// `UPDATE ... SET ... WHERE "id" = $n RETURNING *` of the writable columns.
pub fn update_query(
    table: &str,
    columns: &[FieldSpec],
    values: Vec<FieldValue>,
    id: i64,
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("UPDATE {} SET ", quote(table)));
    for (idx, (spec, value)) in columns.iter().zip(values).enumerate() {
        if idx > 0 {
            builder.push(", ");
        }
        builder.push(quote(spec.name)).push(" = ");
        push_value(&mut builder, value);
    }
    builder.push(" WHERE \"id\" = ");
    builder.push_bind(id);
    builder.push(" RETURNING *");
    builder
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ibroker_core::types::{FieldKind, FilterOp};

    fn filter(column: &'static str, op: FilterOp, value: FieldValue) -> TypedFilter {
        TypedFilter { column, op, value }
    }

    #[test]
    fn test_count_without_filters() {
        let builder = count_query("brokers", &[]);
        assert_eq!(builder.sql(), "SELECT COUNT(*) FROM \"brokers\"");
    }

    #[test]
    fn test_where_clause_joins_with_and() {
        let filters = [
            filter("init_price", FilterOp::GreaterThan, FieldValue::Integer(100)),
            filter("offer_symbol", FilterOp::Equal, FieldValue::Text("STL".into())),
        ];

        let builder = page_query("offers", &filters, &PageRequest::new(2, 5));

        assert_eq!(
            builder.sql(),
            "SELECT * FROM \"offers\" WHERE \"init_price\" > $1 AND \"offer_symbol\" = $2 \
             ORDER BY \"id\" LIMIT $3 OFFSET $4"
        );
    }

    #[test]
    fn test_count_and_page_share_where_clause() {
        let filters = [filter("spot_id", FilterOp::GreaterThanOrEqual, FieldValue::Integer(10))];

        let count = count_query("brokers", &filters);
        let page = page_query("brokers", &filters, &PageRequest::default());

        assert!(count.sql().ends_with("WHERE \"spot_id\" >= $1"));
        assert!(page.sql().contains("WHERE \"spot_id\" >= $1 ORDER BY"));
    }

    #[test]
    fn test_insert_and_update_statements() {
        let columns = [
            FieldSpec::new("description", FieldKind::Text),
            FieldSpec::new("persian_name", FieldKind::Text),
        ];
        let values = vec![
            FieldValue::Text("kg".into()),
            FieldValue::Text("Kilogram".into()),
        ];

        let insert = insert_query("measure_units", &columns, values.clone());
        assert_eq!(
            insert.sql(),
            "INSERT INTO \"measure_units\" (\"description\", \"persian_name\") \
             VALUES ($1, $2) RETURNING *"
        );

        let update = update_query("measure_units", &columns, values, 9);
        assert_eq!(
            update.sql(),
            "UPDATE \"measure_units\" SET \"description\" = $1, \"persian_name\" = $2 \
             WHERE \"id\" = $3 RETURNING *"
        );
    }

    #[test]
    fn test_quote_escapes_embedded_quotes() {
        assert_eq!(quote("groups"), "\"groups\"");
        assert_eq!(quote("a\"b"), "\"a\"\"b\"");
    }
}
