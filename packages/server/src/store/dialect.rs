//! Parameter binding for hand-written SQL.
//!
//! Queries in this crate are written once with `?` positional placeholders and
//! portable SQL. [`statement`] renders them for whichever backend the pool is
//! connected to, so handlers and the query layer never branch on dialect.
//! Query text must not contain a literal `?` outside of placeholders.

use sea_orm::{DbBackend, Statement, Value};

/// Build a bound statement for `backend` from `?`-style SQL.
pub fn statement<I>(backend: DbBackend, sql: &str, values: I) -> Statement
where
    I: IntoIterator<Item = Value>,
{
    Statement::from_sql_and_values(backend, render(backend, sql), values)
}

/// Build an unparameterised statement for `backend`.
pub fn unbound(backend: DbBackend, sql: &str) -> Statement {
    Statement::from_string(backend, sql.to_owned())
}

fn render(backend: DbBackend, sql: &str) -> String {
    match backend {
        DbBackend::Postgres => {
            let mut out = String::with_capacity(sql.len() + 8);
            let mut n = 0;
            for ch in sql.chars() {
                if ch == '?' {
                    n += 1;
                    out.push('$');
                    out.push_str(&n.to_string());
                } else {
                    out.push(ch);
                }
            }
            out
        }
        _ => sql.to_owned(),
    }
}
