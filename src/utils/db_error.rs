pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation()
}

/// True when the violated constraint is the one-open-ticket-per-vehicle index.
pub fn is_open_ticket_violation(e: &sqlx::Error) -> bool {
    if !is_unique_violation(e) {
        return false;
    }

    matches!(
        e.as_database_error().and_then(|db| db.constraint()),
        Some("ticket_one_open_per_vehicle")
    )
}
