pub const QUERY_CREATE_SMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS sms (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    from_number TEXT,
    to_number TEXT,
    body TEXT,
    provider_raw TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);
"#;

pub const QUERY_INSERT_SMS: &str = r#"
INSERT INTO sms (from_number,to_number,body,provider_raw,created_at)
VALUES($1,$2,$3,$4,$5);
"#;

pub const QUERY_GET_RECENT_SMS: &str = r#"
SELECT
    id,from_number,to_number,body,provider_raw,created_at
FROM sms
ORDER BY created_at DESC, id DESC
LIMIT $1;
"#;
