mod common;

#[cfg(test)]
mod tests {
    use crate::common::{EVENTS, USERS};
    use serde_json::json;
    use std::collections::{BTreeMap, BTreeSet};
    use turret::{Consistency, Statement, Table, Value};
    use uuid::Uuid;

    #[test]
    fn insert_values() {
        let query = USERS
            .insert()
            .value(|t| t.id, "a")
            .value(|t| t.city, "O'Hara")
            .value(|t| t.scores, vec![3, 1])
            .value(|t| t.tags, BTreeMap::from([("k".to_string(), "v".to_string())]));
        assert_eq!(
            query.query_text().as_str(),
            "INSERT INTO users (id, city, scores, tags) VALUES ('a', 'O''Hara', [3, 1], {'k': 'v'})"
        );
        let tokens = query.routing_tokens();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].column, "id");
        assert_eq!(
            tokens[0].token_value().as_str(),
            "token('a')"
        );
    }

    #[test]
    fn insert_parameters() {
        let prepared = USERS
            .insert()
            .value(|t| t.id, "a")
            .value_param(|t| t.age)
            .value_if_some(|t| t.city, None::<&str>)
            .value_param(|t| t.emails)
            .prepare();
        assert_eq!(
            prepared.text().as_str(),
            "INSERT INTO users (id, age, emails) VALUES ('a', ?, ?)"
        );
        assert_eq!(
            prepared.types(),
            [
                Value::Int32(None),
                Value::Set(None, Box::new(Value::Varchar(None)))
            ]
        );
        let bound = prepared.bind((27, BTreeSet::from(["x@example.com".to_string()])));
        assert_eq!(bound.values[0], Value::Int32(Some(27)));
        assert_eq!(
            bound.values[1],
            Value::Set(
                Some(vec![Value::Varchar(Some("x@example.com".into()))]),
                Box::new(Value::Varchar(None))
            )
        );
    }

    #[test]
    fn insert_if_not_exists() {
        let query = EVENTS
            .insert()
            .value(|t| t.device, Uuid::nil())
            .value(|t| t.at, 1)
            .value(|t| t.seq, 0)
            .if_not_exists()
            .timestamp(1704067200000000)
            .consistency_level(Consistency::LocalQuorum);
        assert_eq!(
            query.query_text().as_str(),
            "INSERT INTO telemetry.events (device, at, seq) \
             VALUES (00000000-0000-0000-0000-000000000000, 1, 0) \
             IF NOT EXISTS USING TIMESTAMP 1704067200000000"
        );
        assert_eq!(query.consistency(), Some(Consistency::LocalQuorum));
    }

    #[test]
    fn insert_ttl_and_timestamp() {
        let query = USERS
            .insert()
            .ttl(30)
            .value(|t| t.id, "b")
            .timestamp(5);
        assert_eq!(
            query.query_text().as_str(),
            "INSERT INTO users (id) VALUES ('b') USING TTL 30 AND TIMESTAMP 5"
        );
    }

    #[test]
    fn insert_json() {
        let query = USERS.insert().json(&json!({"city": "L'Aquila"}));
        assert_eq!(
            query.query_text().as_str(),
            r#"INSERT INTO users JSON '{"city":"L''Aquila"}'"#
        );
        let query = USERS.insert().json(&json!({"id": "c"})).if_not_exists();
        assert_eq!(
            query.query_text().as_str(),
            r#"INSERT INTO users JSON '{"id":"c"}' IF NOT EXISTS"#
        );
        assert!(query.routing_tokens().is_empty());
    }
}
