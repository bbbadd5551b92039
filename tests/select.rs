mod common;

#[cfg(test)]
mod tests {
    use crate::common::{EVENTS, USERS, init_logs};
    use indoc::indoc;
    use turret::{
        Consistency, Operator, RowLabeled, Statement, Table, TableRef, Value,
        clause::{
            operator_clause,
            typed_clause::{self, Projection},
        },
    };
    use uuid::Uuid;

    #[test]
    fn select_columns() {
        let query = USERS.select(|t| (t.id, t.age)).where_(USERS.id.eq("test"));
        assert_eq!(
            query.query_text().as_str(),
            "SELECT id, age FROM users WHERE id = 'test'"
        );
        let row = RowLabeled::from_iter([
            ("age", Value::Int32(Some(30))),
            ("id", Value::Varchar(Some("test".into()))),
        ]);
        assert_eq!(query.extract(&row).unwrap(), ("test".to_string(), 30));
    }

    #[test]
    fn select_all() {
        let query = USERS.select_all().where_(USERS.id.eq("it's me"));
        assert_eq!(query.build(), "SELECT * FROM users WHERE id = 'it''s me'");
        let row = RowLabeled::from_iter([("id", "it's me".to_string()), ("city", "Rome".into())]);
        let extracted = query.extract(&row).unwrap();
        assert_eq!(extracted, row);
        assert_eq!(extracted.get::<String>("city").unwrap(), "Rome");
    }

    #[test]
    fn select_missing_column() {
        let query = USERS.select(|t| t.city);
        let row = RowLabeled::from_iter([("id", "a".to_string())]);
        let error = query.extract(&row).unwrap_err();
        assert!(error.to_string().contains("city"), "{error}");
    }

    #[test]
    fn select_count() {
        let query = USERS.count().where_(USERS.id.eq("a"));
        assert_eq!(
            query.query_text().as_str(),
            "SELECT COUNT(*) FROM users WHERE id = 'a'"
        );
        let row = RowLabeled::from_iter([("count", 3_i64)]);
        assert_eq!(query.extract(&row).unwrap(), 3);
    }

    #[test]
    fn select_typed_projection() {
        let query = USERS
            .select(|t| {
                typed_clause::count()
                    .and(typed_clause::writetime(&t.city))
                    .and(typed_clause::ttl(&t.city))
            })
            .where_(USERS.id.eq("a"));
        assert_eq!(
            query.query_text().as_str(),
            "SELECT COUNT(*), WRITETIME(city), TTL(city) FROM users WHERE id = 'a'"
        );
        let row = RowLabeled::from_iter([
            ("count", Value::Int64(Some(1))),
            ("writetime(city)", Value::Int64(Some(1704067200000000))),
            ("ttl(city)", Value::Int32(None)),
        ]);
        assert_eq!(query.extract(&row).unwrap(), (1, 1704067200000000, None));
    }

    #[test]
    fn select_composed_extractors() {
        let id = typed_clause::Condition::<String>::labeled(USERS.id.identifier(), "id");
        let age = typed_clause::Condition::<i32>::labeled(USERS.age.identifier(), "age");
        let city = typed_clause::Condition::<Option<String>>::labeled(
            USERS.city.identifier(),
            "city",
        );
        let projection = id.clone().and(age.clone()).and(city.clone());
        assert_eq!(projection.qb().as_str(), "id, age, city");
        let row = RowLabeled::from_iter([
            ("city", Value::Varchar(None)),
            ("age", Value::Int32(Some(52))),
            ("id", Value::Varchar(Some("z".into()))),
        ]);
        assert_eq!(
            projection.extract(&row).unwrap(),
            (
                id.extract(&row).unwrap(),
                age.extract(&row).unwrap(),
                city.extract(&row).unwrap()
            )
        );
        let query = USERS.select(|_| projection.clone()).where_(USERS.id.eq("z"));
        assert_eq!(
            query.query_text().as_str(),
            "SELECT id, age, city FROM users WHERE id = 'z'"
        );
        assert_eq!(query.extract(&row).unwrap(), ("z".to_string(), 52, None));
    }

    #[test]
    fn select_projection_order() {
        let projection = (USERS.age, typed_clause::writetime(&USERS.age), USERS.id);
        assert_eq!(projection.qb().as_str(), "age, WRITETIME(age), id");
        let row = RowLabeled::from_iter([
            ("id", Value::Varchar(Some("b".into()))),
            ("writetime(age)", Value::Int64(Some(7))),
            ("age", Value::Int32(Some(41))),
        ]);
        assert_eq!(projection.extract(&row).unwrap(), (41, 7, "b".to_string()));
    }

    #[test]
    fn select_ordering() {
        let device = Uuid::nil();
        let asc = EVENTS
            .select_all()
            .where_(EVENTS.device.eq(device))
            .order_by(EVENTS.at.asc());
        let ascending = EVENTS
            .select_all()
            .where_(EVENTS.device.eq(device))
            .order_by(EVENTS.at.ascending());
        assert_eq!(asc.query_text(), ascending.query_text());
        assert_eq!(EVENTS.at.desc().qb(), EVENTS.at.descending().qb());
        let query = EVENTS
            .select(|t| (t.at, t.payload))
            .where_(EVENTS.device.eq(device))
            .and(EVENTS.at.gte(100))
            .order_by([EVENTS.at.desc(), EVENTS.seq.asc()])
            .limit(10);
        assert_eq!(
            query.query_text().as_str(),
            indoc! {r#"
                SELECT at, payload FROM telemetry.events
                WHERE device = 00000000-0000-0000-0000-000000000000 AND at >= 100
                ORDER BY at DESC, seq ASC LIMIT 10
            "#}
            .trim()
            .replace('\n', " ")
        );
    }

    #[test]
    fn select_filtering() {
        let query = EVENTS
            .select(|t| t.payload)
            .where_(EVENTS.at.in_([1, 2, 3]))
            .limit(5)
            .allow_filtering();
        assert_eq!(
            query.query_text().as_str(),
            "SELECT payload FROM telemetry.events WHERE at IN (1, 2, 3) LIMIT 5 ALLOW FILTERING"
        );
        assert!(query.routing_tokens().is_empty());
    }

    #[test]
    fn select_prepared() {
        init_logs();
        let prepared = EVENTS
            .select_all()
            .consistency_level(Consistency::LocalOne)
            .where_(EVENTS.device.eq_param())
            .and(EVENTS.at.cmp(operator_clause::prepared(Operator::GreaterEqual)))
            .and(EVENTS.seq.cmp(operator_clause::lt(4)))
            .prepare();
        assert_eq!(
            prepared.text().as_str(),
            "SELECT * FROM telemetry.events WHERE device = ? AND at >= ? AND seq < 4"
        );
        assert_eq!(prepared.text().placeholders(), 2);
        assert_eq!(prepared.types(), [Value::Uuid(None), Value::Int64(None)]);
        assert_eq!(prepared.consistency(), Some(Consistency::LocalOne));
        let bound = prepared.bind((Uuid::nil(), 1000_i64));
        assert_eq!(
            bound.values,
            [Value::Uuid(Some(Uuid::nil())), Value::Int64(Some(1000))]
        );
    }

    #[test]
    fn select_in_param() {
        let prepared = USERS
            .select(|t| t.city)
            .where_(USERS.id.in_param())
            .prepare();
        assert_eq!(
            prepared.text().as_str(),
            "SELECT city FROM users WHERE id IN ?"
        );
        let bound = prepared.bind((vec!["a".to_string(), "b".to_string()],));
        assert_eq!(
            bound.values,
            [Value::List(
                Some(vec![
                    Value::Varchar(Some("a".into())),
                    Value::Varchar(Some("b".into()))
                ]),
                Box::new(Value::Varchar(None))
            )]
        );
    }

    #[test]
    fn select_routing() {
        let query = USERS.select_all().where_(USERS.id.eq("test"));
        let tokens = query.routing_tokens();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].column, "id");
        assert_eq!(tokens[0].value, Value::Varchar(Some("test".into())));
        let prepared = query.prepare();
        assert_eq!(prepared.routing_tokens(), tokens);
    }

    #[test]
    fn select_token_range() {
        let query = USERS
            .select(|t| t.id)
            .where_(USERS.id.token(Operator::Greater, "m"))
            .limit(100);
        assert_eq!(
            query.query_text().as_str(),
            "SELECT id FROM users WHERE token(id) > token('m') LIMIT 100"
        );
    }

    #[test]
    fn select_long_non_ascii_text() {
        init_logs();
        let id = format!("{}é", "a".repeat(464));
        let query = USERS.select_all().where_(USERS.id.eq(id.clone()));
        let text = query.build();
        assert_eq!(text, format!("SELECT * FROM users WHERE id = '{id}'"));
        assert_eq!(text.len(), 499);
        let prepared = query.prepare();
        let shown = prepared.to_string();
        assert_eq!(shown, format!("{}...", &text[..496]));
        assert_eq!(prepared.bind(()).to_string(), shown);
    }

    #[test]
    fn select_quoted_names() {
        let table = TableRef::with_keyspace("Shop", "order");
        let query = table.select_all();
        assert_eq!(query.query_text().as_str(), r#"SELECT * FROM "Shop"."order""#);
        assert_eq!(table.full_name(), "Shop.order");
    }
}
