mod common;

#[cfg(test)]
mod tests {
    use crate::common::{EVENTS, PAGE_VIEWS, USERS, init_logs};
    use indoc::indoc;
    use turret::{
        Consistency, ParamList, SerialConsistency, Statement, Table, Value,
        clause::{operator_clause, using_clause},
    };
    use uuid::Uuid;

    fn params_len<S: Statement>(_: &S) -> usize {
        <S::Params as ParamList>::LEN
    }

    #[test]
    fn update_limit_before_assignments() {
        let query = USERS.update().where_(USERS.id.eq("test")).limit(1);
        assert_eq!(query.qb().as_str(), "WHERE id = 'test' LIMIT 1");
        let query = query.modify(USERS.city.set("London"));
        assert_eq!(
            query.query_text().as_str(),
            "UPDATE users SET city = 'London' WHERE id = 'test' LIMIT 1"
        );
    }

    #[test]
    fn update_compare_and_set_parameter() {
        let condition = USERS.name.is_param();
        assert_eq!(condition.qb().as_str(), "name = ?");
        let query = USERS
            .update()
            .where_(USERS.id.eq("test"))
            .limit(1)
            .modify(USERS.city.set("London"))
            .only_if(condition);
        assert_eq!(
            query.query_text().as_str(),
            "UPDATE users SET city = 'London' WHERE id = 'test' LIMIT 1 IF name = ?"
        );
        assert_eq!(params_len(&query), 1);
        assert_eq!(query.prepare().types(), [Value::Varchar(None)]);
    }

    #[test]
    fn update_ordered() {
        let query = EVENTS
            .update()
            .where_(EVENTS.device.eq(Uuid::nil()))
            .order_by(EVENTS.at.desc())
            .limit(3)
            .modify(EVENTS.payload.set("{}"));
        assert_eq!(
            query.query_text().as_str(),
            indoc! {"
                UPDATE telemetry.events SET payload = '{}'
                WHERE device = 00000000-0000-0000-0000-000000000000 ORDER BY at DESC LIMIT 3
            "}
            .trim()
            .replace('\n', " ")
        );
    }

    #[test]
    fn update_parameters_order() {
        init_logs();
        let query = USERS
            .update()
            .where_(USERS.id.eq_param())
            .modify(USERS.city.set_param())
            .and(USERS.age.set(30))
            .and(USERS.scores.append_param())
            .only_if(USERS.age.is_param());
        let prepared = query.prepare();
        assert_eq!(
            prepared.text().as_str(),
            "UPDATE users SET city = ?, age = 30, scores = scores + ? WHERE id = ? IF age = ?"
        );
        assert_eq!(prepared.text().placeholders(), 4);
        assert_eq!(params_len(&query), 4);
        assert_eq!(
            prepared.types(),
            [
                Value::Varchar(None),
                Value::List(None, Box::new(Value::Int32(None))),
                Value::Varchar(None),
                Value::Int32(None),
            ]
        );
        let bound = prepared.bind(("London", vec![1, 2], "test", 30));
        assert_eq!(
            bound.values,
            [
                Value::Varchar(Some("London".into())),
                Value::List(
                    Some(vec![Value::Int32(Some(1)), Value::Int32(Some(2))]),
                    Box::new(Value::Int32(None))
                ),
                Value::Varchar(Some("test".into())),
                Value::Int32(Some(30)),
            ]
        );
    }

    #[test]
    fn update_skipped_assignment() {
        let nickname: Option<&str> = None;
        let query = USERS
            .update()
            .where_(USERS.id.eq("a"))
            .modify(USERS.age.set(5))
            .and(USERS.city.set_if_some(nickname))
            .and(USERS.nickname.set_if_some(Some(Some("Al".to_string()))));
        assert_eq!(
            query.query_text().as_str(),
            "UPDATE users SET age = 5, nickname = 'Al' WHERE id = 'a'"
        );
        assert_eq!(params_len(&query), 0);
        assert!(USERS.city.set_if_some(None::<String>).is_skipped());
        let city = USERS.city.set_if_some(Some("Rome"));
        assert!(!city.is_skipped());
        assert_eq!(city.qb().map(|qb| qb.as_str()), Some("city = 'Rome'"));
    }

    #[test]
    fn update_every_optional_assignment_skipped() {
        let query = USERS
            .update()
            .where_(USERS.id.eq_param())
            .modify(USERS.age.set_param())
            .and(USERS.city.set_if_some(None::<String>))
            .and(USERS.name.set_if_some(None::<&str>));
        let prepared = query.prepare();
        assert_eq!(
            prepared.text().as_str(),
            "UPDATE users SET age = ? WHERE id = ?"
        );
        assert_eq!(prepared.text().placeholders(), params_len(&query));
        assert_eq!(prepared.types(), [Value::Int32(None), Value::Varchar(None)]);
    }

    #[test]
    fn update_set_null() {
        let query = USERS
            .update()
            .where_(USERS.id.eq("a"))
            .modify(USERS.nickname.set(None::<String>));
        assert_eq!(
            query.query_text().as_str(),
            "UPDATE users SET nickname = null WHERE id = 'a'"
        );
    }

    #[test]
    fn update_collections() {
        let query = USERS
            .update()
            .where_(USERS.id.eq("a"))
            .modify(USERS.tags.put("color", "red"))
            .and(USERS.tags.put_all([("size", "L")]))
            .and(USERS.tags.remove_keys(["old"]))
            .and(USERS.emails.add(["a@example.com"]))
            .and(USERS.emails.remove(["b@example.com"]))
            .and(USERS.scores.prepend([1]))
            .and(USERS.scores.discard([2, 3]))
            .and(USERS.scores.set_at(0, 7));
        assert_eq!(
            query.query_text().as_str(),
            indoc! {"
                UPDATE users SET tags['color'] = 'red',
                tags = tags + {'size': 'L'},
                tags = tags - {'old'},
                emails = emails + {'a@example.com'},
                emails = emails - {'b@example.com'},
                scores = [1] + scores,
                scores = scores - [2, 3],
                scores[0] = 7
                WHERE id = 'a'
            "}
            .trim()
            .replace('\n', " ")
        );
    }

    #[test]
    fn update_counter() {
        let query = PAGE_VIEWS
            .update()
            .where_(PAGE_VIEWS.page.eq("home"))
            .modify(PAGE_VIEWS.views.increment(1))
            .consistency_level(Consistency::Quorum);
        assert_eq!(
            query.query_text().as_str(),
            "UPDATE page_views SET views = views + 1 WHERE page = 'home'"
        );
        assert_eq!(query.consistency(), Some(Consistency::Quorum));
        let query = PAGE_VIEWS
            .update()
            .where_(PAGE_VIEWS.page.eq("home"))
            .modify(PAGE_VIEWS.views.decrement(2));
        assert_eq!(
            query.query_text().as_str(),
            "UPDATE page_views SET views = views - 2 WHERE page = 'home'"
        );
    }

    #[test]
    fn update_using() {
        let query = USERS
            .update()
            .where_(USERS.id.eq("a"))
            .modify(USERS.city.set("Oslo"))
            .ttl(60)
            .timestamp(1000);
        assert_eq!(
            query.query_text().as_str(),
            "UPDATE users USING TTL 60 AND TIMESTAMP 1000 SET city = 'Oslo' WHERE id = 'a'"
        );
        let query = USERS
            .update()
            .where_(USERS.id.eq("a"))
            .modify(USERS.city.set("Oslo"))
            .using(using_clause::Condition::ttl_duration(
                std::time::Duration::from_secs(3600),
            ));
        assert_eq!(
            query.query_text().as_str(),
            "UPDATE users USING TTL 3600 SET city = 'Oslo' WHERE id = 'a'"
        );
    }

    #[test]
    fn update_compare_and_set() {
        let query = USERS
            .update()
            .where_(USERS.id.eq("a"))
            .modify(USERS.age.set(19))
            .only_if(USERS.age.is_gt(17))
            .and(USERS.nickname.is_null())
            .serial_consistency_level(SerialConsistency::LocalSerial);
        assert_eq!(
            query.query_text().as_str(),
            "UPDATE users SET age = 19 WHERE id = 'a' IF age > 17 AND nickname = null"
        );
        let prepared = query.prepare();
        assert_eq!(
            prepared.serial_consistency(),
            Some(SerialConsistency::LocalSerial)
        );
        assert_eq!(prepared.routing_tokens().len(), 1);
    }

    #[test]
    fn update_compare_and_set_collections() {
        let query = USERS
            .update()
            .where_(USERS.id.eq("a"))
            .modify(USERS.city.set("Oslo"))
            .only_if(USERS.scores.is_cmp(operator_clause::contains(7)))
            .and(USERS.tags.is_cmp(operator_clause::contains_key("color")))
            .and(USERS.tags.is_cmp(operator_clause::contains("red")));
        assert_eq!(
            query.query_text().as_str(),
            indoc! {"
                UPDATE users SET city = 'Oslo' WHERE id = 'a'
                IF scores CONTAINS 7 AND tags CONTAINS KEY 'color' AND tags CONTAINS 'red'
            "}
            .trim()
            .replace('\n', " ")
        );
        assert_eq!(params_len(&query), 0);
    }

    #[test]
    fn update_if_exists() {
        let query = EVENTS
            .update()
            .where_(EVENTS.device.eq(Uuid::nil()))
            .and(EVENTS.at.eq(5))
            .and(EVENTS.seq.eq(0))
            .modify(EVENTS.owner.set("ops"))
            .if_exists();
        assert_eq!(
            query.query_text().as_str(),
            indoc! {"
                UPDATE telemetry.events SET owner = 'ops'
                WHERE device = 00000000-0000-0000-0000-000000000000 AND at = 5 AND seq = 0
                IF EXISTS
            "}
            .trim()
            .replace('\n', " ")
        );
        assert_eq!(query.inner().table().table_ref().name, "events");
    }

    #[test]
    fn update_escaping() {
        let query = USERS
            .update()
            .where_(USERS.id.eq("x'); DROP TABLE users; --"))
            .modify(USERS.city.set("L'Aquila"));
        assert_eq!(
            query.query_text().as_str(),
            "UPDATE users SET city = 'L''Aquila' WHERE id = 'x''); DROP TABLE users; --'"
        );
    }
}
